//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, warn};
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    pub fn open() -> Result<Self> {
        ClipboardContext::new()
            .map(|ctx| Self { ctx })
            .map_err(|e| {
                warn!("clipboard unavailable: {}", e);
                Error::Clipboard(e.to_string())
            })
    }

    pub fn copy(&mut self, text: &str) -> Result<()> {
        copy_to(&mut self.ctx, text)
    }
}

/// Put `text` on the clipboard. An empty value is refused rather than
/// clearing whatever the user had there.
pub fn copy_to<C: ClipboardProvider>(ctx: &mut C, text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::NothingToCopy);
    }

    ctx.set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    // Some backends hand back a copy; don't leave it in our heap.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }

    debug!("copied {} characters to clipboard", text.len());
    Ok(())
}
