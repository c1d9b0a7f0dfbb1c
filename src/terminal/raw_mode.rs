//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};

use crate::error::{Error, Result};

/// Guard that restores cooked mode when dropped.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enable raw mode. If it was already on (nested input), the guard leaves
    /// it on when dropped.
    pub fn new() -> Result<Self> {
        if is_raw_mode_enabled().unwrap_or(false) {
            return Ok(Self { active: false });
        }
        enable_raw_mode().map_err(|e| Error::Terminal(e.to_string()))?;
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}
