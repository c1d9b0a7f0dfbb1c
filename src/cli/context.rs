//! CLI context - bundles settings, flags, and clipboard state.

use log::debug;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::entropy::Sampling;
use crate::error::{Error, Result};
use crate::pass::{self, Batch, output};
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<Clipboard>,
}

impl Context {
    /// Build the settings for this run: defaults (or saved ones with `-s`)
    /// with the flags applied on top. Out-of-range values are errors.
    pub fn new(flags: CliFlags) -> Result<Self> {
        let settings = if flags.saved {
            Settings::load_or_default()
        } else {
            Settings::default()
        };

        let mut ctx = Self {
            settings,
            flags,
            clipboard: None,
        };
        ctx.apply_flags()?;
        Ok(ctx)
    }

    fn apply_flags(&mut self) -> Result<()> {
        if let Some(len) = self.flags.length {
            self.settings.length = Settings::validate_length(len)?;
        }
        if let Some(num) = self.flags.number {
            self.settings.count = Settings::validate_count(num)?;
        }

        self.settings.classes = self.flags.apply_classes(self.settings.classes);

        if self.flags.modulo {
            self.settings.sampling = Sampling::Modulo;
        }
        if self.flags.board {
            self.settings.to_clipboard = true;
        }

        debug!("cli settings: {:?}", self.settings);
        Ok(())
    }

    /// Generate and deliver the passwords.
    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.flags.quiet);

        if self.settings.to_clipboard && !self.open_clipboard() {
            return Ok(());
        }

        let batch = pass::generate_batch(&self.settings, self.settings.count);
        if let Some(notice) = self.notice_for(&batch) {
            prompts::warn(notice);
        }

        self.deliver(&batch)
    }

    /// The stderr notice owed for this batch, if any. Quiet runs get none.
    fn notice_for(&self, batch: &Batch) -> Option<&'static str> {
        (batch.fell_back && !self.flags.quiet).then_some(prompts::FALLBACK_NOTICE)
    }

    /// Returns false if the user chose to abort.
    fn open_clipboard(&mut self) -> bool {
        match Clipboard::open() {
            Ok(board) => {
                self.clipboard = Some(board);
                true
            }
            Err(_) => {
                self.settings.to_clipboard = false;
                prompts::clipboard_fallback_prompt()
            }
        }
    }

    fn deliver(&mut self, batch: &Batch) -> Result<()> {
        if let Some(board) = self.clipboard.as_mut() {
            let text = output::joined(batch);
            match board.copy(&text) {
                Ok(()) => {
                    prompts::clipboard_copied(batch.passwords.len());
                    return Ok(());
                }
                Err(e) => {
                    prompts::error(&e.to_string());
                    if !prompts::clipboard_fallback_prompt() {
                        return Ok(());
                    }
                }
            }
        }

        output::to_stdout(batch).map_err(|e| Error::Terminal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharacterClass, ClassSet};
    use clap::Parser;

    fn context(args: &[&str]) -> Result<Context> {
        let flags =
            CliFlags::try_parse_from(std::iter::once("classpass").chain(args.iter().copied()))
                .unwrap();
        Context::new(flags)
    }

    #[test]
    fn defaults_without_flags() {
        let ctx = context(&[]).unwrap();
        assert_eq!(ctx.settings, Settings::default());
    }

    #[test]
    fn flags_override_defaults() {
        let ctx = context(&["-l", "32", "-n", "4", "--upper", "--digits", "--modulo"]).unwrap();
        assert_eq!(ctx.settings.length, 32);
        assert_eq!(ctx.settings.count, 4);
        assert_eq!(ctx.settings.sampling, Sampling::Modulo);
        assert_eq!(
            ctx.settings.classes,
            ClassSet {
                lowercase: false,
                uppercase: true,
                digit: true,
                symbol: false,
            }
        );
        assert!(!ctx.settings.to_clipboard);
    }

    #[test]
    fn board_flag_requests_clipboard() {
        let ctx = context(&["-b", "--lower"]).unwrap();
        assert!(ctx.settings.to_clipboard);
        assert_eq!(ctx.settings.classes, ClassSet::only(CharacterClass::Lowercase));
    }

    #[test]
    fn out_of_range_length_is_an_error() {
        for len in ["0", "-1", "129"] {
            assert!(matches!(
                context(&["-l", len]),
                Err(Error::LengthOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn out_of_range_count_is_an_error() {
        assert!(matches!(
            context(&["-n", "0"]),
            Err(Error::CountOutOfRange { value: 0, .. })
        ));
    }

    #[test]
    fn empty_selection_notice_unless_quiet() {
        let ctx = context(&["--no-lower", "--no-upper", "--no-digits", "--no-symbols"]).unwrap();
        assert!(ctx.settings.classes.is_empty());
        let batch = pass::generate_batch(&ctx.settings, 2);
        assert!(batch.fell_back);
        assert_eq!(ctx.notice_for(&batch), Some(prompts::FALLBACK_NOTICE));

        let quiet = context(&["-q", "--no-lower", "--no-upper", "--no-digits", "--no-symbols"])
            .unwrap();
        assert_eq!(quiet.notice_for(&batch), None);
    }

    #[test]
    fn no_notice_when_a_class_is_enabled() {
        let ctx = context(&["--digits"]).unwrap();
        let batch = pass::generate_batch(&ctx.settings, 1);
        assert!(!batch.fell_back);
        assert_eq!(ctx.notice_for(&batch), None);
    }
}
