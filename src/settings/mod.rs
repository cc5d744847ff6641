//! Password generation settings.

use tracing::debug;

use crate::cli::{CliFlags, prompts};
use crate::pass::CharClass;

pub const DEFAULT_LENGTH: usize = 16;
pub const MAX_LENGTH: usize = 60;
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub max_symbols: usize,
    pub excluded: Vec<CharClass>,
    pub unique_chars: bool,
    pub shuffles: usize,
    pub count: usize,
    pub seed: Option<u64>,
    pub to_clipboard: bool,
}

impl Settings {
    /// Resolve parsed flags into run settings, applying defaults and the
    /// length clamp.
    pub fn from_flags(flags: &CliFlags) -> Self {
        let mut settings = Settings::default();

        if let Some(len) = flags.length {
            if len > MAX_LENGTH {
                prompts::length_clamped(len, MAX_LENGTH);
            }
            settings.length = len.min(MAX_LENGTH);
        }
        settings.max_symbols = flags.max_symbols.unwrap_or(settings.length);

        if flags.no_lower {
            settings.excluded.push(CharClass::Lowercase);
        }
        if flags.no_upper {
            settings.excluded.push(CharClass::Uppercase);
        }
        if flags.no_digits {
            settings.excluded.push(CharClass::Digit);
        }
        if flags.no_symbols {
            settings.excluded.push(CharClass::Symbol);
        }

        settings.unique_chars = flags.unique_chars;
        settings.shuffles = flags.shuffles.unwrap_or(0);
        if let Some(count) = flags.number {
            if count > MAX_COUNT {
                prompts::count_capped(count, MAX_COUNT);
            }
            settings.count = count.min(MAX_COUNT);
        }
        settings.seed = flags.seed;
        settings.to_clipboard = flags.clipboard;

        debug!(?settings, "resolved settings");
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            max_symbols: DEFAULT_LENGTH,
            excluded: Vec::new(),
            unique_chars: false,
            shuffles: 0,
            count: 1,
            seed: None,
            to_clipboard: false,
        }
    }
}
