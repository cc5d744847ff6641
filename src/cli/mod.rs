mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
mod quiet;

pub use context::run;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};
