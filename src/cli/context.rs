//! CLI context - bundles flags, settings and the outcome of a run.

use std::process::ExitCode;

use tracing::debug;
use zeroize::Zeroize;

use super::{CliFlags, ParseError, help, prompts, quiet};
use crate::entropy;
use crate::logging;
use crate::pass::{self, Pool};
use crate::settings::Settings;

/// How a run ended, short of success.
#[derive(Debug)]
pub enum Done {
    /// Nothing left to do; exit 0.
    Early,
    /// Reported failure; exit 1.
    Failed,
}

pub struct Context {
    pub flags: CliFlags,
    pub settings: Settings,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);
        logging::init(flags.verbose);
        debug!(?flags, "parsed flags");

        let settings = Settings::from_flags(&flags);
        Ok(Self { flags, settings })
    }

    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        let mut passwords = self.generate()?;
        let result = self.output(&passwords);
        passwords.zeroize();
        result
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            help::print_help();
            return Err(Done::Early);
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Done::Early);
        }
        Ok(())
    }

    fn generate(&self) -> Result<Vec<String>, Done> {
        let pool = Pool::build(&self.settings.excluded).map_err(|e| {
            prompts::no_characters(&e.to_string());
            Done::Early
        })?;

        let mut rng = entropy::rng(self.settings.seed);
        pass::generate_batch(&mut rng, &self.settings, &pool).map_err(|e| {
            prompts::error(&format!("Error: {e}"));
            Done::Failed
        })
    }

    fn output(&self, passwords: &[String]) -> Result<(), Done> {
        if self.settings.to_clipboard {
            match pass::output::clipboard() {
                Ok(mut ctx) => {
                    return match pass::output::copy(&mut ctx, passwords) {
                        Ok(()) => {
                            prompts::clipboard_copied(passwords.len());
                            Ok(())
                        }
                        Err(e) => {
                            prompts::clipboard_error(&e);
                            Err(Done::Failed)
                        }
                    };
                }
                Err(e) => {
                    debug!(error = %e, "clipboard unavailable");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Done::Early);
                    }
                }
            }
        }

        pass::output::print(passwords).map_err(|e| {
            prompts::error(&format!("Failed to write output: {e}"));
            Done::Failed
        })
    }
}

/// Parse arguments and run once, mapping the outcome to an exit code.
pub fn run(args: &[String]) -> ExitCode {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::warn("Try 'passgen --help' for more information.");
            return ExitCode::FAILURE;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Done::Early) => ExitCode::SUCCESS,
        Err(Done::Failed) => ExitCode::FAILURE,
    }
}
