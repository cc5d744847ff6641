//! Debug diagnostics on stderr, enabled with `--verbose`.

use tracing::Level;

pub fn init(verbose: bool) {
    if !verbose {
        return;
    }

    let result = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        crate::cli::prompts::warn(&format!("Failed to start logging: {e}"));
    }
}
