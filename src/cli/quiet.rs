//! Quiet mode and tty detection for CLI prompts.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Both stdin and stderr are attached to a terminal.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 && libc::isatty(libc::STDERR_FILENO) == 1 }
}

/// Prompts are skipped in quiet mode or when nobody can answer them.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
