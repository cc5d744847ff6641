//! Password output to the terminal or the clipboard.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

/// Write passwords to stdout, one per line.
pub fn print(passwords: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut line = Vec::new();
    for password in passwords {
        line.clear();
        line.extend_from_slice(password.as_bytes());
        line.push(b'\n');
        let written = out.write_all(&line);
        line.zeroize();
        written?;
    }
    out.flush()
}

/// Open the system clipboard. Fails on headless sessions.
pub fn clipboard() -> Result<ClipboardContext, String> {
    ClipboardContext::new().map_err(|e| e.to_string())
}

/// Copy passwords to the clipboard, newline separated.
pub fn copy(ctx: &mut ClipboardContext, passwords: &[String]) -> Result<(), String> {
    let mut joined = passwords.join("\n");
    let result = ctx.set_contents(joined.clone()).map_err(|e| e.to_string());
    joined.zeroize();
    result?;

    // Reading back keeps the selection owned on X11 until we exit.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    debug!(count = passwords.len(), "copied to clipboard");
    Ok(())
}
