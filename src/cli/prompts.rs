//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use crossterm::style::Stylize;

use super::quiet;

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", msg.yellow());
    }
}

/// Red error on stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn length_clamped(requested: usize, max: usize) {
    warn(&format!(
        "Warning: length {requested} exceeds the maximum, using {max}"
    ));
}

pub fn count_capped(requested: usize, max: usize) {
    warn(&format!(
        "Warning: {requested} passwords exceeds the maximum, generating {max}"
    ));
}

/// Shown when every character class has been excluded. Goes to stdout
/// since it replaces the password.
pub fn no_characters(msg: &str) {
    println!("{msg}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            println!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            println!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        }
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print instead when the clipboard can't be opened.
/// Non-interactive and quiet runs fall back to the terminal without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}
