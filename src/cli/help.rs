use crate::settings::{DEFAULT_LENGTH, MAX_LENGTH};
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("passgen");
    box_line_center("Generate a password");
    box_line("");
    box_line("Usage: passgen [OPTION]...");
    box_line("");
    box_line(" Password:");
    box_opt(
        "  -l, --length=NUMBER",
        &format!("Password length (default: {DEFAULT_LENGTH}, max: {MAX_LENGTH})"),
    );
    box_opt("      --no-symbols", "Disallow symbols in password generation");
    box_opt("      --no-digits", "Disallow numbers (alias: --no-numbers)");
    box_opt("      --no-lower", "Disallow lowercase letters");
    box_opt("      --no-upper", "Disallow uppercase letters");
    box_opt("      --unique-chars", "Characters can only be used once");
    box_opt("      --max-symbols=NUMBER", "Limit the amount of symbols (default: length)");
    box_opt("      --shuffles=NUMBER", "Shuffle the finished password NUMBER times");
    box_line("");
    box_line(" Output:");
    box_opt("  -n, --number=NUMBER", "How many passwords to generate (default: 1)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_opt("      --verbose", "Debug logging to stderr");
    box_line("");
    box_line(" Randomness:");
    box_opt("      --seed=NUMBER", "Seed the generator for reproducible output");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("Keys are case-insensitive. Values follow '=' or a space.");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgen                          16 characters, any class");
    box_line("  passgen --length=8 --no-symbols  Letters and digits only");
    box_line("  passgen --max-symbols=2 -n 5     Five passwords, two symbols max");
    box_line("  passgen --unique-chars --shuffles=3");
    box_line("");
    box_bottom();
}
