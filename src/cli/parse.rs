use std::num::IntErrorKind;
use std::str::FromStr;

use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number for --{flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Missing value for --{0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse command-line arguments (including the program name at index 0).
///
/// Long flags are case-insensitive and take values either as `--key=value`
/// or as the next argument. Bare words are ignored.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();

        let (key, inline) = if let Some(long) = arg.strip_prefix("--") {
            let long = long.to_lowercase();
            match long.split_once('=') {
                Some((k, v)) => (k.to_string(), Some(v.to_string())),
                None => (long, None),
            }
        } else if arg.starts_with('-') && arg.len() > 1 {
            (arg.to_string(), None)
        } else {
            i += 1;
            continue;
        };

        let mut value = |name: &str| -> Result<String, ParseError> {
            if let Some(v) = inline.clone() {
                return Ok(v);
            }
            match args.get(i + 1) {
                Some(next) if !next.starts_with('-') => {
                    i += 1;
                    Ok(next.clone())
                }
                _ => Err(ParseError::MissingValue(name.to_string())),
            }
        };

        match key.as_str() {
            "-h" | "help" => flags.help = true,
            "-v" | "version" => flags.version = true,
            "-q" | "quiet" => flags.quiet = true,
            "verbose" => flags.verbose = true,
            "-b" | "board" => flags.clipboard = true,
            "no-symbols" => flags.no_symbols = true,
            "no-digits" | "no-numbers" => flags.no_digits = true,
            "no-lower" => flags.no_lower = true,
            "no-upper" => flags.no_upper = true,
            "unique-chars" => flags.unique_chars = true,
            "-l" | "length" => flags.length = Some(saturating("length", value("length")?)?),
            "max-symbols" => {
                flags.max_symbols = Some(saturating("max-symbols", value("max-symbols")?)?)
            }
            "shuffles" => flags.shuffles = Some(number("shuffles", value("shuffles")?)?),
            "-n" | "number" => flags.number = Some(saturating("number", value("number")?)?),
            "seed" => flags.seed = Some(number("seed", value("seed")?)?),
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number<T: FromStr>(flag: &str, value: String) -> Result<T, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

/// Like `number`, but integers too large for `usize` become `usize::MAX`
/// so the later clamp applies to them.
fn saturating(flag: &str, value: String) -> Result<usize, ParseError> {
    match value.trim().parse::<usize>() {
        Ok(n) => Ok(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        Err(_) => Err(ParseError::InvalidNumber {
            flag: flag.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments_gives_defaults() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn equals_and_separate_values() {
        let flags = parse(&args(&["--length=20", "--max-symbols", "3", "--shuffles=2"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.max_symbols, Some(3));
        assert_eq!(flags.shuffles, Some(2));
    }

    #[test]
    fn keys_are_case_insensitive() {
        let flags = parse(&args(&["--LENGTH=12", "--No-Symbols", "--UNIQUE-CHARS"])).unwrap();
        assert_eq!(flags.length, Some(12));
        assert!(flags.no_symbols);
        assert!(flags.unique_chars);
    }

    #[test]
    fn no_numbers_is_an_alias() {
        assert!(parse(&args(&["--no-numbers"])).unwrap().no_digits);
        assert!(parse(&args(&["--no-digits"])).unwrap().no_digits);
    }

    #[test]
    fn class_flags() {
        let flags = parse(&args(&["--no-lower", "--no-upper"])).unwrap();
        assert!(flags.no_lower);
        assert!(flags.no_upper);
        assert!(!flags.no_digits);
        assert!(!flags.no_symbols);
    }

    #[test]
    fn short_flags() {
        let flags = parse(&args(&["-h", "-q", "-b", "-n", "3", "-l", "9"])).unwrap();
        assert!(flags.help);
        assert!(flags.quiet);
        assert!(flags.clipboard);
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.length, Some(9));
    }

    #[test]
    fn bare_words_are_ignored() {
        let flags = parse(&args(&["hello", "--no-upper", "world"])).unwrap();
        assert!(flags.no_upper);
    }

    #[test]
    fn invalid_number_is_reported() {
        let err = parse(&args(&["--length=abc"])).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                flag: "length".into(),
                value: "abc".into()
            }
        );
        assert_eq!(err.to_string(), "Invalid number for --length: abc");

        assert!(matches!(
            parse(&args(&["--max-symbols=-1"])),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn missing_value_is_reported() {
        assert_eq!(
            parse(&args(&["--length"])).unwrap_err(),
            ParseError::MissingValue("length".into())
        );
        assert_eq!(
            parse(&args(&["--shuffles", "--no-upper"])).unwrap_err(),
            ParseError::MissingValue("shuffles".into())
        );
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert_eq!(
            parse(&args(&["--frobnicate"])).unwrap_err(),
            ParseError::UnknownArg("--frobnicate".into())
        );
    }

    #[test]
    fn oversized_counts_saturate() {
        let flags = parse(&args(&[
            "--length=99999999999999999999999",
            "--max-symbols=99999999999999999999999",
            "-n",
            "99999999999999999999999",
        ]))
        .unwrap();
        assert_eq!(flags.length, Some(usize::MAX));
        assert_eq!(flags.max_symbols, Some(usize::MAX));
        assert_eq!(flags.number, Some(usize::MAX));

        assert!(matches!(
            parse(&args(&["--shuffles=99999999999999999999999"])),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse(&args(&["--length=-99999999999999999999999"])),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn seed_takes_u64() {
        let flags = parse(&args(&["--seed=18446744073709551615"])).unwrap();
        assert_eq!(flags.seed, Some(u64::MAX));
    }
}
