//! Password generation.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;
use zeroize::Zeroize;

use super::GenError;
use super::charset::{CharClass, Pool};
use crate::settings::Settings;

/// Generate one password of exactly `length` characters, consuming `pool`.
///
/// Symbols stop being drawn once `max_symbols` of them have been emitted.
/// With `unique_chars`, each drawn character is removed from the pool so it
/// can't repeat. Fails with [`GenError::PoolExhausted`] if the pool runs dry
/// before the password is complete.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    mut pool: Pool,
    length: usize,
    max_symbols: usize,
    unique_chars: bool,
) -> Result<String, GenError> {
    let mut password = String::with_capacity(length);
    let mut symbol_count = 0;
    debug!(pool = pool.len(), length, max_symbols, unique_chars, "generating");

    if max_symbols == 0 {
        pool.remove_class(CharClass::Symbol);
    }

    for produced in 0..length {
        pool.shuffle(rng);

        let Some(chosen) = pool.pick(rng) else {
            password.zeroize();
            return Err(GenError::PoolExhausted {
                produced,
                requested: length,
            });
        };
        password.push(chosen.ch);

        if chosen.class == CharClass::Symbol && symbol_count < max_symbols {
            symbol_count += 1;
            if symbol_count == max_symbols {
                debug!(symbol_count, "symbol cap reached");
                pool.remove_class(CharClass::Symbol);
            }
        }

        if unique_chars {
            pool.remove_char(chosen.ch);
        }
    }

    Ok(password)
}

/// Permute the password's characters `passes` times.
pub fn shuffle_passes<R: Rng + ?Sized>(rng: &mut R, password: String, passes: usize) -> String {
    if passes == 0 {
        return password;
    }

    let mut password = password;
    let mut chars: Vec<char> = password.chars().collect();
    password.zeroize();

    for _ in 0..passes {
        chars.shuffle(rng);
    }

    let shuffled = chars.iter().collect();
    chars.zeroize();
    shuffled
}

/// Generate `settings.count` passwords, each from a fresh copy of `pool`.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &Settings,
    pool: &Pool,
) -> Result<Vec<String>, GenError> {
    let mut passwords = Vec::new();

    for n in 0..settings.count {
        let password = match generate(
            rng,
            pool.clone(),
            settings.length,
            settings.max_symbols,
            settings.unique_chars,
        ) {
            Ok(password) => password,
            Err(e) => {
                passwords.zeroize();
                return Err(e);
            }
        };
        passwords.push(shuffle_passes(rng, password, settings.shuffles));
        debug!(n, "generated password");
    }

    Ok(passwords)
}
