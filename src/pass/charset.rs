//! Character pool building for password generation.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::GenError;

/// Printable ASCII, space through tilde.
const PRINTABLE: std::ops::RangeInclusive<u8> = 32..=126;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    #[cfg(test)]
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Classify a byte by its ASCII range. Anything outside the letter and
    /// digit ranges, space included, is a symbol.
    pub fn of(byte: u8) -> Self {
        match byte {
            b'A'..=b'Z' => CharClass::Uppercase,
            b'a'..=b'z' => CharClass::Lowercase,
            b'0'..=b'9' => CharClass::Digit,
            _ => CharClass::Symbol,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolEntry {
    pub ch: char,
    pub class: CharClass,
}

/// Working set of candidate characters. Shrinks as generation removes
/// symbols or already-used characters.
#[derive(Debug, Clone)]
pub struct Pool {
    entries: Vec<PoolEntry>,
}

impl Pool {
    /// Build the pool from printable ASCII, leaving out the excluded classes.
    pub fn build(excluded: &[CharClass]) -> Result<Self, GenError> {
        let entries: Vec<PoolEntry> = PRINTABLE
            .map(|b| PoolEntry {
                ch: b as char,
                class: CharClass::of(b),
            })
            .filter(|e| !excluded.contains(&e.class))
            .collect();

        if entries.is_empty() {
            return Err(GenError::PoolEmpty);
        }

        debug!(size = entries.len(), ?excluded, "built character pool");
        Ok(Self { entries })
    }

    #[cfg(test)]
    pub fn from_entries(entries: Vec<PoolEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    pub fn remove_class(&mut self, class: CharClass) {
        self.entries.retain(|e| e.class != class);
    }

    pub fn remove_char(&mut self, ch: char) {
        self.entries.retain(|e| e.ch != ch);
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.entries.shuffle(rng);
    }

    /// Uniform pick. `None` only when the pool is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PoolEntry> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries[rng.random_range(0..self.entries.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn classifies_ascii_ranges() {
        assert_eq!(CharClass::of(b'A'), CharClass::Uppercase);
        assert_eq!(CharClass::of(b'Z'), CharClass::Uppercase);
        assert_eq!(CharClass::of(b'a'), CharClass::Lowercase);
        assert_eq!(CharClass::of(b'z'), CharClass::Lowercase);
        assert_eq!(CharClass::of(b'0'), CharClass::Digit);
        assert_eq!(CharClass::of(b'9'), CharClass::Digit);
        assert_eq!(CharClass::of(b' '), CharClass::Symbol);
        assert_eq!(CharClass::of(b'~'), CharClass::Symbol);
        assert_eq!(CharClass::of(b'@'), CharClass::Symbol);
        assert_eq!(CharClass::of(b'['), CharClass::Symbol);
    }

    #[test]
    fn full_pool_covers_printable_ascii() {
        let pool = Pool::build(&[]).unwrap();
        assert_eq!(pool.len(), 95);

        let count = |class: CharClass| pool.entries().iter().filter(|e| e.class == class).count();
        assert_eq!(count(CharClass::Lowercase), 26);
        assert_eq!(count(CharClass::Uppercase), 26);
        assert_eq!(count(CharClass::Digit), 10);
        assert_eq!(count(CharClass::Symbol), 33);
    }

    #[test]
    fn pool_has_no_duplicates() {
        let pool = Pool::build(&[]).unwrap();
        let mut chars: Vec<char> = pool.entries().iter().map(|e| e.ch).collect();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), pool.len());
    }

    #[test]
    fn excluded_classes_are_dropped() {
        let pool = Pool::build(&[CharClass::Symbol, CharClass::Digit]).unwrap();
        assert_eq!(pool.len(), 52);
        assert!(pool.entries().iter().all(|e| e.ch.is_ascii_alphabetic()));
    }

    #[test]
    fn excluding_everything_is_an_error() {
        let err = Pool::build(&CharClass::ALL).unwrap_err();
        assert!(matches!(err, GenError::PoolEmpty));
        assert_eq!(err.to_string(), "No characters are allowed!");
    }

    #[test]
    fn removals_shrink_the_pool() {
        let mut pool = Pool::build(&[]).unwrap();
        pool.remove_class(CharClass::Symbol);
        assert_eq!(pool.len(), 62);
        pool.remove_char('q');
        assert_eq!(pool.len(), 61);
        assert!(pool.entries().iter().all(|e| e.ch != 'q'));
    }

    #[test]
    fn pick_from_empty_pool_is_none() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pool = Pool::from_entries(Vec::new());
        assert!(pool.pick(&mut rng).is_none());
    }

    #[test]
    fn shuffle_keeps_entries() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut pool = Pool::build(&[CharClass::Symbol]).unwrap();
        let before: Vec<char> = pool.entries().iter().map(|e| e.ch).collect();
        pool.shuffle(&mut rng);
        let mut after: Vec<char> = pool.entries().iter().map(|e| e.ch).collect();
        after.sort_unstable();
        assert_eq!(before, after);
    }
}
