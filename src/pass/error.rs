use thiserror::Error;

/// Failures of pool building and password generation.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("No characters are allowed!")]
    PoolEmpty,
    #[error("character pool exhausted after {produced} of {requested} characters")]
    PoolExhausted { produced: usize, requested: usize },
}
