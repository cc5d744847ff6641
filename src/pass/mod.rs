//! Password generation and output.

pub mod charset;
mod error;
mod generate;
pub mod output;

pub use charset::{CharClass, Pool};
pub use error::GenError;
pub use generate::generate_batch;
