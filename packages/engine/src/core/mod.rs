//! Cross-cutting pieces: logging macro (must load first for macro export) and
//! the error type.

#[macro_use]
pub mod utils;
pub mod error;

pub use error::DiceError;
