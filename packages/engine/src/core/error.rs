//! Engine error type
//!
//! Setup and input validation return `Result<T, DiceError>`; stepping never
//! fails. Non-finite or non-positive inputs are rejected up front so NaN/Inf
//! can never leak into the lifecycle state machine.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum DiceError {
    /// Edge length or mass is non-finite or not strictly positive.
    InvalidDimension {
        field: &'static str,
        value: f32,
    },
    /// A play volume bound is non-finite, or min > max on an axis.
    InvalidPlayVolume {
        axis: char,
        min: f32,
        max: f32,
    },
    /// A tuning parameter is out of its allowed range.
    InvalidParameter {
        name: &'static str,
        value: f32,
    },
    /// Non-finite vector passed to a body operation.
    NonFiniteInput {
        context: &'static str,
    },
    /// Scene configuration JSON could not be parsed.
    Config(String),
}

impl fmt::Display for DiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { field, value } => {
                write!(f, "invalid {field}: {value} (must be finite and > 0)")
            }
            Self::InvalidPlayVolume { axis, min, max } => {
                write!(f, "invalid play volume on {axis}: [{min}, {max}]")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name}: {value}")
            }
            Self::NonFiniteInput { context } => write!(f, "non-finite input to {context}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for DiceError {}

impl From<serde_json::Error> for DiceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<DiceError> for String {
    fn from(e: DiceError) -> Self {
        e.to_string()
    }
}
