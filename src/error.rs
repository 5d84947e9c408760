//! Errors raised by the conversion engine

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    /// A caller passed a value outside the documented domain
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The economy constants cannot drive the engine
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
