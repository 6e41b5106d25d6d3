use thiserror::Error;

/// Errors raised by alphabet lookups
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlphabetError {
    #[error("Invalid symbol '{0}': not an operator, digit or known fraction")]
    InvalidSymbol(String),
}
