//! Substitution alphabet: operators, digits and fractional constants, and the
//! ordinate each symbol occupies on a presentation axis.

mod constants;
mod errors;
mod symbol;

pub use constants::{
    BASE_ALPHABET_SIZE, DIGITS, FRACTION_ORDINATE, FULL_ALPHABET_SIZE, OPERATORS, alphabet,
    axis_labels,
};
pub use errors::AlphabetError;
pub use symbol::{Operator, Symbol, ordinate};

#[cfg(test)]
mod tests;
