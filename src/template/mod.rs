//! Equation templates: validation, wildcard arity and substitution.

mod core;
mod errors;

pub use self::core::{Template, WILDCARD};
pub use errors::TemplateError;
