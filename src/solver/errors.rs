use thiserror::Error;

use crate::template::TemplateError;

/// Errors that stop a search before it starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid template: {0}")]
    TemplateError(#[from] TemplateError),
    #[error("Search space for {arity} wildcards over {alphabet_size} symbols is too large")]
    SearchSpaceTooLarge { arity: usize, alphabet_size: usize },
}
