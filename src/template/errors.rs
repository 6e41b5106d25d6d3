use thiserror::Error;

/// Structural problems with a template, reported before any search starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Template cannot be empty")]
    EmptyTemplate,
    #[error("Template has no '=' separator: \"{0}\"")]
    NoEqualitySeparator(String),
    #[error("Template has {count} '=' separators, expected exactly one: \"{template}\"")]
    MultipleEqualitySeparators { template: String, count: usize },
    #[error("Expected {expected} substitution symbols, got {found}")]
    ArityMismatch { expected: usize, found: usize },
}
