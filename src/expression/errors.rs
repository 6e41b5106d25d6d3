use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("Malformed number literal '{0}'")]
    MalformedNumber(String),
    #[error("Integer literal with leading zero '{0}'")]
    LeadingZero(String),
    #[error("Unexpected token '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Expression nested deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("Expected exactly one '=' but found {0}")]
    SeparatorCount(usize),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Complex result from negative base with fractional exponent")]
    ComplexResult,
    #[error("Result is not a finite number")]
    Overflow,
}
