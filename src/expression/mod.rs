//! Restricted arithmetic grammar: tokenizer, parser, evaluator and the
//! `<left> = <right>` equation check used by the search.

mod ast;
mod constants;
mod display;
mod equation;
mod errors;
mod eval;
mod lexer;
mod parser;

pub use ast::Expression;
pub use constants::{EPSILON, EQUALS, MAX_NESTING_DEPTH};
pub use equation::{evaluate_equation, is_valid, normalize, values_equal};
pub use errors::ExpressionError;
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::parse;

#[cfg(test)]
mod tests;
