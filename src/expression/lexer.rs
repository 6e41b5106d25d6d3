use std::fmt;

use log::debug;

use crate::alphabet::Operator;
use crate::expression::constants::FLOOR_DIV;
use crate::expression::errors::ExpressionError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Operator(Operator),
    FloorDiv,
    LeftParen,
    RightParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Operator(op) => write!(f, "{}", op.as_char()),
            TokenKind::FloorDiv => write!(f, "{}", FLOOR_DIV),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
        }
    }
}

/// A token and the byte offset it starts at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Accepts `12`, `1.5`, `.5` and `5.`. Multi-digit integers may not start
/// with `0` unless every digit is `0`.
fn parse_literal(literal: &str) -> Result<f64, ExpressionError> {
    let dots = literal.matches('.').count();
    if dots > 1 || literal == "." {
        return Err(ExpressionError::MalformedNumber(literal.to_string()));
    }

    if dots == 0
        && literal.len() > 1
        && literal.starts_with('0')
        && !literal.chars().all(|c| c == '0')
    {
        debug!("Rejecting integer literal with leading zero: '{}'", literal);
        return Err(ExpressionError::LeadingZero(literal.to_string()));
    }

    literal
        .parse::<f64>()
        .map_err(|_| ExpressionError::MalformedNumber(literal.to_string()))
}

/// Split arithmetic text into tokens, skipping whitespace.
///
/// # Errors
///
/// Returns an error for characters outside the grammar and for malformed
/// number literals.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if is_number_char(c) {
            let mut end = position;
            while let Some(&(i, d)) = chars.peek() {
                if !is_number_char(d) {
                    break;
                }
                end = i + d.len_utf8();
                chars.next();
            }
            let literal = input
                .get(position..end)
                .ok_or(ExpressionError::UnexpectedEnd)?;
            tokens.push(Token {
                kind: TokenKind::Number(parse_literal(literal)?),
                position,
            });
            continue;
        }

        chars.next();
        let kind = match c {
            '/' => match chars.next_if(|&(_, next)| next == '/') {
                Some(_) => TokenKind::FloorDiv,
                None => TokenKind::Operator(Operator::Div),
            },
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            other => Operator::from_char(other)
                .map(TokenKind::Operator)
                .ok_or(ExpressionError::UnexpectedCharacter { ch: other, position })?,
        };
        tokens.push(Token { kind, position });
    }

    Ok(tokens)
}
