use log::debug;

use crate::alphabet::Operator;
use crate::expression::ast::Expression;
use crate::expression::constants::MAX_NESTING_DEPTH;
use crate::expression::errors::ExpressionError;
use crate::expression::lexer::{Token, TokenKind, tokenize};

/// Recursive-descent parser over a token slice.
///
/// Grammar, loosest binding first:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/' | '//' | '%') unary)*
/// unary      := ('+' | '-') unary | power
/// power      := primary ('^' unary)?
/// primary    := number | '(' expression ')'
/// ```
///
/// `^` takes a unary operand on its right, which makes it right-associative
/// and lets `2^-1` parse.
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consume the next token if it is one of `ops`
    fn eat_operator(&mut self, ops: &[Operator]) -> Option<Operator> {
        let op = match self.peek() {
            Some(Token {
                kind: TokenKind::Operator(op),
                ..
            }) if ops.contains(op) => *op,
            _ => return None,
        };
        self.pos += 1;
        Some(op)
    }

    fn descend(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ExpressionError::NestingTooDeep(MAX_NESTING_DEPTH));
        }
        Ok(())
    }

    fn unexpected(token: &Token) -> ExpressionError {
        ExpressionError::UnexpectedToken {
            found: token.kind.to_string(),
            position: token.position,
        }
    }

    fn parse_expression(&mut self) -> Result<Expression, ExpressionError> {
        let mut lhs = self.parse_term()?;
        let depth = self.depth;
        while let Some(op) = self.eat_operator(&[Operator::Add, Operator::Sub]) {
            // Each operator in a chain adds a level to the left-leaning tree
            self.descend()?;
            let rhs = self.parse_term()?;
            lhs = match op {
                Operator::Add => Expression::Add(Box::new(lhs), Box::new(rhs)),
                _ => Expression::Sub(Box::new(lhs), Box::new(rhs)),
            };
        }
        self.depth = depth;
        Ok(lhs)
    }

    fn eat_term_operator(&mut self) -> Option<TokenKind> {
        let kind = match self.peek() {
            Some(Token {
                kind:
                    kind @ (TokenKind::FloorDiv
                    | TokenKind::Operator(Operator::Mul | Operator::Div | Operator::Rem)),
                ..
            }) => *kind,
            _ => return None,
        };
        self.pos += 1;
        Some(kind)
    }

    fn parse_term(&mut self) -> Result<Expression, ExpressionError> {
        let mut lhs = self.parse_unary()?;
        let depth = self.depth;
        while let Some(kind) = self.eat_term_operator() {
            self.descend()?;
            let rhs = self.parse_unary()?;
            lhs = match kind {
                TokenKind::Operator(Operator::Mul) => {
                    Expression::Mul(Box::new(lhs), Box::new(rhs))
                }
                TokenKind::Operator(Operator::Div) => {
                    Expression::Div(Box::new(lhs), Box::new(rhs))
                }
                TokenKind::FloorDiv => Expression::FloorDiv(Box::new(lhs), Box::new(rhs)),
                _ => Expression::Rem(Box::new(lhs), Box::new(rhs)),
            };
        }
        self.depth = depth;
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expression, ExpressionError> {
        let Some(op) = self.eat_operator(&[Operator::Add, Operator::Sub]) else {
            return self.parse_power();
        };

        self.descend()?;
        let operand = self.parse_unary();
        self.depth -= 1;

        match op {
            Operator::Sub => Ok(Expression::Neg(Box::new(operand?))),
            _ => operand,
        }
    }

    fn parse_power(&mut self) -> Result<Expression, ExpressionError> {
        let base = self.parse_primary()?;
        if self.eat_operator(&[Operator::Pow]).is_none() {
            return Ok(base);
        }

        self.descend()?;
        let exponent = self.parse_unary();
        self.depth -= 1;

        Ok(Expression::Pow(Box::new(base), Box::new(exponent?)))
    }

    fn parse_primary(&mut self) -> Result<Expression, ExpressionError> {
        let token = *self.peek().ok_or(ExpressionError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(n) => {
                self.pos += 1;
                Ok(Expression::Number(n))
            }
            TokenKind::LeftParen => {
                self.pos += 1;
                self.descend()?;
                let inner = self.parse_expression();
                self.depth -= 1;
                let inner = inner?;

                match self.peek() {
                    Some(Token {
                        kind: TokenKind::RightParen,
                        ..
                    }) => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    Some(other) => Err(Self::unexpected(other)),
                    None => Err(ExpressionError::UnbalancedParentheses),
                }
            }
            TokenKind::RightParen | TokenKind::Operator(_) | TokenKind::FloorDiv => {
                Err(Self::unexpected(&token))
            }
        }
    }
}

/// Parse arithmetic text into an [`Expression`].
///
/// # Errors
///
/// Returns an error for empty input, characters or literals outside the
/// grammar, misplaced operators, unbalanced parentheses and excessive nesting.
pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExpressionError::EmptyExpression);
    }

    let mut parser = Parser::new(&tokens);
    let expr = parser.parse_expression()?;

    match parser.peek() {
        None => {
            debug!("Parsed '{}' as {}", input, expr);
            Ok(expr)
        }
        Some(Token {
            kind: TokenKind::RightParen,
            ..
        }) => Err(ExpressionError::UnbalancedParentheses),
        Some(token) => Err(Parser::unexpected(token)),
    }
}
