use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::alphabet::constants::{DIGIT_ORDINATE_BASE, FRACTION_ORDINATE};
use crate::alphabet::errors::AlphabetError;

/// Binary operators that may be substituted into a wildcard slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl Operator {
    pub const fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%',
            Operator::Pow => '^',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '%' => Some(Operator::Rem),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Axis position, 1 through 6 in `+ - * / % ^` order
    pub const fn ordinate(self) -> u8 {
        match self {
            Operator::Add => 1,
            Operator::Sub => 2,
            Operator::Mul => 3,
            Operator::Div => 4,
            Operator::Rem => 5,
            Operator::Pow => 6,
        }
    }
}

/// A single symbol that can replace a wildcard.
///
/// Fractions are stored as hundredths (`Fraction(25)` is `0.250`) and always
/// render with three decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Operator(Operator),
    Digit(u8),
    Fraction(u8),
}

impl Symbol {
    /// Axis position of this symbol.
    ///
    /// Every fraction shares [`FRACTION_ORDINATE`]; use the solution text to
    /// tell fractions apart.
    pub const fn ordinate(self) -> u8 {
        match self {
            Symbol::Operator(op) => op.ordinate(),
            Symbol::Digit(d) => DIGIT_ORDINATE_BASE + d,
            Symbol::Fraction(_) => FRACTION_ORDINATE,
        }
    }

    pub const fn is_operator(self) -> bool {
        matches!(self, Symbol::Operator(_))
    }

    pub const fn is_fraction(self) -> bool {
        matches!(self, Symbol::Fraction(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Operator(op) => write!(f, "{}", op.as_char()),
            Symbol::Digit(d) => write!(f, "{}", d),
            Symbol::Fraction(hundredths) => write!(f, "0.{:02}0", hundredths),
        }
    }
}

fn parse_fraction(s: &str) -> Option<u8> {
    let rest = s.strip_prefix("0.")?;
    if rest.len() != 3 || !rest.ends_with('0') || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hundredths: u8 = rest.get(..2)?.parse().ok()?;
    (1..=99).contains(&hundredths).then_some(hundredths)
}

impl FromStr for Symbol {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operator::from_char(c) {
                return Ok(Symbol::Operator(op));
            }
            if let Some(d) = c.to_digit(10) {
                return Ok(Symbol::Digit(d as u8));
            }
        }

        parse_fraction(s)
            .map(Symbol::Fraction)
            .ok_or_else(|| AlphabetError::InvalidSymbol(s.to_string()))
    }
}

/// Map a symbol's text to its axis position.
///
/// # Errors
///
/// Returns [`AlphabetError::InvalidSymbol`] when `symbol` is not an operator,
/// a digit, or one of the `0.010`..`0.990` fractions.
pub fn ordinate(symbol: &str) -> Result<u8, AlphabetError> {
    let parsed = symbol.parse::<Symbol>().inspect_err(|e| debug!("{}", e))?;
    Ok(parsed.ordinate())
}
