use std::fmt;

use crate::alphabet::Symbol;

/// One symbol per wildcard, in template order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Combination(Vec<Symbol>);

impl Combination {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Axis position of each symbol
    pub fn ordinates(&self) -> Vec<u8> {
        self.0.iter().map(|symbol| symbol.ordinate()).collect()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, ")")
    }
}

/// A fully substituted template and the combination that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    pub combination: Combination,
}
