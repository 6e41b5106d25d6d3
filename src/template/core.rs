use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::alphabet::Symbol;
use crate::expression::EQUALS;
use crate::template::errors::TemplateError;

/// Marker for a substitution slot
pub const WILDCARD: char = '?';

/// A validated equation template.
///
/// The text is kept split around its wildcards so that substitution only has
/// to interleave segments and symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
    segments: Vec<String>,
}

impl Template {
    /// # Errors
    ///
    /// Returns an error if the template is blank or does not contain exactly
    /// one `=`.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        debug!("Validating template: '{}'", text);

        if text.trim().is_empty() {
            warn!("Template is empty");
            return Err(TemplateError::EmptyTemplate);
        }

        match text.matches(EQUALS).count() {
            0 => {
                warn!("Template has no equality separator: '{}'", text);
                return Err(TemplateError::NoEqualitySeparator(text.to_string()));
            }
            1 => {}
            count => {
                warn!("Template has {} equality separators: '{}'", count, text);
                return Err(TemplateError::MultipleEqualitySeparators {
                    template: text.to_string(),
                    count,
                });
            }
        }

        let segments: Vec<String> = text.split(WILDCARD).map(str::to_string).collect();
        debug!("Template has {} wildcards", segments.len() - 1);

        Ok(Self {
            text: text.to_string(),
            segments,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of wildcards
    pub fn arity(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Replace wildcards left to right without checking the symbol count
    pub(crate) fn fill(&self, symbols: &[Symbol]) -> String {
        let mut out = String::with_capacity(self.text.len() + symbols.len() * 4);
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            out.push_str(first);
        }
        for (segment, symbol) in segments.zip(symbols) {
            out.push_str(&symbol.to_string());
            out.push_str(segment);
        }
        out
    }

    /// Replace the i-th wildcard with the i-th symbol.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::ArityMismatch`] unless exactly one symbol per
    /// wildcard is given.
    pub fn substitute(&self, symbols: &[Symbol]) -> Result<String, TemplateError> {
        if symbols.len() != self.arity() {
            return Err(TemplateError::ArityMismatch {
                expected: self.arity(),
                found: symbols.len(),
            });
        }
        Ok(self.fill(symbols))
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
