use std::iter::FusedIterator;

use log::info;

use crate::alphabet::Symbol;
use crate::iterator::generator::candidate_count;
use crate::iterator::state::OdometerState;
use crate::iterator::types::{Candidate, Combination};
use crate::template::Template;

/// Streams `(text, combination)` candidates for a template without
/// materializing the product
#[derive(Debug, Clone)]
pub struct CombinationIterator<'a> {
    template: &'a Template,
    symbols: &'a [Symbol],
    state: OdometerState,
    total: Option<usize>,
}

impl<'a> CombinationIterator<'a> {
    pub fn new(template: &'a Template, symbols: &'a [Symbol]) -> Self {
        let arity = template.arity();
        let total = candidate_count(arity, symbols.len());

        info!(
            "Enumerating {} wildcards over {} symbols ({} candidates)",
            arity,
            symbols.len(),
            total.map_or_else(|| "too many".to_string(), |n| n.to_string())
        );

        Self {
            template,
            symbols,
            state: OdometerState::new(arity, symbols.len()),
            total,
        }
    }

    /// Total number of candidates, `None` when it overflows `usize`
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    fn current(&self) -> Vec<Symbol> {
        self.state
            .indices
            .iter()
            .filter_map(|&i| self.symbols.get(i).copied())
            .collect()
    }
}

impl Iterator for CombinationIterator<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.exhausted {
            return None;
        }

        let picked = self.current();
        let text = self.template.fill(&picked);
        self.state.advance(self.symbols.len());

        Some(Candidate {
            text,
            combination: Combination::new(picked),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.exhausted {
            return (0, Some(0));
        }
        match self.total {
            Some(total) => {
                let remaining = total.saturating_sub(self.state.position);
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for CombinationIterator<'_> {}
