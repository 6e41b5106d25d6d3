use log::debug;

use crate::alphabet::{Symbol, alphabet};
use crate::iterator::core::CombinationIterator;
use crate::iterator::types::{Candidate, Combination};
use crate::template::Template;

/// Enumerate every substitution of `template` over the alphabet.
///
/// The sequence is restartable: calling this again yields the same
/// candidates in the same order.
pub fn generate(template: &Template, include_fractions: bool) -> CombinationIterator<'_> {
    CombinationIterator::new(template, alphabet(include_fractions))
}

/// Size of the Cartesian product, or `None` if it does not fit in `usize`
pub fn candidate_count(arity: usize, alphabet_len: usize) -> Option<usize> {
    let exponent = u32::try_from(arity).ok()?;
    alphabet_len.checked_pow(exponent)
}

impl Template {
    /// The candidate at `index` in generation order, without walking the
    /// sequence. Returns `None` past the end.
    pub fn candidate_at(&self, symbols: &[Symbol], index: usize) -> Option<Candidate> {
        let arity = self.arity();
        let radix = symbols.len();
        let mut picked = vec![Symbol::Digit(0); arity];
        let mut rest = index;

        for slot in picked.iter_mut().rev() {
            if radix == 0 {
                return None;
            }
            *slot = *symbols.get(rest % radix)?;
            rest /= radix;
        }

        if rest != 0 {
            debug!("Candidate index {} is out of range", index);
            return None;
        }

        Some(Candidate {
            text: self.fill(&picked),
            combination: Combination::new(picked),
        })
    }

    /// Shorthand for [`generate`]
    pub fn combinations(&self, include_fractions: bool) -> CombinationIterator<'_> {
        generate(self, include_fractions)
    }
}
