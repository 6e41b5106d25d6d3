use std::fmt;

use crate::iterator::{Candidate, Combination};

/// A true equation and the substitution that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    text: String,
    combination: Combination,
    coordinates: Vec<u8>,
}

impl Solution {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The solution with all whitespace removed, e.g. `1+1=2`
    pub fn compact_text(&self) -> String {
        self.text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    pub fn combination(&self) -> &Combination {
        &self.combination
    }

    /// One ordinate per wildcard. Fractions all share the same ordinate, so
    /// use [`Solution::text`] to tell them apart.
    pub fn coordinates(&self) -> &[u8] {
        &self.coordinates
    }
}

impl From<Candidate> for Solution {
    fn from(candidate: Candidate) -> Self {
        let coordinates = candidate.combination.ordinates();
        Self {
            text: candidate.text,
            combination: candidate.combination,
            coordinates,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let coordinates: Vec<String> = self.coordinates.iter().map(u8::to_string).collect();
        write!(f, "{} ({})", self.compact_text(), coordinates.join(", "))
    }
}

/// Whether the search visited every candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Completed,
    Cancelled,
}

/// How many axes a presentation needs for a given arity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimensionality {
    Point,
    Line,
    Plane,
    Space,
    Unplottable(usize),
}

impl Dimensionality {
    pub fn from_arity(arity: usize) -> Self {
        match arity {
            0 => Dimensionality::Point,
            1 => Dimensionality::Line,
            2 => Dimensionality::Plane,
            3 => Dimensionality::Space,
            n => Dimensionality::Unplottable(n),
        }
    }
}

/// Solutions of one search in generation order
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    arity: usize,
    solutions: Vec<Solution>,
    status: SearchStatus,
}

impl ResultSet {
    pub(crate) fn new(arity: usize, solutions: Vec<Solution>, status: SearchStatus) -> Self {
        Self {
            arity,
            solutions,
            status,
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn dimensionality(&self) -> Dimensionality {
        Dimensionality::from_arity(self.arity)
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Completed
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// `true` for a search that found nothing; check [`ResultSet::is_complete`]
    /// to tell "no solutions" from "cancelled early"
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    /// `(solution_text, coordinates)` pairs for presentation layers
    pub fn into_pairs(self) -> Vec<(String, Vec<u8>)> {
        self.solutions
            .into_iter()
            .map(|solution| (solution.text, solution.coordinates))
            .collect()
    }
}

impl IntoIterator for ResultSet {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}
