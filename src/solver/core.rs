use log::{debug, info, warn};
use rayon::prelude::*;

use crate::alphabet::alphabet;
use crate::expression::is_valid;
use crate::iterator::{candidate_count, generate};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::result::{ResultSet, SearchStatus, Solution};
use crate::template::Template;

/// Exhaustive search for wildcard substitutions that make a template true
#[derive(Debug, Clone, Default)]
pub struct EquationSolver {
    config: SolverConfig,
}

impl EquationSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate `template` and search it.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is blank or does not contain exactly
    /// one `=`, or if the candidate space does not fit in memory indices.
    /// Finding no solutions is not an error.
    pub fn solve(&self, template: &str) -> Result<ResultSet, SolverError> {
        let template = Template::parse(template)?;
        self.solve_template(&template)
    }

    /// Search an already validated template.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::SearchSpaceTooLarge`] when the number of
    /// candidates overflows `usize`.
    pub fn solve_template(&self, template: &Template) -> Result<ResultSet, SolverError> {
        let symbols = alphabet(self.config.include_fractions);
        let arity = template.arity();
        let total =
            candidate_count(arity, symbols.len()).ok_or(SolverError::SearchSpaceTooLarge {
                arity,
                alphabet_size: symbols.len(),
            })?;

        info!(
            "Searching '{}': {} wildcards, {} candidates, fractions {}",
            template,
            arity,
            total,
            if self.config.include_fractions {
                "enabled"
            } else {
                "disabled"
            }
        );

        let (solutions, status) = if self.config.parallel {
            self.search_parallel(template, total)
        } else {
            self.search_sequential(template)
        };

        match status {
            SearchStatus::Completed => info!("Search finished with {} solutions", solutions.len()),
            SearchStatus::Cancelled => warn!(
                "Search cancelled after finding {} solutions",
                solutions.len()
            ),
        }

        Ok(ResultSet::new(arity, solutions, status))
    }

    fn search_sequential(&self, template: &Template) -> (Vec<Solution>, SearchStatus) {
        let mut solutions = Vec::new();

        for candidate in generate(template, self.config.include_fractions) {
            if self.config.is_cancelled() {
                return (solutions, SearchStatus::Cancelled);
            }
            if is_valid(&candidate.text) {
                debug!("Found solution: {}", candidate.text);
                solutions.push(Solution::from(candidate));
            }
        }

        (solutions, SearchStatus::Completed)
    }

    // Indexed range keeps generation order through the parallel collect.
    fn search_parallel(&self, template: &Template, total: usize) -> (Vec<Solution>, SearchStatus) {
        let symbols = alphabet(self.config.include_fractions);

        let solutions: Vec<Solution> = (0..total)
            .into_par_iter()
            .filter_map(|index| {
                if self.config.is_cancelled() {
                    return None;
                }
                let candidate = template.candidate_at(symbols, index)?;
                if is_valid(&candidate.text) {
                    debug!("Found solution: {}", candidate.text);
                    Some(Solution::from(candidate))
                } else {
                    None
                }
            })
            .collect();

        let status = if self.config.is_cancelled() {
            SearchStatus::Cancelled
        } else {
            SearchStatus::Completed
        };
        (solutions, status)
    }
}
