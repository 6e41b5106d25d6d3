//! Wildsolve - A library for solving wildcard arithmetic equations
//!
//! Given a template such as `10 ? 1 ? 1 = 1`, every `?` is replaced by an
//! operator, a digit or (optionally) a fraction. Each substitution that makes
//! the equation true is returned with one axis coordinate per wildcard.

pub mod alphabet;
pub mod expression;
pub mod iterator;
pub mod solver;
pub mod template;

// Re-export the main public API
pub use alphabet::{AlphabetError, Symbol, ordinate};
pub use expression::{ExpressionError, is_valid};
pub use iterator::{Candidate, Combination, generate};
pub use solver::{
    CancelFlag, Dimensionality, EquationSolver, ResultSet, SearchStatus, Solution, SolverConfig,
    SolverError,
};
pub use template::{Template, TemplateError};

/// Find every substitution that makes `template` true
///
/// This is a convenience function that runs a sequential search with the
/// default configuration.
///
/// # Arguments
///
/// * `template` - An equation with `?` wildcards and exactly one `=`
/// * `include_fractions` - Whether `0.010`..`0.990` join the alphabet
///
/// # Returns
///
/// * `Ok(ResultSet)` - Solutions in generation order, possibly none
/// * `Err(SolverError)` - If the template is malformed
///
/// # Errors
///
/// This function will return an error if:
/// * The template is empty
/// * The template has no `=` or more than one
/// * The candidate space is too large to index
///
/// # Examples
///
/// ```
/// use wildsolve::solve;
///
/// match solve("1 + ? = 2", false) {
///     Ok(results) if results.is_empty() => println!("No valid solutions found."),
///     Ok(results) => {
///         for solution in &results {
///             println!("{} at {:?}", solution.text(), solution.coordinates());
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(template: &str, include_fractions: bool) -> Result<ResultSet, SolverError> {
    let solver = EquationSolver::new(SolverConfig::default().with_fractions(include_fractions));
    solver.solve(template)
}
