use crate::solver::cancel::CancelFlag;

/// Configuration for a search
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Add the `0.010`..`0.990` fractions to the alphabet
    pub include_fractions: bool,
    /// Evaluate candidates on the rayon thread pool
    pub parallel: bool,
    /// Checked between candidates; raising it stops the search early
    pub cancel: Option<CancelFlag>,
}

impl SolverConfig {
    pub fn with_fractions(mut self, include_fractions: bool) -> Self {
        self.include_fractions = include_fractions;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}
