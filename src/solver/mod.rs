mod cancel;
mod config;
mod core;
mod errors;
mod result;

pub use self::core::EquationSolver;
pub use cancel::CancelFlag;
pub use config::SolverConfig;
pub use errors::SolverError;
pub use result::{Dimensionality, ResultSet, SearchStatus, Solution};
