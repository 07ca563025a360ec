//! Rule activation, file discovery and parallel linting

pub mod executor;
pub mod file_walker;
pub mod linter;

pub use executor::{ExecutionEngine, ExecutionResult, FileResult};
pub use linter::{ActivationError, Linter};
