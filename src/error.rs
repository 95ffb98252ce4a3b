//! Error types for password evaluation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The password was absent, as opposed to empty.
    #[error("Invalid argument: no password provided")]
    InvalidArgument,
    #[error("Evaluation cancelled")]
    Cancelled,
}
