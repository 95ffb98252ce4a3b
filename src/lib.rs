//! Strong password step counting library
//!
//! This library computes the minimum number of single-character edits
//! (insert, delete, replace) needed to make a password strong: between 6 and
//! 20 characters, with at least one lowercase letter, one uppercase letter and
//! one digit, and no run of three identical characters in a row.
//!
//! # Features
//!
//! - `async` (default): Enables async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_steps::{evaluate_password, strong_password_steps};
//! use secrecy::SecretString;
//!
//! assert_eq!(strong_password_steps("aaa111"), 2);
//!
//! // Detailed evaluation
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password(&password);
//!
//! let check = evaluation.expect("not cancelled");
//! println!("Steps: {}", check.steps);
//! println!("Reasons: {:?}", check.reasons);
//! ```

// Internal modules
mod error;
mod evaluator;
mod policy;
mod sections;
mod types;


// Public API
pub use error::CheckError;
pub use evaluator::{evaluate_password, strong_password_steps, try_strong_password_steps};
pub use policy::{is_strong, CharClass, MAX_LENGTH, MAX_REPEAT, MIN_LENGTH, REQUIRED_CLASSES};
pub use types::PasswordCheck;

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
