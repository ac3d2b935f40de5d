//! Shared test fixtures for errata crates.
//!
//! This crate provides worked examples as plain data. It depends on
//! `errata-core` only, so every other crate can take it as a dev-dependency.
//!
//! - [`words`] - Dutch verbalizations of selected numbers
//! - [`patterns`] - problems with and without a numeric slip pattern
//! - [`labelled`] - problems with the expected label for every taxonomy
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! errata-test = { workspace = true }
//! ```
//!
//! ```
//! use errata_test::{labelled::LABELLED, problem};
//!
//! let p = problem(9, 30, 270, 27);
//! assert!(!p.is_correct());
//! assert!(!LABELLED.is_empty());
//! ```

pub mod labelled;
pub mod patterns;
pub mod words;

pub use labelled::{LabelledCase, LABELLED};
pub use patterns::{PatternCase, TASK_PATTERNS};
pub use words::DUTCH_WORDS;

use errata_core::Problem;

/// Builds a problem from raw recorded values, `-1` meaning no answer.
///
/// # Panics
///
/// Panics on values `Problem::from_raw` rejects; fixtures are always valid.
pub fn problem(multiplier: i64, multiplicand: i64, correct: i64, given: i64) -> Problem {
    Problem::from_raw(multiplier, multiplicand, correct, given)
        .unwrap_or_else(|e| panic!("invalid fixture problem: {e}"))
}
