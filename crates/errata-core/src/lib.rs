//! errata Core - Core types and traits for answer error classification
//!
//! This crate provides the fundamental abstractions for errata:
//! - The `Problem` record and the recorded `GivenAnswer`
//! - Error labels, taxonomies and the `Classification` result
//! - The `Verbalizer` capability and the `Verbalized` word form
//! - The shared error type

pub mod error;
pub mod label;
pub mod problem;
pub mod verbalize;

pub use error::{ErrataError, Result};
pub use label::{Classification, ErrorLabel, Taxonomy};
pub use problem::{GivenAnswer, Problem, NO_ANSWER_SENTINEL};
pub use verbalize::{Verbalized, Verbalizer};
