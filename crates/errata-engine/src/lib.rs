//! Decision engine for errata.
//!
//! A [`Classifier`] evaluates a taxonomy's ordered [`RuleSet`] against the
//! [`Evidence`] gathered for one problem and returns the first matching label.
//!
//! # Log Levels
//!
//! - **INFO**: batch start and end
//! - **DEBUG**: one event per classification with the rule that fired
//! - **TRACE**: similarity scores behind the robot checks

pub mod batch;
pub mod classifier;
pub mod evidence;
pub mod rule;
pub mod taxonomy;

#[cfg(test)]
mod batch_tests;

pub use batch::{
    classify_record, parse_records, BatchLine, BatchOutcome, BatchRecord, BatchReport, BatchRunner,
    BatchSummary,
};
pub use classifier::Classifier;
pub use evidence::Evidence;
pub use rule::{Predicate, Rule, RuleSet};
pub use taxonomy::rule_set;
