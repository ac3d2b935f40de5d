//! Evidence scoring for errata.
//!
//! This crate turns a pair of answers into the signals the decision engine
//! weighs:
//! - Positional similarity of verbalizations (`similarity_start`, `similarity_end`)
//! - Alternate hundreds readings (`has_variation`, `variation_of`, `robot_similarity`)
//! - Numeric slip detectors (`detectors`)
//!
//! Every function here is pure. Nothing is cached between calls.

pub mod detectors;
pub mod similarity;
pub mod variation;

#[cfg(test)]
mod variation_tests;

pub use detectors::{
    added_zeros, any_task_pattern, digits_transposed, extra_addend, missing_addend, missing_zeros,
    one_digit_different,
};
pub use similarity::{similarity_end, similarity_start, Similarity};
pub use variation::{
    has_variation, robot_similarity, variation_of, RobotSimilarity, VariationSide, VARIATION_MAX,
    VARIATION_MIN,
};
