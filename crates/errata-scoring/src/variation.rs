//! Alternate readings of round hundreds.
//!
//! Between 1100 and 9900 a multiple of a hundred that is not a multiple of a
//! thousand can be spoken two ways: 1200 is "duizendtweehonderd" but also
//! "twaalfhonderd". A transcription that matches either reading counts.

use errata_core::{ErrataError, Result, Verbalized, Verbalizer};

use crate::similarity::{similarity_end, similarity_start, Similarity};

/// Smallest number with an alternate hundreds reading.
pub const VARIATION_MIN: u64 = 1100;

/// Largest number with an alternate hundreds reading.
pub const VARIATION_MAX: u64 = 9900;

/// Returns true if `n` can also be read as a count of hundreds.
///
/// ```
/// use errata_scoring::has_variation;
///
/// assert!(has_variation(1200));
/// assert!(!has_variation(1000));
/// assert!(!has_variation(12_000));
/// ```
pub fn has_variation(n: u64) -> bool {
    (VARIATION_MIN..=VARIATION_MAX).contains(&n) && n % 100 == 0 && n % 1000 != 0
}

/// Returns the compact hundreds reading of `n` ("twaalfhonderd" for 1200).
///
/// # Errors
///
/// Returns [`ErrataError::NoVariation`] when `n` has no alternate reading.
pub fn variation_of<V: Verbalizer + ?Sized>(verbalizer: &V, n: u64) -> Result<Verbalized> {
    if !has_variation(n) {
        return Err(ErrataError::NoVariation(n));
    }
    verbalizer
        .verbalize(n / 100)?
        .fused_with(verbalizer.hundred_suffix())
}

/// Which answer's alternate reading was consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariationSide {
    /// Neither answer has an alternate reading.
    None,
    /// The correct answer was re-read as hundreds.
    Correct,
    /// The given answer was re-read as hundreds.
    Given,
}

impl VariationSide {
    pub fn as_str(self) -> &'static str {
        match self {
            VariationSide::None => "none",
            VariationSide::Correct => "correct",
            VariationSide::Given => "given",
        }
    }
}

/// Start and end similarity of a given answer against the correct one, after
/// alternate readings were taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotSimilarity {
    pub start: Similarity,
    pub end: Similarity,
    pub variation: VariationSide,
}

impl RobotSimilarity {
    /// The given answer is a truncated transcription of the correct one.
    pub fn is_robot(&self) -> bool {
        self.start.is_full() || self.end.is_full()
    }
}

/// Scores `given` against `correct` the way every robot check does.
///
/// Both answers are verbalized and compared from the front and from the back.
/// If the correct answer has an alternate reading, every score short of full
/// credit is recomputed against that reading. Otherwise, if the given answer
/// has one, the same is done with the given answer's reading as candidate.
/// Only one side is explored: when the correct answer has a variation, the
/// given answer's own variation is not tried.
///
/// ```
/// use errata_lang::DutchVerbalizer;
/// use errata_scoring::{robot_similarity, VariationSide};
///
/// // "twaalf" is no prefix of "duizendtweehonderd", but it is of "twaalfhonderd".
/// let sim = robot_similarity(&DutchVerbalizer, 1200, 12).unwrap();
/// assert!(sim.start.is_full());
/// assert_eq!(sim.variation, VariationSide::Correct);
/// ```
pub fn robot_similarity<V: Verbalizer + ?Sized>(
    verbalizer: &V,
    correct: u64,
    given: u64,
) -> Result<RobotSimilarity> {
    let correct_words = verbalizer.verbalize(correct)?;
    let given_words = verbalizer.verbalize(given)?;
    let mut start = similarity_start(&correct_words, &given_words);
    let mut end = similarity_end(&correct_words, &given_words);

    let variation = if has_variation(correct) {
        let alternate = variation_of(verbalizer, correct)?;
        if !start.is_full() {
            start = similarity_start(&alternate, &given_words);
        }
        if !end.is_full() {
            end = similarity_end(&alternate, &given_words);
        }
        VariationSide::Correct
    } else if has_variation(given) {
        let alternate = variation_of(verbalizer, given)?;
        if !start.is_full() {
            start = similarity_start(&correct_words, &alternate);
        }
        if !end.is_full() {
            end = similarity_end(&correct_words, &alternate);
        }
        VariationSide::Given
    } else {
        VariationSide::None
    };

    Ok(RobotSimilarity {
        start,
        end,
        variation,
    })
}
