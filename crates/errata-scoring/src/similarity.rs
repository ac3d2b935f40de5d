//! Positional similarity between two verbalizations.
//!
//! The score is the fraction of characters that agree before the first
//! mismatch, read from the front ([`similarity_start`]) or from the back
//! ([`similarity_end`]). Full credit is reserved for a candidate that is a
//! complete prefix (or suffix) of the reference and not longer than it: a
//! transcription that was cut short can be blamed on the recognizer, one
//! that says more than the truth cannot.

use std::cmp::Ordering;
use std::fmt;

use errata_core::Verbalized;

/// Exact fraction `matched / length` in `[0, 1]`.
///
/// Compared by value, so `0/11 == 0/14` and `3/6 == 1/2`.
#[derive(Debug, Clone, Copy)]
pub struct Similarity {
    matched: usize,
    length: usize,
}

impl Similarity {
    /// Complete agreement.
    pub const FULL: Similarity = Similarity {
        matched: 1,
        length: 1,
    };

    /// No agreement at all.
    pub const NONE: Similarity = Similarity {
        matched: 0,
        length: 1,
    };

    /// Creates a score, or `None` if the fraction is not within `[0, 1]`.
    pub fn new(matched: usize, length: usize) -> Option<Self> {
        (length > 0 && matched <= length).then_some(Self { matched, length })
    }

    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_full(&self) -> bool {
        self.matched == self.length
    }

    pub fn as_f64(&self) -> f64 {
        self.matched as f64 / self.length as f64
    }
}

impl PartialEq for Similarity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Similarity {}

impl PartialOrd for Similarity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Similarity {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.matched as u128 * other.length as u128;
        let rhs = other.matched as u128 * self.length as u128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.matched, self.length)
    }
}

/// Scores how far `candidate` agrees with the start of `reference`.
///
/// # Example
///
/// ```
/// use errata_core::Verbalized;
/// use errata_scoring::{similarity_start, Similarity};
///
/// let v320 = Verbalized::new("driehonderdtwintig").unwrap();
/// let v300 = Verbalized::new("driehonderd").unwrap();
///
/// assert_eq!(similarity_start(&v320, &v300), Similarity::FULL);
/// assert_eq!(similarity_start(&v300, &v320), Similarity::NONE);
/// ```
pub fn similarity_start(reference: &Verbalized, candidate: &Verbalized) -> Similarity {
    positional_score(
        reference.as_str().chars(),
        candidate.as_str().chars(),
        reference.char_len(),
        candidate.char_len(),
    )
}

/// Scores how far `candidate` agrees with the end of `reference`.
pub fn similarity_end(reference: &Verbalized, candidate: &Verbalized) -> Similarity {
    positional_score(
        reference.as_str().chars().rev(),
        candidate.as_str().chars().rev(),
        reference.char_len(),
        candidate.char_len(),
    )
}

fn positional_score<I>(
    reference: I,
    candidate: I,
    reference_len: usize,
    candidate_len: usize,
) -> Similarity
where
    I: Iterator<Item = char>,
{
    // Verbalized is never empty, so the shorter length is at least 1.
    let compared = reference_len.min(candidate_len);
    match reference.zip(candidate).position(|(r, c)| r != c) {
        Some(agreeing) => Similarity {
            matched: agreeing,
            length: compared,
        },
        None if candidate_len <= reference_len => Similarity::FULL,
        None => Similarity::NONE,
    }
}
