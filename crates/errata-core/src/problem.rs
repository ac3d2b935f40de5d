//! The multiplication problem record handed to the classifier.
//!
//! A [`Problem`] holds the two operands, the product and whatever answer was
//! recorded. The recorded answer is either a number or the `-1` sentinel that
//! the recording side writes when no answer came in at all.

use std::fmt;
use std::str::FromStr;

use crate::error::{ErrataError, Result};

/// Raw value recorded when no answer was given.
pub const NO_ANSWER_SENTINEL: i64 = -1;

/// The answer recorded for a problem.
///
/// # Example
///
/// ```
/// use errata_core::GivenAnswer;
///
/// assert_eq!(GivenAnswer::from_raw(-1).unwrap(), GivenAnswer::NoAnswer);
/// assert_eq!(GivenAnswer::from_raw(27).unwrap(), GivenAnswer::Value(27));
/// assert!(GivenAnswer::from_raw(-2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GivenAnswer {
    /// Nothing was answered (recorded as `-1`).
    NoAnswer,
    /// A numeric answer.
    Value(u64),
}

impl GivenAnswer {
    /// Converts a raw recorded value, mapping the sentinel to [`GivenAnswer::NoAnswer`].
    pub fn from_raw(raw: i64) -> Result<Self> {
        match raw {
            NO_ANSWER_SENTINEL => Ok(GivenAnswer::NoAnswer),
            n if n >= 0 => Ok(GivenAnswer::Value(n as u64)),
            n => Err(ErrataError::invalid(format!(
                "given answer {n} is negative and not the no-answer sentinel"
            ))),
        }
    }

    /// Returns the raw recorded value (`-1` for no answer).
    ///
    /// # Errors
    ///
    /// Returns [`ErrataError::InvalidInput`] for answers above `i64::MAX`,
    /// which have no raw form.
    pub fn to_raw(self) -> Result<i64> {
        match self {
            GivenAnswer::NoAnswer => Ok(NO_ANSWER_SENTINEL),
            GivenAnswer::Value(n) => i64::try_from(n)
                .map_err(|_| ErrataError::invalid(format!("given answer {n} has no raw form"))),
        }
    }

    /// Returns the numeric answer, if any.
    pub fn value(self) -> Option<u64> {
        match self {
            GivenAnswer::NoAnswer => None,
            GivenAnswer::Value(n) => Some(n),
        }
    }

    pub fn is_no_answer(self) -> bool {
        matches!(self, GivenAnswer::NoAnswer)
    }
}

impl TryFrom<i64> for GivenAnswer {
    type Error = ErrataError;

    fn try_from(raw: i64) -> Result<Self> {
        GivenAnswer::from_raw(raw)
    }
}

impl TryFrom<GivenAnswer> for i64 {
    type Error = ErrataError;

    fn try_from(answer: GivenAnswer) -> Result<Self> {
        answer.to_raw()
    }
}

impl fmt::Display for GivenAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GivenAnswer::NoAnswer => write!(f, "no answer"),
            GivenAnswer::Value(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for GivenAnswer {
    type Err = ErrataError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ErrataError::Input(format!("given answer '{s}' is not an integer")))?;
        GivenAnswer::from_raw(raw)
    }
}

/// A multiplication problem together with the recorded answer.
///
/// Immutable once built; every classification reads it and nothing else.
///
/// # Example
///
/// ```
/// use errata_core::{GivenAnswer, Problem};
///
/// let problem = Problem::new(9, 30, 270, GivenAnswer::Value(27));
/// assert!(!problem.is_correct());
///
/// let problem = Problem::from_raw(9, 30, 270, -1).unwrap();
/// assert!(problem.given_answer.is_no_answer());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    pub multiplier: u64,
    pub multiplicand: u64,
    pub correct_answer: u64,
    pub given_answer: GivenAnswer,
}

impl Problem {
    /// Creates a problem from already validated values.
    pub fn new(
        multiplier: u64,
        multiplicand: u64,
        correct_answer: u64,
        given_answer: GivenAnswer,
    ) -> Self {
        Self {
            multiplier,
            multiplicand,
            correct_answer,
            given_answer,
        }
    }

    /// Creates a problem from raw signed values as they appear in recorded data.
    ///
    /// # Errors
    ///
    /// Returns [`ErrataError::InvalidInput`] if an operand or the correct
    /// answer is negative, or if the given answer is negative but not `-1`.
    pub fn from_raw(
        multiplier: i64,
        multiplicand: i64,
        correct_answer: i64,
        given_answer: i64,
    ) -> Result<Self> {
        Ok(Self {
            multiplier: non_negative("multiplier", multiplier)?,
            multiplicand: non_negative("multiplicand", multiplicand)?,
            correct_answer: non_negative("correct answer", correct_answer)?,
            given_answer: GivenAnswer::from_raw(given_answer)?,
        })
    }

    /// Returns true if the recorded answer is the correct one.
    pub fn is_correct(&self) -> bool {
        self.given_answer == GivenAnswer::Value(self.correct_answer)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} = {} (given: {})",
            self.multiplier, self.multiplicand, self.correct_answer, self.given_answer
        )
    }
}

fn non_negative(field: &str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| ErrataError::invalid(format!("{field} {value} is negative")))
}

// Answers are written as plain integers: `-1` for no answer, the unsigned
// value otherwise.
#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{GivenAnswer, NO_ANSWER_SENTINEL};

    impl Serialize for GivenAnswer {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match *self {
                GivenAnswer::NoAnswer => serializer.serialize_i64(NO_ANSWER_SENTINEL),
                GivenAnswer::Value(n) => serializer.serialize_u64(n),
            }
        }
    }

    impl<'de> Deserialize<'de> for GivenAnswer {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_i64(GivenAnswerVisitor)
        }
    }

    struct GivenAnswerVisitor;

    impl<'de> Visitor<'de> for GivenAnswerVisitor {
        type Value = GivenAnswer;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative integer, or -1 for no answer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<GivenAnswer, E> {
            GivenAnswer::from_raw(v).map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<GivenAnswer, E> {
            Ok(GivenAnswer::Value(v))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_sentinel() {
        let problem = Problem::from_raw(8, 300, 2400, -1).unwrap();
        assert_eq!(problem.given_answer, GivenAnswer::NoAnswer);
        assert!(!problem.is_correct());
    }

    #[test]
    fn test_from_raw_rejects_negative_operands() {
        assert!(matches!(
            Problem::from_raw(-8, 300, 2400, 2100),
            Err(ErrataError::InvalidInput(_))
        ));
        assert!(Problem::from_raw(8, 300, -2400, 2100).is_err());
        assert!(Problem::from_raw(8, 300, 2400, -7).is_err());
    }

    #[test]
    fn test_is_correct() {
        assert!(Problem::from_raw(6, 7, 42, 42).unwrap().is_correct());
        assert!(!Problem::from_raw(6, 7, 42, 24).unwrap().is_correct());
    }

    #[test]
    fn test_given_answer_parse() {
        assert_eq!(
            " 27 ".parse::<GivenAnswer>().unwrap(),
            GivenAnswer::Value(27)
        );
        assert_eq!("-1".parse::<GivenAnswer>().unwrap(), GivenAnswer::NoAnswer);
        assert!(matches!("twenty".parse::<GivenAnswer>(), Err(ErrataError::Input(_))));
    }

    #[test]
    fn test_raw_roundtrip_of_sentinel() {
        assert_eq!(GivenAnswer::NoAnswer.to_raw().unwrap(), -1);
        assert_eq!(i64::try_from(GivenAnswer::Value(300)).unwrap(), 300);
    }

    #[test]
    fn test_to_raw_rejects_answers_beyond_i64() {
        let huge = GivenAnswer::Value(u64::MAX);
        assert!(matches!(huge.to_raw(), Err(ErrataError::InvalidInput(_))));
        assert!(i64::try_from(huge).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_raw_given_answer() {
        let json = r#"{"multiplier":9,"multiplicand":30,"correct_answer":270,"given_answer":-1}"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.given_answer, GivenAnswer::NoAnswer);
        assert_eq!(serde_json::to_string(&problem).unwrap(), json);

        let bad = r#"{"multiplier":9,"multiplicand":30,"correct_answer":270,"given_answer":-5}"#;
        assert!(serde_json::from_str::<Problem>(bad).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_answers_beyond_i64() {
        let problem = Problem::new(1, 1, 1, GivenAnswer::Value(u64::MAX));
        let json = serde_json::to_string(&problem).unwrap();
        assert!(json.contains("\"given_answer\":18446744073709551615"));

        let back: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, problem);
    }
}
