//! Per-classification view of a problem that rules query.
//!
//! Verbalizing both answers and scoring their similarity is the only costly
//! signal, so it is computed on first use and reused by later rules of the
//! same classification. An `Evidence` never outlives the call it was made
//! for, which keeps separate classifications independent.

use std::cell::OnceCell;

use errata_core::{Problem, Result, Verbalizer};
use errata_scoring::{detectors, robot_similarity, RobotSimilarity};
use tracing::trace;

/// Signals about one problem, evaluated lazily.
///
/// Every predicate is false for a problem without an answer: there is nothing
/// to verbalize and no number to compare.
pub struct Evidence<'a> {
    problem: &'a Problem,
    verbalizer: &'a dyn Verbalizer,
    similarity: OnceCell<RobotSimilarity>,
}

impl<'a> Evidence<'a> {
    pub fn new(problem: &'a Problem, verbalizer: &'a dyn Verbalizer) -> Self {
        Self {
            problem,
            verbalizer,
            similarity: OnceCell::new(),
        }
    }

    pub fn problem(&self) -> &Problem {
        self.problem
    }

    pub fn no_answer(&self) -> bool {
        self.problem.given_answer.is_no_answer()
    }

    pub fn is_correct(&self) -> bool {
        self.problem.is_correct()
    }

    /// Similarity of the given answer to the correct one, with alternate
    /// readings resolved. `None` when there is no answer.
    pub fn similarity(&self) -> Result<Option<RobotSimilarity>> {
        let Some(given) = self.problem.given_answer.value() else {
            return Ok(None);
        };
        if let Some(similarity) = self.similarity.get() {
            return Ok(Some(*similarity));
        }
        let similarity = robot_similarity(self.verbalizer, self.problem.correct_answer, given)?;
        trace!(
            event = "similarity",
            start = %similarity.start,
            end = %similarity.end,
            variation = similarity.variation.as_str(),
        );
        Ok(Some(*self.similarity.get_or_init(|| similarity)))
    }

    /// The answer matches a leading fragment of the correct one.
    pub fn robot_late(&self) -> Result<bool> {
        Ok(self.similarity()?.is_some_and(|s| s.start.is_full()))
    }

    /// The answer matches a trailing fragment of the correct one.
    pub fn robot_soon(&self) -> Result<bool> {
        Ok(self.similarity()?.is_some_and(|s| s.end.is_full()))
    }

    /// Either fragment check holds.
    pub fn robot(&self) -> Result<bool> {
        Ok(self.similarity()?.is_some_and(|s| s.is_robot()))
    }

    pub fn added_zeros(&self) -> bool {
        self.with_given(detectors::added_zeros)
    }

    pub fn missing_zeros(&self) -> bool {
        self.with_given(detectors::missing_zeros)
    }

    pub fn digits_transposed(&self) -> bool {
        self.with_given(detectors::digits_transposed)
    }

    pub fn one_digit_different(&self) -> bool {
        self.with_given(detectors::one_digit_different)
    }

    pub fn missing_addend(&self) -> Result<bool> {
        self.with_operands(detectors::missing_addend)
    }

    pub fn extra_addend(&self) -> Result<bool> {
        self.with_operands(detectors::extra_addend)
    }

    /// Any numeric slip pattern explains the answer.
    pub fn any_task_pattern(&self) -> Result<bool> {
        let Some(given) = self.problem.given_answer.value() else {
            return Ok(false);
        };
        let p = self.problem;
        detectors::any_task_pattern(p.multiplier, p.multiplicand, p.correct_answer, given)
    }

    fn with_given(&self, detector: fn(u64, u64) -> bool) -> bool {
        self.problem
            .given_answer
            .value()
            .is_some_and(|given| detector(self.problem.correct_answer, given))
    }

    fn with_operands(&self, detector: fn(u64, u64, u64) -> Result<bool>) -> Result<bool> {
        match self.problem.given_answer.value() {
            Some(given) => detector(self.problem.multiplier, self.problem.multiplicand, given),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errata_lang::DutchVerbalizer;
    use errata_test::problem;

    #[test]
    fn test_no_answer_makes_every_signal_false() {
        let p = problem(8, 300, 2400, -1);
        let evidence = Evidence::new(&p, &DutchVerbalizer);
        assert!(evidence.no_answer());
        assert_eq!(evidence.similarity().unwrap(), None);
        assert!(!evidence.robot().unwrap());
        assert!(!evidence.added_zeros());
        assert!(!evidence.digits_transposed());
        assert!(!evidence.missing_addend().unwrap());
        assert!(!evidence.any_task_pattern().unwrap());
    }

    #[test]
    fn test_similarity_is_memoized() {
        let p = problem(7, 600, 4200, 200);
        let evidence = Evidence::new(&p, &DutchVerbalizer);
        let first = evidence.similarity().unwrap();
        assert_eq!(evidence.similarity().unwrap(), first);
        assert!(evidence.robot_soon().unwrap());
        assert!(!evidence.robot_late().unwrap());
    }

    #[test]
    fn test_addend_errors_propagate() {
        let p = problem(8, 0, 0, 10);
        let evidence = Evidence::new(&p, &DutchVerbalizer);
        assert!(evidence.missing_addend().is_err());
        assert!(evidence.extra_addend().is_err());
    }
}
