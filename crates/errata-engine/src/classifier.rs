//! Classifier entry points.

use errata_core::{Classification, Problem, Result, Taxonomy, Verbalizer};
use errata_lang::DutchVerbalizer;
use tracing::debug;

use crate::evidence::Evidence;
use crate::taxonomy::rule_set;

/// Labels wrong answers to multiplication problems.
///
/// The classifier holds nothing but its verbalizer, so one instance can be
/// shared across threads and reused for any number of problems.
///
/// ```
/// use errata_core::{ErrorLabel, Taxonomy};
/// use errata_engine::Classifier;
///
/// let classifier: Classifier = Classifier::default();
/// let problem = errata_core::Problem::from_raw(9, 30, 270, 27).unwrap();
///
/// let result = classifier.classify(&problem, Taxonomy::Full).unwrap();
/// assert_eq!(result.label, ErrorLabel::TaskMissingZeros);
/// assert_eq!(
///     result.diagnostic,
///     Some("You almost got it. You are just missing some zeros.")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Classifier<V = DutchVerbalizer> {
    verbalizer: V,
}

impl Default for Classifier<DutchVerbalizer> {
    fn default() -> Self {
        Self::new(DutchVerbalizer)
    }
}

impl<V: Verbalizer> Classifier<V> {
    pub fn new(verbalizer: V) -> Self {
        Self { verbalizer }
    }

    pub fn verbalizer(&self) -> &V {
        &self.verbalizer
    }

    /// Classifies `problem` under `taxonomy`.
    ///
    /// # Errors
    ///
    /// Fails with [`errata_core::ErrataError::InvalidInput`] when a rule
    /// reaches arithmetic that is undefined for the problem, such as an
    /// addition check with a zero multiplicand, or when an answer is beyond
    /// the verbalizer's range.
    pub fn classify(&self, problem: &Problem, taxonomy: Taxonomy) -> Result<Classification> {
        let evidence = Evidence::new(problem, &self.verbalizer);
        let classification = rule_set(taxonomy).evaluate(&evidence)?;
        debug!(
            event = "classify",
            taxonomy = taxonomy.as_str(),
            label = classification.label.as_str(),
            rule = classification.rule,
        );
        Ok(classification)
    }

    pub fn classify_full(&self, problem: &Problem) -> Result<Classification> {
        self.classify(problem, Taxonomy::Full)
    }

    pub fn classify_robot2(&self, problem: &Problem) -> Result<Classification> {
        self.classify(problem, Taxonomy::Robot2)
    }

    pub fn classify_error3(&self, problem: &Problem) -> Result<Classification> {
        self.classify(problem, Taxonomy::Error3)
    }

    pub fn classify_error4(&self, problem: &Problem) -> Result<Classification> {
        self.classify(problem, Taxonomy::Error4)
    }

    pub fn classify_task5(&self, problem: &Problem) -> Result<Classification> {
        self.classify(problem, Taxonomy::Task5)
    }

    pub fn classify_task8(&self, problem: &Problem) -> Result<Classification> {
        self.classify(problem, Taxonomy::Task8)
    }
}
