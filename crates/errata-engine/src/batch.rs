//! Batch classification of tabular records.
//!
//! Records are classified independently, in parallel when configured, and
//! reported in input order. A record that fails validation is reported with
//! its error and does not stop the batch.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use errata_config::{BatchThreads, ClassifierConfig};
use errata_core::{Classification, ErrataError, ErrorLabel, Problem, Result, Taxonomy, Verbalizer};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::Classifier;

/// One row of a batch file.
///
/// Values stay raw until classification so that one malformed row is
/// reported on its own instead of rejecting the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub multiplier: i64,
    pub multiplicand: i64,
    pub correct_answer: i64,
    pub given_answer: i64,
    /// Set upstream when the answer was already judged correct.
    #[serde(default)]
    pub evaluation: bool,
}

impl BatchRecord {
    pub fn problem(&self) -> Result<Problem> {
        Problem::from_raw(
            self.multiplier,
            self.multiplicand,
            self.correct_answer,
            self.given_answer,
        )
    }
}

/// Classifies one record.
///
/// Returns `None` when the taxonomy honours the evaluation flag and the
/// record is already marked correct.
pub fn classify_record<V: Verbalizer>(
    classifier: &Classifier<V>,
    record: &BatchRecord,
    taxonomy: Taxonomy,
) -> Result<Option<Classification>> {
    if taxonomy.honours_evaluation_flag() && record.evaluation {
        return Ok(None);
    }
    let problem = record.problem()?;
    classifier.classify(&problem, taxonomy).map(Some)
}

/// Parses a JSON array of records, or JSON Lines when the input does not
/// start with `[`. Blank lines are ignored.
pub fn parse_records(input: &str) -> Result<Vec<BatchRecord>> {
    let trimmed = input.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|e| ErrataError::Input(format!("invalid record array: {e}")));
    }
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line)
                .map_err(|e| ErrataError::Input(format!("line {}: {e}", n + 1)))
        })
        .collect()
}

/// Result for one record, at its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub index: usize,
    pub evaluation: bool,
    pub result: Result<Option<Classification>>,
}

impl BatchOutcome {
    pub fn to_line(&self) -> BatchLine {
        let (label, diagnostic, error) = match &self.result {
            Ok(Some(c)) => (Some(c.label), c.diagnostic, None),
            Ok(None) => (None, None, None),
            Err(e) => (None, None, Some(e.to_string())),
        };
        BatchLine {
            index: self.index,
            label,
            diagnostic,
            evaluation: self.evaluation,
            error,
        }
    }
}

/// Serialized form of a [`BatchOutcome`], one per output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchLine {
    pub index: usize,
    pub label: Option<ErrorLabel>,
    pub diagnostic: Option<&'static str>,
    pub evaluation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Label counts over a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub labels: BTreeMap<ErrorLabel, usize>,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match &outcome.result {
                Ok(Some(c)) => *summary.labels.entry(c.label).or_default() += 1,
                Ok(None) => summary.skipped += 1,
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }

    pub fn classified(&self) -> usize {
        self.labels.values().sum()
    }

    pub fn total(&self) -> usize {
        self.classified() + self.skipped + self.failed
    }
}

/// Everything a batch run produced.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub taxonomy: Taxonomy,
    pub outcomes: Vec<BatchOutcome>,
    pub summary: BatchSummary,
    pub duration: Duration,
}

/// Runs a classifier over many records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRunner {
    taxonomy: Taxonomy,
    threads: BatchThreads,
}

impl BatchRunner {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            threads: BatchThreads::default(),
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.taxonomy).with_threads(config.batch_threads)
    }

    pub fn with_threads(mut self, threads: BatchThreads) -> Self {
        self.threads = threads;
        self
    }

    pub fn taxonomy(&self) -> Taxonomy {
        self.taxonomy
    }

    /// Classifies every record and returns the outcomes in input order.
    ///
    /// # Errors
    ///
    /// Only fails when a dedicated thread pool cannot be built. Per-record
    /// failures are carried in the outcomes.
    pub fn run<V: Verbalizer>(
        &self,
        classifier: &Classifier<V>,
        records: &[BatchRecord],
    ) -> Result<BatchReport> {
        let start = Instant::now();
        info!(
            event = "batch_start",
            record_count = records.len() as u64,
            taxonomy = self.taxonomy.as_str(),
        );

        let classify = |(index, record): (usize, &BatchRecord)| BatchOutcome {
            index,
            evaluation: record.evaluation,
            result: classify_record(classifier, record, self.taxonomy),
        };

        let outcomes: Vec<BatchOutcome> = match self.threads {
            BatchThreads::None => records.iter().enumerate().map(classify).collect(),
            BatchThreads::Auto => records.par_iter().enumerate().map(classify).collect(),
            BatchThreads::Count(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| ErrataError::Config(format!("batch thread pool: {e}")))?;
                pool.install(|| records.par_iter().enumerate().map(classify).collect())
            }
        };

        let summary = BatchSummary::from_outcomes(&outcomes);
        let duration = start.elapsed();
        info!(
            event = "batch_end",
            classified = summary.classified() as u64,
            skipped = summary.skipped as u64,
            failed = summary.failed as u64,
            duration_ms = duration.as_millis() as u64,
        );

        Ok(BatchReport {
            taxonomy: self.taxonomy,
            outcomes,
            summary,
            duration,
        })
    }
}
