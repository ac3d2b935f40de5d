//! errata - multiplication answer error classifier
//!
//! Labels a wrong answer by its most likely cause: a misheard answer, a
//! numeric slip, or a child who did not answer at all.
//!
//! # Example
//!
//! ```rust
//! use errata::prelude::*;
//!
//! let classifier: Classifier = Classifier::default();
//! let problem = Problem::from_raw(7, 600, 4200, 200).unwrap();
//!
//! let result = classifier.classify(&problem, Taxonomy::Full).unwrap();
//! assert_eq!(result.label, ErrorLabel::RobotSoon);
//! ```

// Problem and outcome types
pub use errata_core::{
    Classification, ErrataError, ErrorLabel, GivenAnswer, Problem, Result, Taxonomy, Verbalized,
    Verbalizer, NO_ANSWER_SENTINEL,
};

// Verbalizers
pub use errata_lang::{verbalizer_for, DutchVerbalizer};

// Evidence scoring
pub use errata_scoring::{detectors, similarity, variation, Similarity};

// Decision engine
pub use errata_engine::{
    classify_record, parse_records, rule_set, BatchLine, BatchOutcome, BatchRecord, BatchReport,
    BatchRunner, BatchSummary, Classifier, Evidence, Rule, RuleSet,
};

// Configuration
pub use errata_config::{
    BatchThreads, ClassifierConfig, ClassifierConfigOverride, ConfigError, DEFAULT_CONFIG_FILE,
};

#[cfg(feature = "console")]
pub use errata_console as console;

pub mod prelude {
    pub use super::{
        BatchRecord, BatchRunner, Classification, Classifier, ClassifierConfig, ErrorLabel, Problem,
        Taxonomy,
    };
}
