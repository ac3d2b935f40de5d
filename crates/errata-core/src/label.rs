//! Error labels, label taxonomies and the classification result.

use std::fmt;
use std::str::FromStr;

use crate::error::{ErrataError, Result};

/// Every label any taxonomy can produce.
///
/// Labels render as stable snake_case names, which is also their serde form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorLabel {
    // Full taxonomy
    NoError,
    ChildNoAnswer,
    RobotLate,
    RobotSoon,
    RobotCorrection,
    TaskExtraZeros,
    TaskMissingZeros,
    NumberTwist,
    OtherError,

    // Two-class
    Robot,
    ChildTask,

    // Three- and four-class
    Child,
    Task,
    NoClassification,

    // Five- and eight-class
    ChildCompetence,
    Zero,
    Addition,
    AddedZero,
    MissingZero,
    MissingAddition,
    AddedAddition,
    OneDigit,
    NoClass,
}

impl ErrorLabel {
    /// All labels, in declaration order.
    pub const ALL: [ErrorLabel; 23] = [
        ErrorLabel::NoError,
        ErrorLabel::ChildNoAnswer,
        ErrorLabel::RobotLate,
        ErrorLabel::RobotSoon,
        ErrorLabel::RobotCorrection,
        ErrorLabel::TaskExtraZeros,
        ErrorLabel::TaskMissingZeros,
        ErrorLabel::NumberTwist,
        ErrorLabel::OtherError,
        ErrorLabel::Robot,
        ErrorLabel::ChildTask,
        ErrorLabel::Child,
        ErrorLabel::Task,
        ErrorLabel::NoClassification,
        ErrorLabel::ChildCompetence,
        ErrorLabel::Zero,
        ErrorLabel::Addition,
        ErrorLabel::AddedZero,
        ErrorLabel::MissingZero,
        ErrorLabel::MissingAddition,
        ErrorLabel::AddedAddition,
        ErrorLabel::OneDigit,
        ErrorLabel::NoClass,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorLabel::NoError => "no_error",
            ErrorLabel::ChildNoAnswer => "child_no_answer",
            ErrorLabel::RobotLate => "robot_late",
            ErrorLabel::RobotSoon => "robot_soon",
            ErrorLabel::RobotCorrection => "robot_correction",
            ErrorLabel::TaskExtraZeros => "task_extra_zeros",
            ErrorLabel::TaskMissingZeros => "task_missing_zeros",
            ErrorLabel::NumberTwist => "number_twist",
            ErrorLabel::OtherError => "other_error",
            ErrorLabel::Robot => "robot",
            ErrorLabel::ChildTask => "child_task",
            ErrorLabel::Child => "child",
            ErrorLabel::Task => "task",
            ErrorLabel::NoClassification => "no_classification",
            ErrorLabel::ChildCompetence => "child_competence",
            ErrorLabel::Zero => "zero",
            ErrorLabel::Addition => "addition",
            ErrorLabel::AddedZero => "added_zero",
            ErrorLabel::MissingZero => "missing_zero",
            ErrorLabel::MissingAddition => "missing_addition",
            ErrorLabel::AddedAddition => "added_addition",
            ErrorLabel::OneDigit => "one_digit",
            ErrorLabel::NoClass => "no_class",
        }
    }

    /// Returns true for the catch-all labels a taxonomy falls back to.
    pub fn is_unclassified(self) -> bool {
        matches!(
            self,
            ErrorLabel::OtherError | ErrorLabel::NoClass | ErrorLabel::NoClassification
        )
    }
}

impl fmt::Display for ErrorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorLabel {
    type Err = ErrataError;

    fn from_str(s: &str) -> Result<Self> {
        ErrorLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ErrataError::Input(format!("unknown label '{s}'")))
    }
}

/// The label sets the classifier can sort errors into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Taxonomy {
    /// Fine-grained robot and task labels with child-facing messages.
    #[default]
    Full,
    /// `robot` / `child_task`.
    #[cfg_attr(feature = "serde", serde(alias = "2"))]
    Robot2,
    /// `child` / `robot` / `task`.
    #[cfg_attr(feature = "serde", serde(alias = "3"))]
    Error3,
    /// `child` / `robot` / `task` / `no_classification`.
    #[cfg_attr(feature = "serde", serde(alias = "4"))]
    Error4,
    /// Task errors with merged zero and addition classes.
    #[cfg_attr(feature = "serde", serde(alias = "5"))]
    Task5,
    /// Task errors, one class per detector.
    #[cfg_attr(feature = "serde", serde(alias = "8"))]
    Task8,
}

impl Taxonomy {
    pub const ALL: [Taxonomy; 6] = [
        Taxonomy::Full,
        Taxonomy::Robot2,
        Taxonomy::Error3,
        Taxonomy::Error4,
        Taxonomy::Task5,
        Taxonomy::Task8,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Taxonomy::Full => "full",
            Taxonomy::Robot2 => "robot2",
            Taxonomy::Error3 => "error3",
            Taxonomy::Error4 => "error4",
            Taxonomy::Task5 => "task5",
            Taxonomy::Task8 => "task8",
        }
    }

    /// Returns true if records flagged as already evaluated correct are skipped.
    pub fn honours_evaluation_flag(self) -> bool {
        matches!(self, Taxonomy::Error3 | Taxonomy::Error4)
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Taxonomy {
    type Err = ErrataError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Taxonomy::Full),
            "2" | "robot2" => Ok(Taxonomy::Robot2),
            "3" | "error3" => Ok(Taxonomy::Error3),
            "4" | "error4" => Ok(Taxonomy::Error4),
            "5" | "task5" => Ok(Taxonomy::Task5),
            "8" | "task8" => Ok(Taxonomy::Task8),
            other => Err(ErrataError::Input(format!("unknown taxonomy '{other}'"))),
        }
    }
}

/// Outcome of one classification.
///
/// The diagnostic is the message meant for the person who answered; it is
/// kept apart from the label so that printing stays with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub label: ErrorLabel,
    pub diagnostic: Option<&'static str>,
    /// Name of the rule that produced the label.
    pub rule: &'static str,
}

impl Classification {
    pub fn new(label: ErrorLabel, diagnostic: Option<&'static str>, rule: &'static str) -> Self {
        Self {
            label,
            diagnostic,
            rule,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diagnostic {
            Some(message) => write!(f, "{} ({})", self.label, message),
            None => write!(f, "{}", self.label),
        }
    }
}
