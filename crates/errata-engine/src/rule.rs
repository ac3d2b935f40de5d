//! Ordered rule tables.

use std::fmt;

use errata_core::{Classification, ErrorLabel, Result};

use crate::evidence::Evidence;

/// Condition a rule tests against the evidence.
pub type Predicate = fn(&Evidence<'_>) -> Result<bool>;

/// One entry of a rule table: when `predicate` holds, the problem gets
/// `label` and, if present, `diagnostic`.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    label: ErrorLabel,
    diagnostic: Option<&'static str>,
    predicate: Predicate,
}

impl Rule {
    pub const fn new(name: &'static str, label: ErrorLabel, predicate: Predicate) -> Self {
        Self {
            name,
            label,
            diagnostic: None,
            predicate,
        }
    }

    pub const fn with_diagnostic(mut self, diagnostic: &'static str) -> Self {
        self.diagnostic = Some(diagnostic);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn label(&self) -> ErrorLabel {
        self.label
    }

    pub fn diagnostic(&self) -> Option<&'static str> {
        self.diagnostic
    }

    /// Tests this rule alone, regardless of its position in a table.
    pub fn matches(&self, evidence: &Evidence<'_>) -> Result<bool> {
        (self.predicate)(evidence)
    }

    fn classification(&self) -> Classification {
        Classification::new(self.label, self.diagnostic, self.name)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("diagnostic", &self.diagnostic)
            .finish_non_exhaustive()
    }
}

/// Rules evaluated in order; the first match wins.
#[derive(Debug)]
pub struct RuleSet {
    name: &'static str,
    rules: &'static [Rule],
    fallback: ErrorLabel,
}

impl RuleSet {
    pub const fn new(name: &'static str, rules: &'static [Rule], fallback: ErrorLabel) -> Self {
        Self {
            name,
            rules,
            fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Label given when no rule matches.
    pub fn fallback(&self) -> ErrorLabel {
        self.fallback
    }

    /// Returns the classification of the first matching rule, or the
    /// fallback. Later rules are not evaluated once one matched.
    pub fn evaluate(&self, evidence: &Evidence<'_>) -> Result<Classification> {
        for rule in self.rules {
            if rule.matches(evidence)? {
                return Ok(rule.classification());
            }
        }
        Ok(Classification::new(self.fallback, None, "fallback"))
    }
}
