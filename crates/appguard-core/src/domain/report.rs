//! Rule reports and the aggregated validation outcome.
//!
//! Reports stay structured (rule kind + violation records) until
//! [`ValidationReport::into_outcome`] renders them into the message blocks
//! an admission response carries.

use serde::Serialize;

use crate::domain::value_objects::RuleKind;
use crate::domain::violation::Violation;

/// The result of running one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    pub kind: RuleKind,
    pub violations: Vec<Violation>,
}

impl RuleReport {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            violations: Vec::new(),
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// The rule's messages joined by newlines, or `None` when clean.
    pub fn render(&self) -> Option<String> {
        if self.is_clean() {
            return None;
        }
        Some(
            self.violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

/// All rule reports for one document, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    reports: Vec<RuleReport>,
}

impl ValidationReport {
    pub fn new(reports: Vec<RuleReport>) -> Self {
        Self { reports }
    }

    pub fn reports(&self) -> &[RuleReport] {
        &self.reports
    }

    pub fn is_clean(&self) -> bool {
        self.reports.iter().all(RuleReport::is_clean)
    }

    /// Every violation across all rules, in evaluation order.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.reports.iter().flat_map(|r| r.violations.iter())
    }

    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.violations.len()).sum()
    }

    /// One rendered block per rule that found something.
    pub fn blocks(&self) -> Vec<String> {
        self.reports.iter().filter_map(RuleReport::render).collect()
    }

    pub fn into_outcome(self) -> ValidationOutcome {
        let blocks = self.blocks();
        if blocks.is_empty() {
            ValidationOutcome::Accepted
        } else {
            ValidationOutcome::Rejected { reasons: blocks }
        }
    }
}

/// Final accept/reject decision for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    /// One entry per violated rule group, each already newline-joined.
    Rejected { reasons: Vec<String> },
}

impl ValidationOutcome {
    /// Rejection carrying a single reason, used when the payload cannot be
    /// decoded.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reasons: vec![reason.into()],
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The admission status message: a leading newline, then every reason
    /// joined by newlines. `None` when accepted.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Accepted => None,
            Self::Rejected { reasons } => Some(format!("\n{}", reasons.join("\n"))),
        }
    }
}
