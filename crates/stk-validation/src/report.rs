//! Validation reports and scoring

use crate::finding::{AutoFix, Finding, FindingCategory, FindingStatus};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

const ERROR_PENALTY: usize = 20;
const WARNING_PENALTY: usize = 5;

/// Single-number summary of a validation run, in `[0, 100]`
///
/// `max(0, 100 - 20 * errors - 5 * warnings)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationScore(u8);

impl ValidationScore {
    /// Perfect score
    pub const MAX: Self = Self(100);

    /// Score from problem counts
    #[must_use]
    pub fn from_counts(errors: usize, warnings: usize) -> Self {
        let penalty = errors
            .saturating_mul(ERROR_PENALTY)
            .saturating_add(warnings.saturating_mul(WARNING_PENALTY));
        let score = 100usize.saturating_sub(penalty);
        // score <= 100 here
        Self(u8::try_from(score).unwrap_or(0))
    }

    /// Numeric value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for ValidationScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

/// Findings and score of one validation run
///
/// Reports are recomputed on every run and never stored with a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every check outcome, in check order
    pub findings: Vec<Finding>,

    /// Derived from error and warning counts
    pub score: ValidationScore,
}

impl ValidationReport {
    /// Build report and derive the score
    #[must_use]
    pub fn new(findings: Vec<Finding>) -> Self {
        let errors = count(&findings, FindingStatus::Error);
        let warnings = count(&findings, FindingStatus::Warning);
        Self {
            findings,
            score: ValidationScore::from_counts(errors, warnings),
        }
    }

    /// Number of error findings
    #[inline]
    #[must_use]
    pub fn error_count(&self) -> usize {
        count(&self.findings, FindingStatus::Error)
    }

    /// Number of warning findings
    #[inline]
    #[must_use]
    pub fn warning_count(&self) -> usize {
        count(&self.findings, FindingStatus::Warning)
    }

    /// Number of success findings
    #[inline]
    #[must_use]
    pub fn success_count(&self) -> usize {
        count(&self.findings, FindingStatus::Success)
    }

    /// Findings with the given status
    pub fn with_status(&self, status: FindingStatus) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.status == status)
    }

    /// Findings in the given category
    pub fn in_category(&self, category: FindingCategory) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.category == category)
    }

    /// Fixes attached to findings, in finding order
    pub fn fixes(&self) -> impl Iterator<Item = &AutoFix> {
        self.findings.iter().filter_map(|f| f.fix.as_ref())
    }

    /// Whether any finding prevents a save
    #[inline]
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.findings.iter().any(|f| f.blocking)
    }

    /// No warnings and no errors
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.findings.iter().any(Finding::is_problem)
    }
}

fn count(findings: &[Finding], status: FindingStatus) -> usize {
    findings.iter().filter(|f| f.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_formula() {
        assert_eq!(ValidationScore::from_counts(0, 0).value(), 100);
        assert_eq!(ValidationScore::from_counts(1, 0).value(), 80);
        assert_eq!(ValidationScore::from_counts(0, 3).value(), 85);
        assert_eq!(ValidationScore::from_counts(2, 2).value(), 50);
    }

    #[test]
    fn score_clamps_at_zero() {
        assert_eq!(ValidationScore::from_counts(5, 1).value(), 0);
        assert_eq!(ValidationScore::from_counts(usize::MAX, usize::MAX).value(), 0);
    }

    #[test]
    fn report_counts_and_blocking() {
        let report = ValidationReport::new(vec![
            Finding::success(FindingCategory::Naming, "ok"),
            Finding::warning(FindingCategory::Security, "no classification"),
            Finding::error(FindingCategory::Naming, "name required").blocking(),
        ]);

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.score.value(), 75);
        assert!(report.is_blocked());
        assert!(!report.is_clean());
        assert_eq!(report.in_category(FindingCategory::Naming).count(), 2);
    }

    #[test]
    fn success_only_report_is_clean() {
        let report = ValidationReport::new(vec![Finding::success(FindingCategory::Performance, "ok")]);
        assert!(report.is_clean());
        assert_eq!(report.score, ValidationScore::MAX);
        assert_eq!(report.score.to_string(), "100/100");
    }
}
