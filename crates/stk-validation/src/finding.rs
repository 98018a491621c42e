//! Validation findings and mechanical fixes

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use stk_model::TemplateDraft;

/// Check family a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingCategory {
    /// Template and attribute naming
    Naming,
    /// Completeness and conventions
    BestPractices,
    /// Sensitive data and classifications
    Security,
    /// Size heuristics
    Performance,
}

impl FindingCategory {
    /// All categories in report order
    pub const ALL: [FindingCategory; 4] = [
        FindingCategory::Naming,
        FindingCategory::BestPractices,
        FindingCategory::Security,
        FindingCategory::Performance,
    ];

    /// Kebab-case identifier
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naming => "naming",
            Self::BestPractices => "best-practices",
            Self::Security => "security",
            Self::Performance => "performance",
        }
    }
}

impl Display for FindingCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    /// Check passed
    Success,
    /// Worth attention; costs score but never blocks
    Warning,
    /// Check failed
    Error,
}

impl Display for FindingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A mechanical correction attached to a finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AutoFix {
    /// Replace the template name
    RenameTemplate {
        /// New name
        to: String,
    },

    /// Fill an empty attribute description
    DescribeAttribute {
        /// Attribute position in the draft
        index: usize,
        /// Text to fill in
        description: String,
    },
}

impl AutoFix {
    /// Apply to `draft`; returns whether anything changed
    ///
    /// A fix computed against an older draft is skipped when its target no
    /// longer needs it.
    pub fn apply(&self, draft: &mut TemplateDraft) -> bool {
        match self {
            Self::RenameTemplate { to } => {
                if draft.name == *to {
                    return false;
                }
                draft.name.clone_from(to);
                true
            }
            Self::DescribeAttribute { index, description } => match draft.attributes.get_mut(*index) {
                Some(attr) if !attr.has_description() => {
                    attr.description.clone_from(description);
                    true
                }
                _ => false,
            },
        }
    }
}

impl Display for AutoFix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::RenameTemplate { to } => write!(f, "rename template to '{to}'"),
            Self::DescribeAttribute { index, description } => {
                write!(f, "describe attribute #{index} as '{description}'")
            }
        }
    }
}

/// One validator observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Check family
    pub category: FindingCategory,

    /// Outcome
    pub status: FindingStatus,

    /// Human-readable explanation
    pub message: String,

    /// Attribute the finding is about, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Mechanical fix, if one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<AutoFix>,

    /// Whether this finding prevents a save
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub blocking: bool,
}

impl Finding {
    /// Create finding with an explicit status
    #[inline]
    #[must_use]
    pub fn new(category: FindingCategory, status: FindingStatus, message: impl Into<String>) -> Self {
        Self {
            category,
            status,
            message: message.into(),
            subject: None,
            fix: None,
            blocking: false,
        }
    }

    /// Passing check
    #[inline]
    #[must_use]
    pub fn success(category: FindingCategory, message: impl Into<String>) -> Self {
        Self::new(category, FindingStatus::Success, message)
    }

    /// Non-blocking problem
    #[inline]
    #[must_use]
    pub fn warning(category: FindingCategory, message: impl Into<String>) -> Self {
        Self::new(category, FindingStatus::Warning, message)
    }

    /// Error-level problem
    #[inline]
    #[must_use]
    pub fn error(category: FindingCategory, message: impl Into<String>) -> Self {
        Self::new(category, FindingStatus::Error, message)
    }

    /// With subject attribute
    #[inline]
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// With mechanical fix
    #[inline]
    #[must_use]
    pub fn with_fix(mut self, fix: AutoFix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Mark as save-blocking
    #[inline]
    #[must_use]
    pub fn blocking(mut self) -> Self {
        self.blocking = true;
        self
    }

    /// Whether status is warning or error
    #[inline]
    #[must_use]
    pub fn is_problem(&self) -> bool {
        self.status != FindingStatus::Success
    }
}

impl Display for Finding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.category, self.message)
    }
}
