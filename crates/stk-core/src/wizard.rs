//! Template creation wizard
//!
//! A fixed linear flow: BasicInfo → Attributes → Review → Export.
//! Every move is checked against the allowed-transition table.

use crate::error::WizardError;
use crate::form::TemplateForm;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Wizard step
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    /// Name, category and description
    #[default]
    BasicInfo,
    /// Attribute rows
    Attributes,
    /// Validation results
    Review,
    /// Format choice and download
    Export,
}

impl WizardStep {
    /// Steps in order
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::Attributes,
        WizardStep::Review,
        WizardStep::Export,
    ];

    /// Zero-based position
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Following step
    #[must_use]
    pub fn following(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Preceding step
    #[must_use]
    pub fn preceding(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Human-readable title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::Attributes => "Attributes",
            Self::Review => "Review",
            Self::Export => "Export",
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BasicInfo => "basic-info",
            Self::Attributes => "attributes",
            Self::Review => "review",
            Self::Export => "export",
        })
    }
}

/// Steps reachable from `from` in one move
#[must_use]
pub fn allowed_transitions(from: WizardStep) -> Vec<WizardStep> {
    use WizardStep::*;
    match from {
        BasicInfo => vec![Attributes],
        Attributes => vec![BasicInfo, Review],
        Review => vec![Attributes, Export],
        Export => vec![Review],
    }
}

/// Check a single move against the table
///
/// # Errors
/// `WizardError::IllegalTransition` if `to` is not reachable from `from`
pub fn validate_transition(from: WizardStep, to: WizardStep) -> Result<(), WizardError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(WizardError::IllegalTransition { from, to })
    }
}

/// Wizard position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Wizard {
    step: WizardStep,
}

impl Wizard {
    /// Start at the first step
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step
    #[inline]
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Completion percentage of the current step (25, 50, 75, 100)
    #[must_use]
    pub fn progress(&self) -> u8 {
        let done = self.step.index() + 1;
        // at most 4 steps, fits in u8
        u8::try_from(done * 100 / WizardStep::ALL.len()).unwrap_or(100)
    }

    /// Why the current step cannot be left yet, if it cannot
    #[must_use]
    pub fn blocker(&self, form: &TemplateForm) -> Option<String> {
        match self.step {
            WizardStep::BasicInfo if form.name.trim().is_empty() => {
                Some("template name is required".to_string())
            }
            WizardStep::Attributes if form.collect().attributes.is_empty() => {
                Some("at least one attribute with a name and type is required".to_string())
            }
            _ => None,
        }
    }

    /// Whether `next` would succeed for this form
    #[must_use]
    pub fn can_advance(&self, form: &TemplateForm) -> bool {
        self.step.following().is_some() && self.blocker(form).is_none()
    }

    /// Move forward one step
    ///
    /// # Errors
    /// - `WizardError::NoTransition` at the last step
    /// - `WizardError::Incomplete` if the current step's fields are missing
    pub fn next(&mut self, form: &TemplateForm) -> Result<WizardStep, WizardError> {
        let to = self.step.following().ok_or(WizardError::NoTransition {
            from: self.step,
            direction: "after",
        })?;
        if let Some(reason) = self.blocker(form) {
            return Err(WizardError::Incomplete {
                step: self.step,
                reason,
            });
        }
        self.go(to)
    }

    /// Move back one step
    ///
    /// # Errors
    /// `WizardError::NoTransition` at the first step
    pub fn previous(&mut self) -> Result<WizardStep, WizardError> {
        let to = self.step.preceding().ok_or(WizardError::NoTransition {
            from: self.step,
            direction: "before",
        })?;
        self.go(to)
    }

    fn go(&mut self, to: WizardStep) -> Result<WizardStep, WizardError> {
        validate_transition(self.step, to)?;
        tracing::debug!(from = %self.step, %to, "wizard step");
        self.step = to;
        Ok(to)
    }
}
