//! Security classification reference table

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Write-access classification of a template attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SecurityClassification {
    /// Anyone may write
    FreeAccess,
    /// Operators may write during normal operation
    Operate,
    /// Write requires re-authentication of the current user
    SecuredWrite,
    /// Write requires a second, verifying user
    VerifiedWrite,
    /// Engineers may adjust tuning parameters
    Tune,
    /// Configuration changes only
    Configure,
    /// Never writable at runtime
    ViewOnly,
}

impl SecurityClassification {
    /// Whether writes need a signature step
    #[inline]
    #[must_use]
    pub const fn requires_signature(self) -> bool {
        matches!(self, Self::SecuredWrite | Self::VerifiedWrite)
    }
}

impl Display for SecurityClassification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FreeAccess => "FreeAccess",
            Self::Operate => "Operate",
            Self::SecuredWrite => "SecuredWrite",
            Self::VerifiedWrite => "VerifiedWrite",
            Self::Tune => "Tune",
            Self::Configure => "Configure",
            Self::ViewOnly => "ViewOnly",
        };
        f.write_str(s)
    }
}

/// Reference row for one classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityLevel {
    /// The classification described
    pub classification: SecurityClassification,
    /// Who may write
    pub description: &'static str,
    /// Example attributes
    pub typical_use: &'static str,
}

static SECURITY_LEVELS: [SecurityLevel; 7] = [
    SecurityLevel {
        classification: SecurityClassification::FreeAccess,
        description: "No permission required to write",
        typical_use: "Display preferences, trend pens",
    },
    SecurityLevel {
        classification: SecurityClassification::Operate,
        description: "Operator permission required",
        typical_use: "Start/stop commands, setpoints",
    },
    SecurityLevel {
        classification: SecurityClassification::SecuredWrite,
        description: "User must re-enter credentials for each write",
        typical_use: "Batch parameters, recipe downloads",
    },
    SecurityLevel {
        classification: SecurityClassification::VerifiedWrite,
        description: "A second user must verify each write",
        typical_use: "Safety interlock bypass, regulated setpoints",
    },
    SecurityLevel {
        classification: SecurityClassification::Tune,
        description: "Engineering permission required",
        typical_use: "PID gains, alarm limits",
    },
    SecurityLevel {
        classification: SecurityClassification::Configure,
        description: "Writable only while the object is off scan",
        typical_use: "I/O addressing, scaling ranges",
    },
    SecurityLevel {
        classification: SecurityClassification::ViewOnly,
        description: "Read-only at runtime",
        typical_use: "Calculated values, diagnostics",
    },
];

/// The seven security classifications, least to most restrictive
#[inline]
#[must_use]
pub fn security_levels() -> &'static [SecurityLevel] {
    &SECURITY_LEVELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_levels_in_order() {
        let levels = security_levels();
        assert_eq!(levels.len(), 7);
        assert_eq!(levels[0].classification, SecurityClassification::FreeAccess);
        assert_eq!(levels[6].classification, SecurityClassification::ViewOnly);
    }

    #[test]
    fn only_secured_and_verified_require_signature() {
        let signed: Vec<_> = security_levels()
            .iter()
            .filter(|l| l.classification.requires_signature())
            .map(|l| l.classification.to_string())
            .collect();
        assert_eq!(signed, vec!["SecuredWrite", "VerifiedWrite"]);
    }
}
