//! Pre-built templates
//!
//! Ready-made starting points for common plant equipment. Each converts into
//! an editable [`TemplateDraft`].

use crate::entry::CatalogError;
use serde::Serialize;
use stk_model::{Attribute, TemplateDraft};

/// `(name, data type, description)`
type AttributeSpec = (&'static str, &'static str, &'static str);

/// A static template definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrebuiltTemplate {
    /// Lookup key (lowercase)
    pub key: &'static str,
    /// Template name (PascalCase)
    pub name: &'static str,
    /// Type category label
    pub category: &'static str,
    /// One-line summary
    pub description: &'static str,
    #[serde(skip)]
    attributes: &'static [AttributeSpec],
}

impl PrebuiltTemplate {
    /// Number of attributes
    #[inline]
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Editable copy of this template
    #[must_use]
    pub fn to_draft(&self) -> TemplateDraft {
        TemplateDraft {
            name: self.name.to_string(),
            category: self.category.to_string(),
            description: self.description.to_string(),
            attributes: self
                .attributes
                .iter()
                .map(|&(name, ty, desc)| Attribute::new(name, ty).with_description(desc))
                .collect(),
        }
    }
}

static PREBUILT: [PrebuiltTemplate; 5] = [
    PrebuiltTemplate {
        key: "pump",
        name: "CentrifugalPump",
        category: "analog",
        description: "Variable-speed centrifugal pump with flow and pressure monitoring",
        attributes: &[
            ("Flow", "AI_REAL", "Discharge flow rate"),
            ("FlowQuality", "AI_QUALITY", "Quality of the flow measurement"),
            ("DischargePressure", "AI_REAL", "Discharge header pressure"),
            ("SpeedSetpoint", "AO_REAL", "Drive speed setpoint in percent"),
            ("Running", "DI_BOOL", "Motor running feedback"),
            ("StartCommand", "DO_BOOL", "Start/stop command"),
            ("RunHours", "AI_LREAL", "Accumulated running hours"),
            ("SecurityClass", "SYS_SECURITY_CLASS", "Write classification for commands"),
        ],
    },
    PrebuiltTemplate {
        key: "valve",
        name: "OnOffValve",
        category: "digital",
        description: "Two-position valve with open and closed limit switches",
        attributes: &[
            ("OpenCommand", "DO_BOOL", "Open command output"),
            ("OpenLimit", "DI_BOOL", "Fully open limit switch"),
            ("ClosedLimit", "DI_BOOL", "Fully closed limit switch"),
            ("TravelAlarm", "DI_ALARM", "Valve failed to reach position in time"),
            ("TravelTime", "SYS_DURATION", "Maximum allowed travel time"),
            ("SecurityClass", "SYS_SECURITY_CLASS", "Write classification for commands"),
        ],
    },
    PrebuiltTemplate {
        key: "motor",
        name: "InductionMotor",
        category: "analog",
        description: "Fixed-speed motor with current and winding temperature",
        attributes: &[
            ("Current", "AI_REAL", "Phase current"),
            ("CurrentQuality", "AI_QUALITY", "Quality of the current measurement"),
            ("WindingTemperature", "AI_REAL", "Stator winding temperature"),
            ("Running", "DI_BOOL", "Contactor closed feedback"),
            ("Trip", "DI_ALARM", "Overload relay tripped"),
            ("Starts", "DI_COUNTER", "Number of starts"),
            ("SecurityClass", "SYS_SECURITY_CLASS", "Write classification for commands"),
        ],
    },
    PrebuiltTemplate {
        key: "tank",
        name: "StorageTank",
        category: "analog",
        description: "Atmospheric storage tank with level and high/low alarms",
        attributes: &[
            ("Level", "AI_REAL", "Liquid level in percent"),
            ("LevelQuality", "AI_QUALITY", "Quality of the level measurement"),
            ("Volume", "AI_LREAL", "Calculated liquid volume"),
            ("HighLevelAlarm", "DI_ALARM", "High level switch"),
            ("LowLevelAlarm", "DI_ALARM", "Low level switch"),
            ("Product", "STRING", "Stored product name"),
            ("SecurityClass", "SYS_SECURITY_CLASS", "Write classification for setpoints"),
        ],
    },
    PrebuiltTemplate {
        key: "pid",
        name: "PidLoop",
        category: "analog",
        description: "Single-loop PID controller",
        attributes: &[
            ("ProcessValue", "AI_REAL", "Measured process variable"),
            ("ProcessValueQuality", "AI_QUALITY", "Quality of the process variable"),
            ("Setpoint", "AO_REAL", "Controller setpoint"),
            ("Output", "AO_REAL", "Controller output in percent"),
            ("Gain", "AO_REAL", "Proportional gain"),
            ("IntegralTime", "SYS_DURATION", "Integral time constant"),
            ("AutoMode", "DI_BOOL", "Controller in automatic"),
            ("SecurityClass", "SYS_SECURITY_CLASS", "Write classification for tuning"),
        ],
    },
];

/// All pre-built templates
#[inline]
#[must_use]
pub fn prebuilt_templates() -> &'static [PrebuiltTemplate] {
    &PREBUILT
}

/// Lookup a pre-built template by key (case-insensitive)
///
/// # Errors
/// Returns [`CatalogError::UnknownTemplate`] if no template has that key
pub fn find_prebuilt(key: &str) -> Result<&'static PrebuiltTemplate, CatalogError> {
    let key = key.trim();
    PREBUILT
        .iter()
        .find(|t| t.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| CatalogError::UnknownTemplate(key.to_string()))
}
