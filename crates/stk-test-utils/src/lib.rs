//! Testing utilities for STK workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use stk_model::{Attribute, TemplateDraft};

/// Attribute with a description
pub fn attribute(name: &str, data_type: &str, description: &str) -> Attribute {
    Attribute::new(name, data_type).with_description(description)
}

/// `PumpA` with a single undescribed `Flow` attribute
pub fn pump_a() -> TemplateDraft {
    TemplateDraft::new("PumpA").with_attribute(Attribute::new("Flow", "AI_REAL"))
}

/// A draft that passes every check
pub fn clean_pump() -> TemplateDraft {
    TemplateDraft::new("FeedPump")
        .with_category("analog")
        .with_description("Boiler feed pump")
        .with_attribute(attribute("Flow", "AI_REAL", "Discharge flow"))
        .with_attribute(attribute("FlowQuality", "AI_QUALITY", "Flow measurement quality"))
        .with_attribute(attribute("Running", "DI_BOOL", "Running feedback"))
        .with_attribute(attribute("SecurityClass", "SYS_SECURITY_CLASS", "Write classification"))
}

/// Draft named `name` with `count` described analog attributes
pub fn draft_with_attributes(name: &str, count: usize) -> TemplateDraft {
    let mut draft = TemplateDraft::new(name);
    for i in 0..count {
        draft
            .attributes
            .push(attribute(&format!("Value{i}"), "AI_REAL", "Generated value"));
    }
    draft
}

/// Text that survives every export format unchanged
pub fn plain_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _.,:;'&<>\"/-]{0,24}"
}

/// Attribute with a catalog type and text that every format carries
pub fn arb_attribute() -> impl Strategy<Value = Attribute> {
    (
        "[A-Za-z][A-Za-z0-9_]{0,15}",
        prop_oneof![
            Just("AI_REAL".to_string()),
            Just("DI_BOOL".to_string()),
            Just("STRING".to_string()),
            Just("SYS_QUALITY".to_string()),
            "[A-Z_]{1,10}",
        ],
        plain_text(),
    )
        .prop_map(|(name, ty, desc)| Attribute::new(name, ty).with_description(desc))
}

/// Well-formed drafts: every attribute has a name and a type
pub fn arb_draft() -> impl Strategy<Value = TemplateDraft> {
    (
        plain_text(),
        plain_text(),
        plain_text(),
        prop::collection::vec(arb_attribute(), 0..8),
    )
        .prop_map(|(name, category, description, attributes)| TemplateDraft {
            name,
            category,
            description,
            attributes,
        })
}
