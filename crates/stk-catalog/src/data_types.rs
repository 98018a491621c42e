//! The built-in data type table
//!
//! Declaration order is the catalog's listing order.

use crate::entry::{CatalogEntry, TypeCategory};

const fn entry(
    name: &'static str,
    type_category: TypeCategory,
    human_category: &'static str,
    description: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        name,
        type_category,
        human_category,
        description,
    }
}

const ANALOG: &str = "Analog I/O";
const DIGITAL: &str = "Digital I/O";
const TEXT: &str = "Text";
const SYSTEM: &str = "System";

/// Number of built-in data types
pub const DATA_TYPE_COUNT: usize = 31;

/// Built-in data types
pub static DATA_TYPES: [CatalogEntry; DATA_TYPE_COUNT] = [
    // Analog
    entry("AI_REAL", TypeCategory::Analog, ANALOG, "Analog input, 32-bit floating point engineering value"),
    entry("AI_LREAL", TypeCategory::Analog, ANALOG, "Analog input, 64-bit floating point for high-precision totals"),
    entry("AI_INT", TypeCategory::Analog, ANALOG, "Analog input, 16-bit signed raw counts"),
    entry("AI_DINT", TypeCategory::Analog, ANALOG, "Analog input, 32-bit signed integer"),
    entry("AI_UINT", TypeCategory::Analog, ANALOG, "Analog input, 16-bit unsigned raw counts"),
    entry("AI_SCALED", TypeCategory::Analog, ANALOG, "Analog input with raw-to-engineering linear scaling"),
    entry("AI_QUALITY", TypeCategory::Analog, ANALOG, "Quality code attached to an analog measurement"),
    entry("AO_REAL", TypeCategory::Analog, ANALOG, "Analog output, 32-bit floating point setpoint"),
    entry("AO_INT", TypeCategory::Analog, ANALOG, "Analog output, 16-bit signed raw counts"),
    entry("AO_DINT", TypeCategory::Analog, ANALOG, "Analog output, 32-bit signed integer setpoint"),
    // Digital
    entry("DI_BOOL", TypeCategory::Digital, DIGITAL, "Discrete input, single on/off state"),
    entry("DO_BOOL", TypeCategory::Digital, DIGITAL, "Discrete output, single on/off command"),
    entry("DI_ALARM", TypeCategory::Digital, DIGITAL, "Discrete alarm contact with acknowledge state"),
    entry("DI_STATUS", TypeCategory::Digital, DIGITAL, "Multi-bit equipment status word"),
    entry("DO_PULSE", TypeCategory::Digital, DIGITAL, "Momentary pulsed output command"),
    entry("DI_COUNTER", TypeCategory::Digital, DIGITAL, "Pulse accumulator counting input transitions"),
    entry("DI_WORD", TypeCategory::Digital, DIGITAL, "Packed 16-bit word of discrete points"),
    entry("DI_QUALITY", TypeCategory::Digital, DIGITAL, "Quality code attached to a discrete point"),
    // Text
    entry("STRING", TypeCategory::String, TEXT, "Variable-length ASCII text"),
    entry("STRING_UNICODE", TypeCategory::String, TEXT, "Variable-length internationalized text"),
    entry("STRING_FIXED", TypeCategory::String, TEXT, "Fixed-length text buffer as stored by the controller"),
    entry("TEXT_MESSAGE", TypeCategory::String, TEXT, "Operator message or event text"),
    entry("ALARM_TEXT", TypeCategory::String, TEXT, "Configured alarm message text"),
    // System
    entry("SYS_TIMESTAMP", TypeCategory::System, SYSTEM, "UTC timestamp of the last value change"),
    entry("SYS_DATE", TypeCategory::System, SYSTEM, "Calendar date without time of day"),
    entry("SYS_TIME", TypeCategory::System, SYSTEM, "Time of day without date"),
    entry("SYS_DURATION", TypeCategory::System, SYSTEM, "Elapsed time interval"),
    entry("SYS_QUALITY", TypeCategory::System, SYSTEM, "OPC-style quality word for any value"),
    entry("SYS_HEARTBEAT", TypeCategory::System, SYSTEM, "Communication watchdog toggled by the data source"),
    entry("SYS_ALARM_STATE", TypeCategory::System, SYSTEM, "Aggregated alarm state of an object"),
    entry("SYS_SECURITY_CLASS", TypeCategory::System, SYSTEM, "Security classification governing writes to an object"),
];

/// Type name that marks a security classification attribute
pub const SECURITY_CLASS_TYPE: &str = "SYS_SECURITY_CLASS";
