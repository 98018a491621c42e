//! Workbench configuration
//!
//! Loaded from TOML; every section and field is optional.
//!
//! ```toml
//! [validator]
//! max_attributes = 80
//!
//! [exchange]
//! max_file_size = 2097152
//! default_format = "xml"
//! ```

use serde::{Deserialize, Serialize};
use stk_exchange::{ExportFormat, DEFAULT_MAX_FILE_SIZE};
use stk_validation::{ConfigError, ValidatorConfig};

/// Import/export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// Largest file `import` will read, in bytes
    pub max_file_size: u64,

    /// Format used when none is given
    pub default_format: ExportFormat,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            default_format: ExportFormat::Json,
        }
    }
}

/// Top-level workbench settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    /// `[validator]` table
    pub validator: ValidatorConfig,

    /// `[exchange]` table
    pub exchange: ExchangeConfig,
}

impl WorkbenchConfig {
    /// Parse from TOML and check values
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or a value is out of range
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.check()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `ConfigError::Invalid` naming the offending field
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validator.check()?;
        if self.exchange.max_file_size == 0 {
            return Err(ConfigError::Invalid(
                "exchange.max_file_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
