use crate::core::{ConfigProvider, EligibleRange, OutputFormat};
use crate::utils::error::{AgeGateError, Result};
use crate::utils::validation::{validate_bounds, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub eligibility: Option<EligibilityConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AgeGateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AgeGateError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn min_age(&self) -> Option<u32> {
        self.eligibility.as_ref().and_then(|e| e.min_age)
    }

    pub fn max_age(&self) -> Option<u32> {
        self.eligibility.as_ref().and_then(|e| e.max_age)
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn validate_config(&self) -> Result<()> {
        let range = self.eligible_range();
        validate_bounds("eligibility", range.min, range.max)
    }
}

impl ConfigProvider for TomlConfig {
    fn eligible_range(&self) -> EligibleRange {
        EligibleRange::new(
            self.min_age().unwrap_or(EligibleRange::DEFAULT_MIN),
            self.max_age().unwrap_or(EligibleRange::DEFAULT_MAX),
        )
    }

    fn output_format(&self) -> OutputFormat {
        self.format().unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
