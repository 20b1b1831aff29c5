pub mod toml_config;

use crate::core::{ConfigProvider, EligibleRange, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_bounds, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::utils::validation::validate_path;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// Resolved settings for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSettings {
    pub range: EligibleRange,
    pub format: OutputFormat,
}

impl ConfigProvider for CheckSettings {
    fn eligible_range(&self) -> EligibleRange {
        self.range
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for CheckSettings {
    fn validate(&self) -> Result<()> {
        validate_bounds("eligibility", self.range.min, self.range.max)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "age-gate")]
#[command(about = "Checks a roster of names against an age registry")]
pub struct CliConfig {
    #[arg(long, help = "Optional TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Lowest eligible age (inclusive)")]
    pub min_age: Option<u32>,

    #[arg(long, help = "Highest eligible age (inclusive)")]
    pub max_age: Option<u32>,

    #[arg(long, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags override the config file, which overrides the built-in defaults.
    pub fn resolve(&self) -> Result<CheckSettings> {
        let file = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                tracing::debug!("Loading config from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let base = file.eligible_range();
        let settings = CheckSettings {
            range: EligibleRange::new(
                self.min_age.unwrap_or(base.min),
                self.max_age.unwrap_or(base.max),
            ),
            format: self.format.unwrap_or_else(|| file.output_format()),
        };
        settings.validate()?;

        Ok(settings)
    }
}
