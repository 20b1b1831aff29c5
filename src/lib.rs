pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, CheckSettings};
pub use core::{
    AgeRegistry, CheckEngine, EligibilityChecker, EligibleRange, JsonReporter, Outcome,
    OutputFormat, Reporter, RunSummary, TestRoster, TextReporter, Verdict,
};
pub use utils::error::{AgeGateError, Result};
