use crate::domain::model::{EligibleRange, Verdict};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ConfigProvider {
    fn eligible_range(&self) -> EligibleRange;
    fn output_format(&self) -> OutputFormat;
}

/// Sink for verdicts, called once per roster entry in order.
pub trait Reporter {
    fn report(&mut self, verdict: &Verdict) -> Result<()>;

    /// Flushes anything buffered. Called once after the last verdict.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
