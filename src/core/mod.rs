pub mod checker;
pub mod engine;
pub mod report;

pub use crate::domain::model::{
    Age, AgeRegistry, EligibleRange, Outcome, RunSummary, TestRoster, Verdict,
};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Reporter};
pub use crate::utils::error::Result;
pub use checker::EligibilityChecker;
pub use engine::CheckEngine;
pub use report::{JsonReporter, TextReporter};
