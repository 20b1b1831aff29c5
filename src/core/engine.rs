use crate::core::{EligibilityChecker, Outcome, Reporter, RunSummary, TestRoster};
use crate::utils::error::Result;

pub struct CheckEngine {
    checker: EligibilityChecker,
}

impl CheckEngine {
    pub fn new(checker: EligibilityChecker) -> Self {
        Self { checker }
    }

    pub fn run<R: Reporter>(&self, roster: &TestRoster, reporter: &mut R) -> Result<RunSummary> {
        tracing::info!(
            "Checking {} names against {} registry entries, eligible range {}",
            roster.len(),
            self.checker.registry().len(),
            self.checker.range()
        );

        let mut summary = RunSummary::default();
        for name in roster.iter() {
            let verdict = self.checker.verdict(name);
            match verdict.outcome {
                Outcome::Passed { age } => tracing::debug!(name, age, "passed"),
                Outcome::Ineligible { age } => tracing::debug!(name, age, "age out of range"),
                Outcome::NotFound => tracing::debug!(name, "not in registry"),
            }
            reporter.report(&verdict)?;
            summary.record(&verdict.outcome);
        }
        reporter.finish()?;

        tracing::info!(
            "Checked {} names: {} passed, {} ineligible, {} not found",
            summary.total,
            summary.passed,
            summary.ineligible,
            summary.not_found
        );

        Ok(summary)
    }
}
