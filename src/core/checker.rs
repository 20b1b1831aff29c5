use crate::core::{AgeRegistry, EligibleRange, Outcome, TestRoster, Verdict};

/// Classifies names against a registry and an inclusive age range.
#[derive(Debug, Clone)]
pub struct EligibilityChecker {
    registry: AgeRegistry,
    range: EligibleRange,
}

impl EligibilityChecker {
    pub fn new(registry: AgeRegistry, range: EligibleRange) -> Self {
        Self { registry, range }
    }

    pub fn range(&self) -> EligibleRange {
        self.range
    }

    pub fn registry(&self) -> &AgeRegistry {
        &self.registry
    }

    pub fn classify(&self, name: &str) -> Outcome {
        match self.registry.age_of(name) {
            None => Outcome::NotFound,
            Some(age) if self.range.contains(age) => Outcome::Passed { age },
            Some(age) => Outcome::Ineligible { age },
        }
    }

    pub fn verdict(&self, name: &str) -> Verdict {
        Verdict::new(name, self.classify(name))
    }

    /// One verdict per roster entry, in roster order.
    pub fn check(&self, roster: &TestRoster) -> Vec<Verdict> {
        roster.iter().map(|name| self.verdict(name)).collect()
    }
}
