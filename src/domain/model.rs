use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub type Age = u32;

/// Fixed name -> age lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeRegistry {
    ages: HashMap<String, Age>,
}

impl AgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn age_of(&self, name: &str) -> Option<Age> {
        self.ages.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Age)> for AgeRegistry {
    fn from_iter<I: IntoIterator<Item = (N, Age)>>(iter: I) -> Self {
        Self {
            ages: iter
                .into_iter()
                .map(|(name, age)| (name.into(), age))
                .collect(),
        }
    }
}

/// Ordered list of names to classify. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRoster {
    names: Vec<String>,
}

impl TestRoster {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<N: Into<String>> FromIterator<N> for TestRoster {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Inclusive age interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleRange {
    pub min: Age,
    pub max: Age,
}

impl EligibleRange {
    pub const DEFAULT_MIN: Age = 18;
    pub const DEFAULT_MAX: Age = 24;

    pub fn new(min: Age, max: Age) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: Age) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl Default for EligibleRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

impl fmt::Display for EligibleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Passed { age: Age },
    Ineligible { age: Age },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Verdict {
    pub fn new(name: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            name: name.into(),
            outcome,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Passed { age } => write!(f, "{} прошёл тест (возраст: {})", self.name, age),
            Outcome::Ineligible { age } => write!(
                f,
                "{} найден, но возраст не подходит (возраст: {})",
                self.name, age
            ),
            Outcome::NotFound => write!(f, "{} не найден в словаре ", self.name),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub ineligible: usize,
    pub not_found: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Passed { .. } => self.passed += 1,
            Outcome::Ineligible { .. } => self.ineligible += 1,
            Outcome::NotFound => self.not_found += 1,
        }
    }
}
