//! Named scenarios: one pattern checked by a sequence of steps.

use tql_pattern::Pattern;

use crate::assertion::Assertion;
use crate::error::{ScenarioError, ScenarioResult};

/// A pattern and the steps that verify it.
pub struct Scenario {
    name: String,
    pattern: Option<Pattern>,
    steps: Vec<(String, Assertion)>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: None,
            steps: Vec::new(),
        }
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Add a step whose assertion is built by `build`.
    pub fn step(mut self, name: &str, build: impl FnOnce(Assertion) -> Assertion) -> Self {
        self.steps.push((name.to_string(), build(Assertion::new())));
        self
    }

    /// Run every step in order, stopping at the first failure.
    pub fn run(&self) -> ScenarioResult<()> {
        crate::init_logging();
        let pattern = self
            .pattern
            .as_ref()
            .ok_or_else(|| ScenarioError::missing_pattern(&self.name))?;
        for (step, assertion) in &self.steps {
            assertion
                .check(pattern)
                .map_err(|message| ScenarioError::assertion_failed(&self.name, step, message))?;
        }
        Ok(())
    }
}
