use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::value::Value;
use crate::error::{Result, SurveyError};

/// Answers collected for one step, keyed by form-item identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StepResult {
    pub identifier: String,
    #[serde(default)]
    pub answers: IndexMap<String, Value>,
}

impl StepResult {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            answers: IndexMap::new(),
        }
    }

    pub fn with_answer(mut self, item: impl Into<String>, value: Value) -> Self {
        self.set_answer(item, value);
        self
    }

    pub fn set_answer(&mut self, item: impl Into<String>, value: Value) {
        self.answers.insert(item.into(), value);
    }

    pub fn answer(&self, item: &str) -> Option<&Value> {
        self.answers.get(item)
    }

    pub fn has_answer(&self, item: &str) -> bool {
        self.answer(item).is_some_and(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskResult {
    pub identifier: String,
    #[serde(default)]
    pub steps: Vec<StepResult>,
}

impl TaskResult {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            steps: Vec::new(),
        }
    }

    /// Replaces an existing result for the same step.
    pub fn push(&mut self, result: StepResult) {
        match self
            .steps
            .iter_mut()
            .find(|existing| existing.identifier == result.identifier)
        {
            Some(existing) => *existing = result,
            None => self.steps.push(result),
        }
    }

    pub fn step_result(&self, identifier: &str) -> Option<&StepResult> {
        self.steps.iter().find(|step| step.identifier == identifier)
    }

    /// Two results for the same step are rejected rather than shadowed.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let result: Self = serde_json::from_str(input)?;
        let mut seen = HashSet::new();
        for step in &result.steps {
            if !seen.insert(step.identifier.as_str()) {
                return Err(SurveyError::DuplicateStep(step.identifier.clone()));
            }
        }
        Ok(result)
    }
}
