use serde::{Deserialize, Serialize};

use crate::core::answer_format::AnswerFormat;
use crate::core::validators::{self, Validator, run_validators};
use crate::core::value::Value;

/// One input field within a form step, keyed by `identifier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormItem {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub format: AnswerFormat,
    #[serde(default)]
    pub optional: bool,
}

impl FormItem {
    pub fn new(identifier: impl Into<String>, label: impl Into<String>, format: AnswerFormat) -> Self {
        Self {
            identifier: identifier.into(),
            label: Some(label.into()),
            placeholder: None,
            format,
            optional: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn validators(&self, required: bool) -> Vec<Validator> {
        let mut out = Vec::new();
        if required {
            out.push(validators::required("This field is required"));
        }
        out.extend(self.format.validators());
        out
    }

    /// Checks an answer; `step_optional` waives the required check.
    pub fn validate(&self, answer: Option<&Value>, step_optional: bool) -> Result<(), String> {
        let value = answer.unwrap_or(&Value::None);
        let required = !self.optional && !step_optional;
        if !required && value.is_empty() {
            return Ok(());
        }
        run_validators(&self.validators(required), value)
    }
}
