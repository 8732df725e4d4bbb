use std::fmt;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::validators::{self, Validator};
use crate::error::SurveyError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChoice {
    pub text: String,
    pub value: String,
}

impl TextChoice {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// A compiled regular expression that serializes as its source text.
#[derive(Clone)]
pub struct TextPattern(Regex);

impl TextPattern {
    pub fn new(pattern: &str) -> Result<Self, SurveyError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|source| SurveyError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.0
    }
}

impl fmt::Debug for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextPattern").field(&self.as_str()).finish()
    }
}

impl PartialEq for TextPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl TryFrom<String> for TextPattern {
    type Error = SurveyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TextPattern> for String {
    fn from(value: TextPattern) -> Self {
        value.as_str().to_string()
    }
}

impl Serialize for TextPattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TextPattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// The kind of input a form item collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerFormat {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
        #[serde(default)]
        multiline: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<TextPattern>,
    },
    SingleChoice {
        choices: Vec<TextChoice>,
    },
    Date {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minimum: Option<NaiveDate>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maximum: Option<NaiveDate>,
    },
}

impl AnswerFormat {
    pub fn text() -> Self {
        Self::Text {
            max_length: None,
            multiline: false,
            pattern: None,
        }
    }

    pub fn single_choice(choices: Vec<TextChoice>) -> Self {
        Self::SingleChoice { choices }
    }

    pub fn date(minimum: Option<NaiveDate>, maximum: Option<NaiveDate>) -> Self {
        Self::Date { minimum, maximum }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::SingleChoice { .. } => "single_choice",
            Self::Date { .. } => "date",
        }
    }

    /// Validators for a present answer; emptiness is checked by the item.
    pub fn validators(&self) -> Vec<Validator> {
        match self {
            Self::Text {
                max_length,
                pattern,
                ..
            } => {
                let mut out = vec![validators::text()];
                if let Some(max) = max_length {
                    out.push(validators::max_length(*max));
                }
                if let Some(pattern) = pattern {
                    out.push(validators::pattern(pattern.regex().clone()));
                }
                out
            }
            Self::SingleChoice { choices } => vec![validators::one_of(
                choices.iter().map(|choice| choice.value.clone()).collect(),
            )],
            Self::Date { minimum, maximum } => vec![validators::date_range(*minimum, *maximum)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnswerFormat, TextChoice, TextPattern};

    #[test]
    fn parses_text_format_with_pattern() {
        let format: AnswerFormat =
            serde_yaml::from_str("kind: text\nmax_length: 20\npattern: '^[a-z]+$'\n")
                .expect("format");
        let AnswerFormat::Text {
            max_length,
            multiline,
            pattern,
        } = format
        else {
            panic!("expected text format");
        };
        assert_eq!(max_length, Some(20));
        assert!(!multiline);
        assert_eq!(pattern.map(String::from).as_deref(), Some("^[a-z]+$"));
    }

    #[test]
    fn rejects_invalid_pattern() {
        let err = serde_yaml::from_str::<AnswerFormat>("kind: text\npattern: '(['\n")
            .expect_err("pattern should fail");
        assert!(err.to_string().contains("invalid text pattern"));
        assert!(TextPattern::new("([").is_err());
    }

    #[test]
    fn choice_validators_use_choice_values() {
        let format = AnswerFormat::single_choice(vec![
            TextChoice::new("Yes", "y"),
            TextChoice::new("No", "n"),
        ]);
        let validators = format.validators();
        assert_eq!(validators.len(), 1);
        assert!(validators[0](&crate::core::value::Value::Choice("y".to_string())).is_ok());
        assert!(validators[0](&crate::core::value::Value::Choice("Yes".to_string())).is_err());
    }
}
