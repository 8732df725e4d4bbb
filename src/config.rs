//! Survey definitions loaded from YAML or JSON.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::{self, SeqAccess, Unexpected, Visitor};

use crate::core::form_item::FormItem;
use crate::core::step::FormStep;
use crate::error::{Result, SurveyError};
use crate::profile::{ProfileField, ProfileStep, ProfileStepOptions};
use crate::state::survey::{Survey, SurveyStep};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurveyConfig {
    pub id: String,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum StepConfig {
    Form {
        id: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        optional: bool,
        #[serde(default)]
        items: Vec<FormItem>,
    },
    Profile {
        id: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        optional: bool,
        #[serde(default)]
        options: OptionsConfig,
        /// Placed before the profile items.
        #[serde(default)]
        items: Vec<FormItem>,
    },
}

/// Either a list of field names or a raw bit value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsConfig {
    Fields(Vec<ProfileField>),
    Bits(u32),
}

impl<'de> Deserialize<'de> for OptionsConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(OptionsVisitor)
    }
}

struct OptionsVisitor;

impl<'de> Visitor<'de> for OptionsVisitor {
    type Value = OptionsConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of profile fields or an integer bit value")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Self::Value, E> {
        u32::try_from(value)
            .map(OptionsConfig::Bits)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Self::Value, E> {
        u32::try_from(value)
            .map(OptionsConfig::Bits)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    // Element errors (e.g. an unknown field name) pass through unchanged.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut fields = Vec::new();
        while let Some(field) = seq.next_element::<ProfileField>()? {
            fields.push(field);
        }
        Ok(OptionsConfig::Fields(fields))
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self::Bits(ProfileStepOptions::DEFAULT.bits())
    }
}

impl From<&OptionsConfig> for ProfileStepOptions {
    fn from(config: &OptionsConfig) -> Self {
        match config {
            OptionsConfig::Fields(fields) => fields.iter().copied().collect(),
            OptionsConfig::Bits(bits) => ProfileStepOptions::from_raw(*bits),
        }
    }
}

impl StepConfig {
    pub fn build(self) -> SurveyStep {
        match self {
            Self::Form {
                id,
                title,
                text,
                optional,
                items,
            } => form_step(id, title, text, optional, items).into(),
            Self::Profile {
                id,
                title,
                text,
                optional,
                options,
                items,
            } => {
                let form = form_step(id, title, text, optional, items);
                ProfileStep::from_form_step(form, (&options).into()).into()
            }
        }
    }
}

fn form_step(
    id: String,
    title: Option<String>,
    text: Option<String>,
    optional: bool,
    items: Vec<FormItem>,
) -> FormStep {
    let mut step = FormStep::new(id).with_items(items).optional(optional);
    if let Some(title) = title {
        step = step.with_title(title);
    }
    if let Some(text) = text {
        step = step.with_text(text);
    }
    step
}

impl SurveyConfig {
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn into_survey(self) -> Result<Survey> {
        let steps = self.steps.into_iter().map(StepConfig::build).collect();
        Survey::new(self.id, steps)
    }
}

/// Reads a definition; `.json` files are parsed as JSON, anything else as YAML.
pub fn load_survey(path: &Path) -> Result<Survey> {
    let raw = fs::read_to_string(path).map_err(|source| SurveyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        SurveyConfig::from_json_str(&raw)?
    } else {
        SurveyConfig::from_yaml_str(&raw)?
    };
    let survey = config.into_survey()?;
    log::info!(
        "loaded survey `{}` with {} step(s) from {}",
        survey.identifier(),
        survey.len(),
        path.display()
    );
    Ok(survey)
}
