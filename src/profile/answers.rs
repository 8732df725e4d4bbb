use chrono::NaiveDate;
use serde::Serialize;

use crate::profile::fields::{
    DOB_IDENTIFIER, FAMILY_NAME_IDENTIFIER, GENDER_IDENTIFIER, GIVEN_NAME_IDENTIFIER,
};
use crate::profile::options::{ProfileField, ProfileStepOptions};
use crate::state::result::StepResult;

/// Typed view over the profile answers in a step result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProfileAnswers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

impl ProfileAnswers {
    pub fn from_result(result: &StepResult) -> Self {
        let text = |id: &str| {
            result
                .answer(id)
                .filter(|value| !value.is_empty())
                .and_then(|value| value.as_text())
                .map(str::to_string)
        };
        Self {
            given_name: text(GIVEN_NAME_IDENTIFIER),
            family_name: text(FAMILY_NAME_IDENTIFIER),
            gender: result
                .answer(GENDER_IDENTIFIER)
                .filter(|value| !value.is_empty())
                .and_then(|value| value.as_choice())
                .map(str::to_string),
            date_of_birth: result.answer(DOB_IDENTIFIER).and_then(|value| value.as_date()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Enabled fields without a non-empty answer, in declaration order.
pub fn missing_profile_fields(options: ProfileStepOptions, result: &StepResult) -> Vec<ProfileField> {
    options
        .fields()
        .filter(|field| !result.has_answer(field.identifier()))
        .collect()
}
