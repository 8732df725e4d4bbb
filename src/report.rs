//! Summary of a survey and, optionally, of a result checked against it.

use serde::Serialize;

use crate::core::step::Step;
use crate::profile::{ProfileAnswers, ProfileField};
use crate::state::result::TaskResult;
use crate::state::survey::{ResultIssue, Survey};

#[derive(Debug, Serialize)]
pub struct StepSummary<'a> {
    pub identifier: &'a str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    pub items: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profile_fields: Vec<ProfileField>,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub survey: &'a str,
    pub steps: Vec<StepSummary<'a>>,
    /// `None` when no result was checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<ResultIssue>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profile_answers: Vec<(&'a str, ProfileAnswers)>,
}

impl Report<'_> {
    pub fn is_clean(&self) -> bool {
        self.issues.as_ref().is_none_or(Vec::is_empty)
    }
}

pub fn build_report<'a>(survey: &'a Survey, result: Option<&TaskResult>) -> Report<'a> {
    let steps = survey
        .steps()
        .iter()
        .map(|step| StepSummary {
            identifier: step.identifier(),
            kind: step.kind(),
            title: step.title(),
            items: step.item_identifiers(),
            profile_fields: step
                .as_profile()
                .map(|profile| profile.profile_fields())
                .unwrap_or_default(),
        })
        .collect();

    if let Some(result) = result.filter(|result| result.identifier != survey.identifier()) {
        log::warn!(
            "result `{}` does not match survey `{}`",
            result.identifier,
            survey.identifier()
        );
    }

    Report {
        survey: survey.identifier(),
        steps,
        issues: result.map(|result| survey.validate_result(result)),
        profile_answers: result
            .map(|result| survey.profile_answers(result))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::build_report;
    use crate::config::SurveyConfig;
    use crate::profile::{DOB_IDENTIFIER, GIVEN_NAME_IDENTIFIER, ProfileField};
    use crate::state::result::TaskResult;
    use crate::state::survey::Survey;

    fn onboarding() -> Survey {
        SurveyConfig::from_yaml_str(include_str!("../demos/onboarding.yaml"))
            .and_then(SurveyConfig::into_survey)
            .expect("demo survey")
    }

    fn onboarding_result() -> TaskResult {
        TaskResult::from_json_str(include_str!("../demos/onboarding_result.json"))
            .expect("demo result")
    }

    #[test]
    fn summary_without_result() {
        let survey = onboarding();
        let report = build_report(&survey, None);

        assert!(report.is_clean());
        assert!(report.issues.is_none());
        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.steps[0].kind, "profile");
        assert_eq!(report.steps[0].items.first().copied(), Some(GIVEN_NAME_IDENTIFIER));
        assert_eq!(report.steps[0].profile_fields, ProfileField::ALL.to_vec());
        assert_eq!(report.steps[1].items, vec!["email"]);
    }

    #[test]
    fn complete_result_is_clean() {
        let survey = onboarding();
        let result = onboarding_result();
        let report = build_report(&survey, Some(&result));

        assert!(report.is_clean());
        assert_eq!(report.issues.as_deref(), Some(&[][..]));
        assert_eq!(report.profile_answers.len(), 1);
        assert_eq!(report.profile_answers[0].1.given_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn missing_dob_is_reported() {
        let survey = onboarding();
        let mut result = onboarding_result();
        result.steps[0].answers.shift_remove(DOB_IDENTIFIER);
        let report = build_report(&survey, Some(&result));

        assert!(!report.is_clean());
        let issues = report.issues.expect("issues");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].item.as_deref(), Some(DOB_IDENTIFIER));

        let json = serde_json::to_value(build_report(&survey, Some(&result))).expect("json");
        assert_eq!(json["issues"][0]["item"], DOB_IDENTIFIER);
    }
}
