use std::collections::HashSet;

use serde::Serialize;

use crate::core::form_item::FormItem;
use crate::core::step::{FormStep, ItemIssue, Step};
use crate::error::{Result, SurveyError};
use crate::profile::{ProfileAnswers, ProfileStep};
use crate::state::result::TaskResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurveyStep {
    Form(FormStep),
    Profile(ProfileStep),
}

impl SurveyStep {
    fn inner(&self) -> &dyn Step {
        match self {
            Self::Form(step) => step as &dyn Step,
            Self::Profile(step) => step as &dyn Step,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Form(_) => "form",
            Self::Profile(_) => "profile",
        }
    }

    pub fn as_profile(&self) -> Option<&ProfileStep> {
        match self {
            Self::Profile(step) => Some(step),
            Self::Form(_) => None,
        }
    }
}

impl Step for SurveyStep {
    fn identifier(&self) -> &str {
        self.inner().identifier()
    }

    fn title(&self) -> Option<&str> {
        self.inner().title()
    }

    fn text(&self) -> Option<&str> {
        self.inner().text()
    }

    fn items(&self) -> &[FormItem] {
        self.inner().items()
    }

    fn is_optional(&self) -> bool {
        self.inner().is_optional()
    }
}

impl From<FormStep> for SurveyStep {
    fn from(step: FormStep) -> Self {
        Self::Form(step)
    }
}

impl From<ProfileStep> for SurveyStep {
    fn from(step: ProfileStep) -> Self {
        Self::Profile(step)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultIssue {
    pub step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    pub message: String,
}

impl ResultIssue {
    fn from_item(step: &str, issue: ItemIssue) -> Self {
        Self {
            step: step.to_string(),
            item: Some(issue.item),
            message: issue.message,
        }
    }
}

/// Ordered sequence of steps with unique identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Survey {
    identifier: String,
    steps: Vec<SurveyStep>,
}

impl Survey {
    pub fn new(identifier: impl Into<String>, steps: Vec<SurveyStep>) -> Result<Self> {
        let identifier = identifier.into();
        if identifier.trim().is_empty() {
            return Err(SurveyError::EmptyIdentifier("survey"));
        }

        let mut seen = HashSet::new();
        for step in &steps {
            if step.identifier().trim().is_empty() {
                return Err(SurveyError::EmptyIdentifier("step"));
            }
            if !seen.insert(step.identifier()) {
                return Err(SurveyError::DuplicateStep(step.identifier().to_string()));
            }
            match step {
                SurveyStep::Form(form) => form.check_items()?,
                SurveyStep::Profile(profile) => profile.form_step().check_items()?,
            }
        }

        Ok(Self { identifier, steps })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[SurveyStep] {
        &self.steps
    }

    pub fn step(&self, identifier: &str) -> Option<&SurveyStep> {
        self.steps
            .iter()
            .find(|step| step.identifier() == identifier)
    }

    pub fn profile_steps(&self) -> impl Iterator<Item = &ProfileStep> {
        self.steps.iter().filter_map(SurveyStep::as_profile)
    }

    /// Missing results for optional steps are not reported.
    pub fn validate_result(&self, result: &TaskResult) -> Vec<ResultIssue> {
        let mut issues = Vec::new();
        for step in &self.steps {
            match result.step_result(step.identifier()) {
                Some(step_result) => issues.extend(
                    step.validate_result(step_result)
                        .into_iter()
                        .map(|issue| ResultIssue::from_item(step.identifier(), issue)),
                ),
                None if step.is_optional() => {}
                None => issues.push(ResultIssue {
                    step: step.identifier().to_string(),
                    item: None,
                    message: "No result recorded for step".to_string(),
                }),
            }
        }
        log::debug!(
            "survey `{}`: {} result issue(s)",
            self.identifier,
            issues.len()
        );
        issues
    }

    /// Profile answers per profile step that has a result.
    pub fn profile_answers<'a>(
        &'a self,
        result: &TaskResult,
    ) -> Vec<(&'a str, ProfileAnswers)> {
        self.profile_steps()
            .filter_map(|step| {
                result
                    .step_result(step.identifier())
                    .map(|step_result| (step.identifier(), ProfileAnswers::from_result(step_result)))
            })
            .collect()
    }
}
