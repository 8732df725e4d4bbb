use std::collections::HashSet;

use serde::Serialize;

use crate::core::form_item::FormItem;
use crate::error::{Result, SurveyError};
use crate::state::result::StepResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemIssue {
    pub item: String,
    pub message: String,
}

/// Common surface of every step: an identifier, display strings and an
/// ordered list of form items.
pub trait Step {
    fn identifier(&self) -> &str;
    fn title(&self) -> Option<&str>;
    fn text(&self) -> Option<&str>;
    fn items(&self) -> &[FormItem];

    fn is_optional(&self) -> bool {
        false
    }

    fn item(&self, identifier: &str) -> Option<&FormItem> {
        self.items().iter().find(|item| item.identifier == identifier)
    }

    fn item_identifiers(&self) -> Vec<&str> {
        self.items().iter().map(|item| item.identifier.as_str()).collect()
    }

    /// Answers for identifiers the step does not declare are ignored.
    fn validate_result(&self, result: &StepResult) -> Vec<ItemIssue> {
        self.items()
            .iter()
            .filter_map(|item| {
                item.validate(result.answer(&item.identifier), self.is_optional())
                    .err()
                    .map(|message| ItemIssue {
                        item: item.identifier.clone(),
                        message,
                    })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FormStep {
    identifier: String,
    title: Option<String>,
    text: Option<String>,
    items: Vec<FormItem>,
    optional: bool,
}

impl FormStep {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_item(mut self, item: FormItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = FormItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn push_item(&mut self, item: FormItem) {
        self.items.push(item);
    }

    pub fn check_items(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.identifier.as_str()) {
                return Err(SurveyError::DuplicateItem {
                    step: self.identifier.clone(),
                    item: item.identifier.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Step for FormStep {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn items(&self) -> &[FormItem] {
        &self.items
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}
