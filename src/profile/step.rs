use serde::Serialize;

use crate::core::form_item::FormItem;
use crate::core::step::{FormStep, Step};
use crate::profile::options::{ProfileField, ProfileStepOptions};

/// Profile items for `options`, in declaration order.
pub fn profile_items(options: ProfileStepOptions) -> Vec<FormItem> {
    options.fields().map(ProfileField::form_item).collect()
}

/// Appends the profile items selected by `options` after the step's own items.
pub fn append_profile_items(step: &mut FormStep, options: ProfileStepOptions) {
    if options.has_reserved_bits() {
        log::warn!(
            "step `{}`: ignoring reserved profile option bits {:#x}",
            step.identifier(),
            options.bits() & !ProfileStepOptions::all().bits()
        );
    }
    let items = profile_items(options);
    log::debug!(
        "step `{}`: appending {} profile item(s)",
        step.identifier(),
        items.len()
    );
    for item in items {
        step.push_item(item);
    }
}

/// A form step that carries the built-in profile fields selected by its
/// options, after any items the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStep {
    #[serde(flatten)]
    form: FormStep,
    options: ProfileStepOptions,
}

impl ProfileStep {
    pub fn new(
        identifier: impl Into<String>,
        title: Option<String>,
        text: Option<String>,
        options: ProfileStepOptions,
    ) -> Self {
        let mut form = FormStep::new(identifier);
        if let Some(title) = title {
            form = form.with_title(title);
        }
        if let Some(text) = text {
            form = form.with_text(text);
        }
        Self::from_form_step(form, options)
    }

    pub fn from_form_step(mut form: FormStep, options: ProfileStepOptions) -> Self {
        append_profile_items(&mut form, options);
        Self { form, options }
    }

    pub fn options(&self) -> ProfileStepOptions {
        self.options
    }

    pub fn profile_fields(&self) -> Vec<ProfileField> {
        self.options.fields().collect()
    }

    pub fn form_step(&self) -> &FormStep {
        &self.form
    }

    pub fn into_form_step(self) -> FormStep {
        self.form
    }
}

impl Step for ProfileStep {
    fn identifier(&self) -> &str {
        self.form.identifier()
    }

    fn title(&self) -> Option<&str> {
        self.form.title()
    }

    fn text(&self) -> Option<&str> {
        self.form.text()
    }

    fn items(&self) -> &[FormItem] {
        self.form.items()
    }

    fn is_optional(&self) -> bool {
        self.form.is_optional()
    }
}
