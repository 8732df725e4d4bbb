//! Built-in profile fields. The identifier constants are also the keys used to
//! read the answers back out of a [`StepResult`](crate::state::result::StepResult).

use chrono::NaiveDate;

use crate::core::answer_format::{AnswerFormat, TextChoice};
use crate::core::form_item::FormItem;
use crate::profile::options::ProfileField;

pub const GIVEN_NAME_IDENTIFIER: &str = "profile.given_name";
pub const FAMILY_NAME_IDENTIFIER: &str = "profile.family_name";
pub const GENDER_IDENTIFIER: &str = "profile.gender";
pub const DOB_IDENTIFIER: &str = "profile.dob";

pub const GENDER_FEMALE: &str = "female";
pub const GENDER_MALE: &str = "male";
pub const GENDER_OTHER: &str = "other";

// Same year floor the date inputs use.
const EARLIEST_BIRTH_YEAR: i32 = 1900;

pub fn gender_choices() -> Vec<TextChoice> {
    vec![
        TextChoice::new("Female", GENDER_FEMALE),
        TextChoice::new("Male", GENDER_MALE),
        TextChoice::new("Other", GENDER_OTHER),
    ]
}

impl ProfileField {
    pub fn label(self) -> &'static str {
        match self {
            Self::GivenName => "Given name",
            Self::FamilyName => "Family name",
            Self::Gender => "Gender",
            Self::DateOfBirth => "Date of birth",
        }
    }

    pub fn answer_format(self) -> AnswerFormat {
        match self {
            Self::GivenName | Self::FamilyName => AnswerFormat::text(),
            Self::Gender => AnswerFormat::single_choice(gender_choices()),
            Self::DateOfBirth => {
                AnswerFormat::date(NaiveDate::from_ymd_opt(EARLIEST_BIRTH_YEAR, 1, 1), None)
            }
        }
    }

    pub fn form_item(self) -> FormItem {
        let item = FormItem::new(self.identifier(), self.label(), self.answer_format());
        match self {
            Self::GivenName => item.with_placeholder("John"),
            Self::FamilyName => item.with_placeholder("Appleseed"),
            Self::Gender => item,
            Self::DateOfBirth => item.with_placeholder("YYYY-MM-DD"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_distinct() {
        let mut ids = ProfileField::ALL.map(ProfileField::identifier).to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn field_items_use_matching_formats() {
        let given = ProfileField::GivenName.form_item();
        assert_eq!(given.identifier, GIVEN_NAME_IDENTIFIER);
        assert_eq!(given.format.kind(), "text");
        assert!(!given.optional);

        let gender = ProfileField::Gender.form_item();
        let AnswerFormat::SingleChoice { choices } = gender.format else {
            panic!("expected single choice");
        };
        assert_eq!(
            choices.iter().map(|c| c.value.as_str()).collect::<Vec<_>>(),
            vec![GENDER_FEMALE, GENDER_MALE, GENDER_OTHER]
        );

        let dob = ProfileField::DateOfBirth.form_item();
        assert_eq!(dob.identifier, DOB_IDENTIFIER);
        assert_eq!(
            dob.format,
            AnswerFormat::date(NaiveDate::from_ymd_opt(1900, 1, 1), None)
        );
    }
}
