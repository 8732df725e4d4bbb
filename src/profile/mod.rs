pub mod answers;
pub mod fields;
pub mod options;
pub mod step;

pub use answers::{ProfileAnswers, missing_profile_fields};
pub use fields::{DOB_IDENTIFIER, FAMILY_NAME_IDENTIFIER, GENDER_IDENTIFIER, GIVEN_NAME_IDENTIFIER};
pub use options::{ProfileField, ProfileStepOptions};
pub use step::{ProfileStep, append_profile_items, profile_items};
