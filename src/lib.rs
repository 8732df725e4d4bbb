pub mod config;
pub mod core;
pub mod error;
pub mod profile;
pub mod report;
pub mod state;

pub use crate::core::answer_format;
pub use crate::core::form_item;
pub use crate::core::step;
pub use crate::core::validators;
pub use crate::core::value;

pub use crate::state::result;
pub use crate::state::survey;

pub use error::{Result, SurveyError};
