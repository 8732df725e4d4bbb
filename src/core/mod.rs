pub mod answer_format;
pub mod form_item;
pub mod step;
pub mod validators;
pub mod value;
