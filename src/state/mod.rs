pub mod result;
pub mod survey;
