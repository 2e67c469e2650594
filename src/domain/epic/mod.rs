//! Epic domain types

pub mod entity;
pub mod validation;

pub use entity::{Epic, Size};
pub use validation::{validate_epic_id, EpicValidationError};
