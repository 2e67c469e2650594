//! Team domain types

pub mod entity;
pub mod validation;

pub use entity::Team;
pub use validation::{validate_team_id, TeamValidationError};
