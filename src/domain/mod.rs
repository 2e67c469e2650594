//! Domain layer - core entities and error taxonomy

pub mod epic;
pub mod error;
pub mod team;

pub use epic::{validate_epic_id, Epic, EpicValidationError, Size};
pub use error::DomainError;
pub use team::{validate_team_id, Team, TeamValidationError};
