//! Team field validation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamValidationError {
    #[error("team id must not be empty")]
    EmptyId,
}

/// Team ids are externally assigned and free-form. The empty string means
/// "unassigned" on `Epic.team` and therefore can never name a real team.
pub fn validate_team_id(id: &str) -> Result<(), TeamValidationError> {
    if id.is_empty() {
        return Err(TeamValidationError::EmptyId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_valid() {
        assert!(validate_team_id("T1").is_ok());
    }

    #[test]
    fn test_team_id_empty() {
        assert_eq!(validate_team_id(""), Err(TeamValidationError::EmptyId));
    }
}
