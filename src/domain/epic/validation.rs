//! Epic field validation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EpicValidationError {
    #[error("epic id must not be empty")]
    EmptyId,

    #[error("invalid size weight: {0} (expected one of 1, 2, 4, 8, 16, 32)")]
    InvalidSize(u32),
}

/// Epic ids are externally assigned and free-form, but the empty string is
/// reserved as the "unassigned" sentinel on the team side and is never a
/// valid entity id.
pub fn validate_epic_id(id: &str) -> Result<(), EpicValidationError> {
    if id.is_empty() {
        return Err(EpicValidationError::EmptyId);
    }
    Ok(())
}
