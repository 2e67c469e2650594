use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A cross-entity invariant was broken. Callers must abort the enclosing
    /// operation without applying partial writes.
    #[error("Invariant violation: {message}")]
    Invariant { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Epic 'x-1' not found");
        assert_eq!(error.to_string(), "Not found: Epic 'x-1' not found");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Epic 'x-1' already exists");
        assert_eq!(error.to_string(), "Conflict: Epic 'x-1' already exists");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("id must not be empty");
        assert_eq!(error.to_string(), "Validation error: id must not be empty");
    }
}
