use thiserror::Error;

use crate::step::StepId;

/// Content-validation errors.
///
/// The bundled dataset always passes validation; these fire only for
/// hand-assembled content that breaks the startup invariants.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("flow content has no steps")]
    NoSteps,

    #[error("duplicate step id: {id}")]
    DuplicateStepId { id: StepId },

    #[error("step id must be a positive integer")]
    ZeroStepId,
}

/// Result type alias for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ContentError::DuplicateStepId { id: StepId(4) };
        assert_eq!(err.to_string(), "duplicate step id: 4");
        assert_eq!(ContentError::NoSteps.to_string(), "flow content has no steps");
    }
}
