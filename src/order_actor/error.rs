use thiserror::Error;
use crate::actor_framework::FrameworkError;
use super::feedback::FeedbackError;

/// Errors that can occur during order operations.
///
/// Lifecycle preconditions are not in here: those come back as
/// [`super::TransitionOutcome::Ignored`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
    #[error("Order request rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Rejected(reason) => OrderError::Rejected(reason),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
