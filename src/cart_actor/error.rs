use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart item not found: {0}")]
    NotFound(String),
    #[error("No items selected for checkout")]
    NothingSelected,
    #[error("Cart request rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::Rejected(reason) => CartError::Rejected(reason),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
