use thiserror::Error;
use crate::actor_framework::FrameworkError;
use crate::cart_actor::CartError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WishlistError {
    #[error("Wishlist item not found: {0}")]
    NotFound(String),
    #[error("{0} is currently out of stock")]
    OutOfStock(String),
    #[error("Could not add to cart: {0}")]
    Cart(#[from] CartError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for WishlistError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => WishlistError::NotFound(id),
            other => WishlistError::ActorCommunicationError(other.to_string()),
        }
    }
}
