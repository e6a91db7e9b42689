use thiserror::Error;
use crate::actor_framework::FrameworkError;
use crate::cart_actor::CartError;
use crate::checkout::CheckoutError;
use crate::notification_actor::NotificationError;
use crate::order_actor::OrderError;
use crate::wishlist_actor::WishlistError;

/// Top-level error for the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] FrameworkError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Wishlist(#[from] WishlistError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
    #[error("Store task failed: {0}")]
    TaskFailed(String),
}
