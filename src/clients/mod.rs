//! Typed clients, one per store, wrapping the generic [`ResourceClient`].
//!
//! [`ResourceClient`]: crate::actor_framework::ResourceClient

#[macro_use]
mod macros;
mod cart_client;
mod notification_client;
mod order_client;
mod wishlist_client;

pub use cart_client::*;
pub use notification_client::*;
pub use order_client::*;
pub use wishlist_client::*;
