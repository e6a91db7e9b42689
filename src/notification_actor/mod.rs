//! Notification feed: read state and swipe removal.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
