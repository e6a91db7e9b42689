//! Cart-specific domain logic: selection and quantity actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
