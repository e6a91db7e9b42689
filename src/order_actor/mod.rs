//! Order lifecycle: the transition table, its outcomes, and rating feedback.

mod actions;
pub mod entity;
pub mod error;
pub mod feedback;

pub use actions::*;
pub use error::*;
pub use feedback::*;
