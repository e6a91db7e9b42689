//! Saved-for-later products. Rows are only ever removed.

pub mod entity;
pub mod error;

pub use error::*;
