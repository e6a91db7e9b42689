//! Cross-screen parameter passing: route parameters, transition requests
//! emitted by the order screens, and the reason forms that produce them.

mod forms;
mod params;
mod transition;

pub use forms::*;
pub use params::*;
pub use transition::*;
