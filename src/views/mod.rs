//! Screen state that sits on top of the stores.

mod order_board;
mod swipe_list;

pub use order_board::*;
pub use swipe_list::*;
