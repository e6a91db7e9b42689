pub mod order;
pub mod cart;
pub mod wishlist;
pub mod notification;
pub mod money;

pub use order::*;
pub use cart::*;
pub use wishlist::*;
pub use notification::*;
pub use money::*;
