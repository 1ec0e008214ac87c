//! The guestbook's widgets.
//!
//! Each widget owns its state exclusively and is driven through key
//! messages routed by the app model.

pub mod board;
pub mod counter;
pub mod field;

pub use board::Board;
pub use counter::Counter;
pub use field::Field;
