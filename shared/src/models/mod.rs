//! Data models
//!
//! Wire shapes exchanged with the marketplace backend. Backend ids arrive as
//! `_id`; every model also accepts `id` so fixtures stay readable.

pub mod cart;
pub mod engagement;
pub mod forum;
pub mod item;
pub mod party;

// Re-exports
pub use cart::*;
pub use engagement::*;
pub use forum::*;
pub use item::*;
pub use party::*;
