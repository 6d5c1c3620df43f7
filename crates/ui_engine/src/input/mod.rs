//! Input module
//!
//! Routing of raw input events into the compose cycle and hit testing.

pub mod events;
pub mod router;
pub mod snapshot;
pub mod collision;

pub use events::{ButtonAction, InputEvent, Key, KeyboardInput, MouseButton};
pub use router::{InputRouter, InputSender};
pub use snapshot::{InputSnapshot, TextEdit};
