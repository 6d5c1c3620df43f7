//! # UI Engine
//!
//! An immediate-mode panel and widget composition layer. Panels are
//! re-declared every frame from plain Rust builders; the state that has to
//! outlive a frame (text buffers, checkbox values, radio selections, panel
//! geometry) lives in a persistent table keyed by stable widget identities.
//!
//! ## Features
//!
//! - **Flow Layout**: horizontal and vertical containers with fixed, ratio and dynamic sizing
//! - **Persistent State**: text buffers and toggles survive tree rebuilds
//! - **Panel Chrome**: movable, resizable, closable, minimizable and scrollable panels
//! - **Thread-Safe Input**: any thread can feed events; each frame sees one snapshot
//! - **Backend Agnostic**: frames are handed to a [`ui::UIRenderBackend`] as draw commands
//! - **Hot Swapping**: re-registering a panel replaces its content and keeps its geometry
//!
//! ## Quick Start
//!
//! ```rust
//! use ui_engine::prelude::*;
//!
//! struct NullBackend;
//!
//! impl UIRenderBackend for NullBackend {
//!     fn begin_frame(&mut self, _viewport: (f32, f32)) -> BackendResult { Ok(()) }
//!     fn begin_panel(&mut self, _name: &str, _bounds: Rect) -> BackendResult { Ok(()) }
//!     fn draw(&mut self, _command: &UIRenderCommand) -> BackendResult { Ok(()) }
//!     fn end_panel(&mut self, _name: &str) -> BackendResult { Ok(()) }
//!     fn flush(&mut self) -> BackendResult { Ok(()) }
//! }
//!
//! fn main() -> Result<(), UIError> {
//!     let mut context = UIContext::new();
//!     context.register_panel(
//!         PanelSpec::new("greeting")
//!             .title("Hello")
//!             .origin(10.0, 10.0)
//!             .size(220.0, 120.0)
//!             .declare(|view| {
//!                 let name = view.text("name").unwrap_or_default().to_string();
//!                 Ok(LayoutContainer::vertical()
//!                     .child(WidgetNode::label(format!("Hello, {}", name)).height(24.0))
//!                     .child(WidgetNode::text_field("world").key("name").height(24.0)))
//!             }),
//!     )?;
//!
//!     let output = context.run_frame(&mut NullBackend)?;
//!     assert_eq!(output.panels().len(), 1);
//!     assert_eq!(context.text("greeting", "name")?, "world");
//!     context.dispose()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod core;
pub mod events;
pub mod foundation;
pub mod input;
pub mod ui;

/// Common imports for UI users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::{StateConfig, StyleMetrics, UIConfig},
        events::{EventHandler, EventSystem, Interaction, InteractionKind},
        foundation::math::{Rect, Vec2, Vec4},
        input::{ButtonAction, InputEvent, InputSender, Key, MouseButton},
        ui::{
            widgets::{ExpandPolicy, HorizontalAlign, LayoutContainer, Orientation, WidgetNode},
            BackendResult, FrameOutput, PanelOptions, PanelSpec, PanelView, UIContext, UIError,
            UIRenderBackend, UIRenderCommand, UIResult,
        },
    };
}
