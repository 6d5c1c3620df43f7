//! UI System Module
//!
//! Immediate-mode panels over a persistent widget state table.
//!
//! Architecture:
//! - UIContext: owns panels, persistent state, input and the compose cycle
//! - panel/view: panel registration and the read-only view declarations get
//! - widgets/: widget declarations and layout containers
//! - rendering/: backend-agnostic draw commands and the per-frame draw list
//! - state/identity/text_buffer: persistent state keyed by widget identity

pub mod backend;
pub mod context;
pub mod error;
pub mod identity;
pub mod panel;
pub mod rendering;
pub mod state;
pub mod text_buffer;
pub mod view;
pub mod widgets;

pub(crate) mod compose;

#[cfg(test)]
mod tests;

pub use backend::{BackendResult, UIRenderBackend};
pub use context::{FrameOutput, UIContext};
pub use error::{DeclarationError, FramePhase, PanelFailure, UIError, UIResult};
pub use identity::{PanelId, WidgetId};
pub use panel::{Declaration, Panel, PanelOptions, PanelSpec};
pub use state::{StateKind, WidgetState};
pub use text_buffer::TextBuffer;
pub use view::PanelView;

// Re-export widgets
pub use widgets::{
    ButtonState, ExpandPolicy, HorizontalAlign, LayoutContainer, LayoutWarning, Orientation, SizeHints,
    UIButton, UICheckbox, UIRadio, UIText, UITextField, WidgetNode,
};

// Re-export rendering types
pub use rendering::{DrawList, MonospaceMeasure, PanelDrawRange, TextMeasure, UIRenderCommand};

// Re-export events
pub use crate::events::{EventSystem, Interaction, InteractionKind};
