//! UI render commands

use crate::foundation::math::{Rect, Vec2, Vec4};

/// Primitive draw call in screen space
#[derive(Debug, Clone, PartialEq)]
pub enum UIRenderCommand {
    /// Solid color rectangle
    Rect {
        /// Screen rectangle
        rect: Rect,
        /// Fill color
        color: Vec4,
    },
    /// Rectangle outline
    Border {
        /// Screen rectangle
        rect: Rect,
        /// Line color
        color: Vec4,
        /// Line width in pixels
        width: f32,
    },
    /// Single-line text run
    Text {
        /// Top-left of the run
        position: Vec2,
        /// Text content
        text: String,
        /// Text color
        color: Vec4,
    },
    /// Restrict following commands of the panel to a region
    Clip {
        /// Visible region
        rect: Rect,
    },
}
