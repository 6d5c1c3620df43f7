//! UI Render Backend Trait
//!
//! Defines the interface between the composition layer and rendering backends.
//! Keeps the UI system independent of Vulkan/DirectX/OpenGL specifics.

use crate::foundation::math::Rect;
use crate::ui::rendering::UIRenderCommand;

/// Result type of backend calls
pub type BackendResult = Result<(), Box<dyn std::error::Error>>;

/// Backend-agnostic UI rendering interface
///
/// Receives the sealed draw list once per frame. Implementations must not
/// keep references into the frame's commands past [`UIRenderBackend::flush`].
pub trait UIRenderBackend {
    /// Begin a frame on a viewport of the given size
    fn begin_frame(&mut self, viewport: (f32, f32)) -> BackendResult;

    /// Begin drawing into the window object identified by `name`
    fn begin_panel(&mut self, name: &str, bounds: Rect) -> BackendResult;

    /// Draw one primitive
    fn draw(&mut self, command: &UIRenderCommand) -> BackendResult;

    /// Finish the window object identified by `name`
    fn end_panel(&mut self, name: &str) -> BackendResult;

    /// Finalize the frame; called exactly once per frame
    fn flush(&mut self) -> BackendResult;
}
