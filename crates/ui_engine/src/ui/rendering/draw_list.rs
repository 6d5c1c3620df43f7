//! Per-frame draw list
//!
//! Commands are recorded panel by panel. Each panel's commands form one
//! contiguous range that the backend replays between `begin_panel` and
//! `end_panel`.

use std::ops::Range;

use super::commands::UIRenderCommand;
use crate::ui::backend::{BackendResult, UIRenderBackend};
use crate::foundation::math::{Rect, Vec2, Vec4};

/// Slice of the draw list belonging to one panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelDrawRange {
    /// Panel name (the backend window identity)
    pub name: String,
    /// Panel frame in screen space
    pub bounds: Rect,
    /// Command indices
    pub range: Range<usize>,
}

#[derive(Debug, Clone)]
struct OpenPanel {
    name: String,
    bounds: Rect,
    start: usize,
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<UIRenderCommand>,
    panels: Vec<PanelDrawRange>,
    open: Option<OpenPanel>,
}

impl DrawList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording a panel, sealing one still open
    pub fn begin_panel(&mut self, name: &str, bounds: Rect) {
        self.end_panel();
        self.open = Some(OpenPanel { name: name.to_string(), bounds, start: self.commands.len() });
    }

    /// Seal the open panel's commands
    pub fn end_panel(&mut self) {
        if let Some(open) = self.open.take() {
            self.panels.push(PanelDrawRange {
                name: open.name,
                bounds: open.bounds,
                range: open.start..self.commands.len(),
            });
        }
    }

    /// Append a raw command
    pub fn push(&mut self, command: UIRenderCommand) {
        log::trace!("draw {:?}", command);
        self.commands.push(command);
    }

    /// Append a filled rectangle
    pub fn rect(&mut self, rect: Rect, color: Vec4) {
        self.push(UIRenderCommand::Rect { rect, color });
    }

    /// Append an outline
    pub fn border(&mut self, rect: Rect, color: Vec4, width: f32) {
        if width > 0.0 {
            self.push(UIRenderCommand::Border { rect, color, width });
        }
    }

    /// Append a text run
    pub fn text(&mut self, position: Vec2, text: &str, color: Vec4) {
        if !text.is_empty() {
            self.push(UIRenderCommand::Text { position, text: text.to_string(), color });
        }
    }

    /// Append a clip region
    pub fn clip(&mut self, rect: Rect) {
        self.push(UIRenderCommand::Clip { rect });
    }

    /// All sealed commands
    pub fn commands(&self) -> &[UIRenderCommand] {
        &self.commands
    }

    /// Sealed panel ranges in composition order
    pub fn panels(&self) -> &[PanelDrawRange] {
        &self.panels
    }

    /// Commands of a sealed panel
    pub fn panel_commands(&self, name: &str) -> Option<&[UIRenderCommand]> {
        self.panels
            .iter()
            .find(|panel| panel.name == name)
            .map(|panel| &self.commands[panel.range.clone()])
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// No commands recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Reset for the next frame, keeping allocations
    pub fn clear(&mut self) {
        self.commands.clear();
        self.panels.clear();
        self.open = None;
    }

    /// Replay the sealed list into a backend, ending with one flush
    pub fn submit(&self, backend: &mut dyn UIRenderBackend, viewport: (f32, f32)) -> BackendResult {
        backend.begin_frame(viewport)?;
        for panel in &self.panels {
            backend.begin_panel(&panel.name, panel.bounds)?;
            for command in &self.commands[panel.range.clone()] {
                backend.draw(command)?;
            }
            backend.end_panel(&panel.name)?;
        }
        backend.flush()
    }
}
