//! Backend test double that records every call

use crate::foundation::math::{Rect, Vec4};
use crate::ui::backend::{BackendResult, UIRenderBackend};
use crate::ui::rendering::UIRenderCommand;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BackendCall {
    BeginFrame((f32, f32)),
    BeginPanel(String, Rect),
    Draw(UIRenderCommand),
    EndPanel(String),
    Flush,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub(crate) calls: Vec<BackendCall>,
    pub(crate) fail_flush: bool,
}

impl RecordingBackend {
    /// Forget everything recorded so far
    pub(crate) fn reset(&mut self) {
        self.calls.clear();
    }

    pub(crate) fn flush_count(&self) -> usize {
        self.calls.iter().filter(|call| matches!(call, BackendCall::Flush)).count()
    }

    /// Panel names in the order the backend saw them
    pub(crate) fn panel_order(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::BeginPanel(name, _) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text runs drawn
    pub(crate) fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::Draw(UIRenderCommand::Text { text, .. }) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Filled rectangles drawn with `color`
    pub(crate) fn rects_with_color(&self, color: Vec4) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::Draw(UIRenderCommand::Rect { rect, color: c }) if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl UIRenderBackend for RecordingBackend {
    fn begin_frame(&mut self, viewport: (f32, f32)) -> BackendResult {
        self.calls.push(BackendCall::BeginFrame(viewport));
        Ok(())
    }

    fn begin_panel(&mut self, name: &str, bounds: Rect) -> BackendResult {
        self.calls.push(BackendCall::BeginPanel(name.to_string(), bounds));
        Ok(())
    }

    fn draw(&mut self, command: &UIRenderCommand) -> BackendResult {
        self.calls.push(BackendCall::Draw(command.clone()));
        Ok(())
    }

    fn end_panel(&mut self, name: &str) -> BackendResult {
        self.calls.push(BackendCall::EndPanel(name.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> BackendResult {
        self.calls.push(BackendCall::Flush);
        if self.fail_flush {
            return Err("device lost".into());
        }
        Ok(())
    }
}
