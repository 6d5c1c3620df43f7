//! Scenario tests driving whole compose cycles through a recording backend

mod recording_backend;
mod panel_chrome;

use self::recording_backend::RecordingBackend;
use crate::input::{InputEvent, MouseButton};
use crate::ui::{FrameOutput, UIContext, UIResult};

/// Context plus a backend that remembers every call
pub(crate) struct Harness {
    pub(crate) context: UIContext,
    pub(crate) backend: RecordingBackend,
}

impl Harness {
    pub(crate) fn new() -> Self {
        crate::foundation::logging::try_init();
        Self { context: UIContext::new(), backend: RecordingBackend::default() }
    }

    /// Queue `events` and run one full frame
    pub(crate) fn frame(&mut self, events: &[InputEvent]) -> UIResult<FrameOutput> {
        for event in events {
            self.context.push_input(event.clone());
        }
        self.context.run_frame(&mut self.backend)
    }
}

/// Move, press and release within one frame
pub(crate) fn click(x: f32, y: f32) -> Vec<InputEvent> {
    vec![
        InputEvent::cursor(x, y),
        InputEvent::press(MouseButton::Left),
        InputEvent::release(MouseButton::Left),
    ]
}
