//! UI error types

use std::str::Utf8Error;

use thiserror::Error;

/// Boxed error returned by a failing panel declaration
pub type DeclarationError = Box<dyn std::error::Error + Send + Sync>;

/// Stage of the compose cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramePhase {
    /// Between frames
    Idle,
    /// Input drained, nothing composed yet
    FrameBegun,
    /// Panels composed, draw list still open
    Composing,
    /// Draw list sealed and submitted
    FrameEnded,
}

/// A panel whose declaration failed during one frame
#[derive(Debug)]
pub struct PanelFailure {
    /// Panel name
    pub panel: String,
    /// Error returned by the declaration
    pub error: DeclarationError,
}

impl std::fmt::Display for PanelFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "panel '{}': {}", self.panel, self.error)
    }
}

/// UI composition errors
#[derive(Error, Debug)]
pub enum UIError {
    /// Operation named a panel that is not registered
    #[error("Unknown panel: {0}")]
    UnknownPanelReference(String),

    /// Raw text bytes were not valid UTF-8; the buffer was left unchanged
    #[error("Invalid UTF-8 for text field '{key}' in panel '{panel}': {source}")]
    EncodingError {
        /// Panel name
        panel: String,
        /// Widget key
        key: String,
        /// Decoding failure
        #[source]
        source: Utf8Error,
    },

    /// Context resources were already released
    #[error("UI context was already disposed")]
    ResourceAlreadyReleased,

    /// Compose cycle step called out of order
    #[error("Invalid frame phase: expected {expected:?}, found {actual:?}")]
    InvalidPhase {
        /// Phase the operation requires
        expected: FramePhase,
        /// Phase the context was in
        actual: FramePhase,
    },

    /// One or more panel declarations failed; the other panels still composed
    #[error("{} panel declaration(s) failed: {}", .0.len(), join_failures(.0))]
    DeclarationFailed(Vec<PanelFailure>),

    /// No persistent state exists for the widget
    #[error("No widget state for '{key}' in panel '{panel}'")]
    UnknownWidgetState {
        /// Panel name
        panel: String,
        /// Widget key or radio group
        key: String,
    },

    /// Rendering backend rejected the frame
    #[error("Render backend error: {0}")]
    Backend(String),
}

fn join_failures(failures: &[PanelFailure]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Result type for UI operations
pub type UIResult<T> = Result<T, UIError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_failure_message_lists_panels() {
        let error = UIError::DeclarationFailed(vec![
            PanelFailure { panel: "a".to_string(), error: "boom".into() },
            PanelFailure { panel: "b".to_string(), error: "bust".into() },
        ]);
        assert_eq!(error.to_string(), "2 panel declaration(s) failed: panel 'a': boom; panel 'b': bust");
    }

    #[test]
    fn test_encoding_error_keeps_source() {
        let bytes = [0xff_u8, 0xfe];
        let source = match std::str::from_utf8(&bytes) {
            Err(err) => err,
            Ok(_) => unreachable!(),
        };
        let error = UIError::EncodingError { panel: "p".to_string(), key: "name".to_string(), source };
        assert!(std::error::Error::source(&error).is_some());
    }
}
