//! UI rendering module
//!
//! Backend-agnostic draw commands and the per-frame draw list

pub mod commands;
pub mod draw_list;
pub mod measure;

pub use commands::UIRenderCommand;
pub use draw_list::{DrawList, PanelDrawRange};
pub use measure::{MonospaceMeasure, TextMeasure};
