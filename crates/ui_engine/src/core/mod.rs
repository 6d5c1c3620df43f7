//! Core configuration for the composition layer

pub mod config;

pub use config::{StateConfig, StyleMetrics, UIConfig};
