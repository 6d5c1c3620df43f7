//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the UI layer:
//! - Math types and rectangle geometry
//! - Handle-based collections for persistent state
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod logging;
