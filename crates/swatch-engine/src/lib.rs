//! Swatch engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the widget layer:
//! geometry, the paint model, the recorded draw stream, host platform
//! capability levels and the alarm scheduling helper.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod platform;
pub mod scene;
pub mod time;
