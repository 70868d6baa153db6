//! FontScope - font metric inspection for GTK4
//!
//! This crate provides the application shell:
//! - Window construction around [`FontScopeWidget`]
//! - System default font and colour scheme setup
//! - Re-exports of the GTK backend and core types

pub mod window;

// Re-export main types for convenience
pub use fontscope_gtk4::*;
pub use window::{build_window, APP_ID, APP_TITLE};
