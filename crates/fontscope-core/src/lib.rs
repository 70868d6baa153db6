//! FontScope Core - toolkit-agnostic font metric inspection
//!
//! This crate resolves fonts against a host font catalog, reports their
//! metrics, and tracks which rendering engine a display surface uses.
//! All host access goes through the capability traits in [`traits`], so
//! the same logic runs against GTK or the dummy backend used in tests.

pub mod config;
pub mod constants;
pub mod controller;
pub mod dummy_backend;
pub mod engine;
pub mod error;
pub mod font;
pub mod sample_text;
pub mod traits;

// Re-export main types
pub use config::{DemoConfig, FontDefaults, StyleMode};
pub use controller::{Controller, ListUpdate, Selection, UiEvent, ViewUpdate};
pub use engine::{clamp_engine_index, EngineSelector, EngineUpdate};
pub use error::{FontScopeError, FontScopeResult};
pub use font::resolver::{FontResolver, MetricsReport, ResolvedFont};
pub use font::size::parse_point_size;
pub use font::{FontSlant, FontWeight, StyleSpec, Typeface};
pub use sample_text::{load_sample_text, sample_text_path};

// Re-export traits and types
pub use traits::*;
