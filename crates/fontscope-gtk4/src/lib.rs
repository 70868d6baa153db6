//! FontScope GTK4 - GTK4 backend for fontscope-core
//!
//! This crate implements the fontscope-core capability traits on top of
//! GTK4: Pango provides the font catalog, GSK renderers are the selectable
//! rendering engines, and [`FontScopeWidget`] wires the widgets to the
//! selection controller.

mod backend;
pub mod catalog;
pub mod guides;
pub mod preview;
pub mod surface;
pub mod system_font;
mod widget;

pub use backend::Gtk4Backend;
pub use catalog::PangoFontCatalog;
pub use surface::GskSurfaceProvider;
pub use widget::FontScopeWidget;

// Re-export fontscope-core types for convenience
pub use fontscope_core::*;
