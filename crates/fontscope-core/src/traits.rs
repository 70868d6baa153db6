use crate::font::{StyleSpec, Typeface};

/// Host font enumeration and lookup
///
/// Implementations treat the host catalog as read-only. Lookups never fail:
/// an unknown family resolves to whatever the host substitutes, and the
/// returned [`Typeface::matched_name`] says which family that was.
pub trait FontCatalogProvider {
    /// All typeface (family) names the host exposes
    fn typeface_names(&self) -> Vec<String>;

    /// Face names for one family, in host order; empty for unknown families
    fn styles_for(&self, typeface: &str) -> Vec<String>;

    /// Typeface handle for a family and style
    fn typeface(&self, name: &str, style: &StyleSpec) -> Typeface;
}

/// Host display surface that can switch rendering engines
///
/// `Surface` is the identity of the native surface currently backing the
/// owning window. It is compared on every structural change and never
/// cached past one.
pub trait DisplaySurfaceProvider {
    type Surface: Clone + PartialEq;

    /// Surface currently attached to the owning window, if any
    fn current_surface(&self) -> Option<Self::Surface>;

    /// Engine names the surface can use, in host order
    fn available_rendering_engines(&self, surface: &Self::Surface) -> Vec<String>;

    /// Switch the surface to the engine at `index` of its engine list
    fn set_rendering_engine(&mut self, surface: &Self::Surface, index: usize) -> Result<(), BackendError>;

    /// Drop whatever engine state is tied to the current surface
    fn release_rendering_engine(&mut self) {}
}

/// Error types for backend operations
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Rendering error: {0}")]
    Rendering(String),
}
