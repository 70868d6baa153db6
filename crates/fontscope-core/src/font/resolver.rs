//! Font resolution against a host catalog
//!
//! A requested point height is turned into a pixel height using the
//! typeface's own height-to-points factor, so reading the point height back
//! from the resolved font reproduces the request.

use std::fmt;

use tracing::{debug, warn};

use crate::config::FontDefaults;
use crate::error::{FontScopeError, FontScopeResult};
use crate::font::{StyleSpec, Typeface};
use crate::traits::FontCatalogProvider;

/// Font resolved to a concrete pixel height
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    typeface: Typeface,
    pixel_height: f32,
}

impl ResolvedFont {
    /// Build from a typeface handle and a pixel height
    pub fn new(typeface: Typeface, pixel_height: f32) -> Self {
        Self {
            typeface,
            pixel_height,
        }
    }

    pub fn typeface(&self) -> &Typeface {
        &self.typeface
    }

    /// Family name that was asked for
    pub fn typeface_name(&self) -> &str {
        &self.typeface.requested_name
    }

    /// Family name the host actually used
    pub fn matched_name(&self) -> &str {
        &self.typeface.matched_name
    }

    pub fn style(&self) -> &StyleSpec {
        &self.typeface.style
    }

    /// Line height in pixels (ascent + descent)
    pub fn height(&self) -> f32 {
        self.pixel_height
    }

    pub fn ascent(&self) -> f32 {
        self.pixel_height * self.typeface.ascent
    }

    pub fn descent(&self) -> f32 {
        self.pixel_height * self.typeface.descent
    }

    pub fn height_to_points(&self) -> f32 {
        self.typeface.height_to_points
    }

    /// Em size in points
    pub fn point_height(&self) -> f32 {
        self.pixel_height * self.typeface.height_to_points
    }

    /// Space between the em box and the full line height
    pub fn leading(&self) -> f32 {
        self.pixel_height - self.point_height()
    }

    pub fn is_substituted(&self) -> bool {
        self.typeface.is_substituted()
    }

    pub fn report(&self) -> MetricsReport<'_> {
        MetricsReport { font: self }
    }
}

/// Multi-line metrics summary for the metrics panel
pub struct MetricsReport<'a> {
    font: &'a ResolvedFont,
}

impl fmt::Display for MetricsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let font = self.font;
        writeln!(f, "typeface: {} ({})", font.typeface_name(), font.style().label())?;
        if font.is_substituted() {
            writeln!(f, "substituted by: {}", font.matched_name())?;
        }
        writeln!(f, "height: {:.2}", font.height())?;
        writeln!(f, "ascent: {:.2}", font.ascent())?;
        writeln!(f, "descent: {:.2}", font.descent())?;
        writeln!(f, "point height: {:.2}", font.point_height())?;
        write!(f, "leading: {:.2}", font.leading())
    }
}

/// Resolves (typeface, style, point height) selections into fonts
pub struct FontResolver<C> {
    catalog: C,
    defaults: FontDefaults,
}

impl<C: FontCatalogProvider> FontResolver<C> {
    pub fn new(catalog: C, defaults: FontDefaults) -> Self {
        Self { catalog, defaults }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn defaults(&self) -> &FontDefaults {
        &self.defaults
    }

    /// Resolve a font whose point height matches `desired_point_height`
    ///
    /// Unknown families resolve to the host fallback without an error; use
    /// [`FontResolver::resolve_exact`] to detect that case.
    pub fn resolve(&self, typeface: &str, style: &StyleSpec, desired_point_height: f32) -> ResolvedFont {
        let name = if typeface.trim().is_empty() {
            self.defaults.sans_serif_typeface.as_str()
        } else {
            typeface
        };

        let mut handle = self.catalog.typeface(name, style);
        if !handle.height_to_points.is_finite() || handle.height_to_points <= 0.0 {
            warn!(
                "Typeface {:?} reported unusable height-to-points factor {}, using 1.0",
                handle.matched_name, handle.height_to_points
            );
            handle.height_to_points = 1.0;
        }

        let desired = if desired_point_height.is_finite() {
            desired_point_height.max(0.0)
        } else {
            0.0
        };
        let pixel_height = desired / handle.height_to_points;

        if handle.is_substituted() {
            warn!("Typeface {:?} not found, host substituted {:?}", name, handle.matched_name);
        }
        debug!("font={:?} height={}", handle.matched_name, pixel_height);

        ResolvedFont::new(handle, pixel_height)
    }

    /// Like [`FontResolver::resolve`], but fails when the host substituted
    /// another family for the requested one
    pub fn resolve_exact(&self, typeface: &str, style: &StyleSpec, desired_point_height: f32) -> FontScopeResult<ResolvedFont> {
        let font = self.resolve(typeface, style, desired_point_height);
        if font.is_substituted() {
            return Err(FontScopeError::TypefaceNotFound {
                requested: font.typeface_name().to_string(),
                substituted: font.matched_name().to_string(),
            });
        }
        Ok(font)
    }

    /// Styles for a family, passed through from the catalog
    pub fn styles_for(&self, typeface: &str) -> Vec<String> {
        self.catalog.styles_for(typeface)
    }

    pub fn typeface_names(&self) -> Vec<String> {
        self.catalog.typeface_names()
    }
}
