//! Pango-backed font catalog

use fontscope_core::{FontCatalogProvider, FontSlant, FontWeight, ResolvedFont, StyleSpec, Typeface};
use gtk4::prelude::*;
use pango::prelude::*;
use tracing::{debug, warn};

/// Absolute size (pixels) at which typeface metrics are sampled
const REFERENCE_PIXEL_SIZE: f64 = 100.0;

/// Largest em size handed to Pango; its sizes are `int`s in `pango::SCALE` units
pub const MAX_EM_PIXELS: f64 = 4096.0;

/// Normalised metrics used when Pango reports an empty face
const FALLBACK_METRICS: (f32, f32, f32) = (1.0, 0.8, 0.2);

/// Font catalog over the families of a Pango context
pub struct PangoFontCatalog {
    context: pango::Context,
}

impl PangoFontCatalog {
    pub fn new(context: pango::Context) -> Self {
        PangoFontCatalog { context }
    }

    /// Catalog using the Pango context of a widget
    pub fn for_widget(widget: &impl IsA<gtk4::Widget>) -> Self {
        Self::new(widget.pango_context())
    }

    fn family(&self, name: &str) -> Option<pango::FontFamily> {
        self.context
            .list_families()
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    fn face(&self, family: &str, face_name: &str) -> Option<pango::FontFace> {
        self.family(family)?
            .list_faces()
            .into_iter()
            .find(|face| face.face_name().eq_ignore_ascii_case(face_name))
    }

    /// Description for a family and style with an em size in pixels
    ///
    /// The em size is clamped to `0..=MAX_EM_PIXELS`.
    pub fn font_description(&self, typeface: &str, style: &StyleSpec, em_pixels: f64) -> pango::FontDescription {
        let mut desc = match style {
            StyleSpec::Named(face_name) => match self.face(typeface, face_name) {
                Some(face) => face.describe(),
                None => {
                    let mut desc = pango::FontDescription::new();
                    desc.set_family(typeface);
                    desc
                }
            },
            StyleSpec::Flags { weight, slant } => {
                let mut desc = pango::FontDescription::new();
                desc.set_family(typeface);
                desc.set_weight(match weight {
                    FontWeight::Normal => pango::Weight::Normal,
                    FontWeight::Bold => pango::Weight::Bold,
                });
                desc.set_style(match slant {
                    FontSlant::Normal => pango::Style::Normal,
                    FontSlant::Italic => pango::Style::Italic,
                });
                desc
            }
        };
        desc.set_absolute_size(pango_absolute_size(em_pixels));
        desc
    }

    /// Description matching a resolved font, sized to its point height
    pub fn description_for(&self, font: &ResolvedFont) -> pango::FontDescription {
        self.font_description(font.typeface_name(), font.style(), f64::from(font.point_height()))
    }
}

impl FontCatalogProvider for PangoFontCatalog {
    fn typeface_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .context
            .list_families()
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        names.sort_by_key(|n| n.to_lowercase());
        names.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        debug!("Pango lists {} font families", names.len());
        names
    }

    fn styles_for(&self, typeface: &str) -> Vec<String> {
        self.family(typeface)
            .map(|family| {
                family
                    .list_faces()
                    .iter()
                    .map(|face| face.face_name().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn typeface(&self, name: &str, style: &StyleSpec) -> Typeface {
        let desc = self.font_description(name, style, REFERENCE_PIXEL_SIZE);

        let matched_name = self
            .context
            .load_font(&desc)
            .and_then(|font| font.describe().family())
            .map(|family| family.to_string())
            .unwrap_or_else(|| name.to_string());

        let metrics = self.context.metrics(Some(&desc), None);
        let scale = f64::from(pango::SCALE);
        let ascent_px = f64::from(metrics.ascent()) / scale;
        let descent_px = f64::from(metrics.descent()) / scale;

        let (height_to_points, ascent, descent) = typeface_metrics(ascent_px, descent_px).unwrap_or_else(|| {
            warn!("Pango reported empty metrics for {:?} ({})", name, style.label());
            FALLBACK_METRICS
        });

        Typeface {
            requested_name: name.to_string(),
            matched_name,
            style: style.clone(),
            height_to_points,
            ascent,
            descent,
        }
    }
}

/// Em size in Pango units, clamped to `0..=MAX_EM_PIXELS` pixels
fn pango_absolute_size(em_pixels: f64) -> f64 {
    let em = if em_pixels.is_finite() {
        em_pixels.clamp(0.0, MAX_EM_PIXELS)
    } else {
        0.0
    };
    em * f64::from(pango::SCALE)
}

/// Scale factor and normalised ascent/descent from metrics sampled at
/// `REFERENCE_PIXEL_SIZE`
///
/// Returns `None` when the sampled line height is empty or not finite.
fn typeface_metrics(ascent_px: f64, descent_px: f64) -> Option<(f32, f32, f32)> {
    let height = ascent_px + descent_px;
    if !height.is_finite() || height <= 0.0 {
        return None;
    }
    Some((
        (REFERENCE_PIXEL_SIZE / height) as f32,
        (ascent_px / height) as f32,
        (descent_px / height) as f32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_em_size_is_clamped_for_pango() {
        let scale = f64::from(pango::SCALE);
        assert_eq!(pango_absolute_size(12.0), 12.0 * scale);
        assert_eq!(pango_absolute_size(1e9), MAX_EM_PIXELS * scale);
        assert_eq!(pango_absolute_size(-3.0), 0.0);
        assert_eq!(pango_absolute_size(f64::NAN), 0.0);
        assert_eq!(pango_absolute_size(f64::INFINITY), 0.0);
        assert!(pango_absolute_size(1e9) <= f64::from(i32::MAX));
    }

    #[test]
    fn test_metrics_normalised_to_line_height() {
        let (scale, ascent, descent) = typeface_metrics(93.0, 32.0).unwrap();
        assert!((scale - 0.8).abs() < 1e-6);
        assert!((ascent - 0.744).abs() < 1e-6);
        assert!((descent - 0.256).abs() < 1e-6);
        assert!((ascent + descent - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_metrics_are_rejected() {
        assert_eq!(typeface_metrics(0.0, 0.0), None);
        assert_eq!(typeface_metrics(-5.0, 2.0), None);
        assert_eq!(typeface_metrics(f64::NAN, 20.0), None);
        assert_eq!(FALLBACK_METRICS.1 + FALLBACK_METRICS.2, 1.0);
    }
}
