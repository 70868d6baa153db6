//! Cairo metric guides: ascent, baseline and descent lines around a specimen

use cairo::{Context, FontSlant, FontWeight};
use fontscope_core::{FontSlant as StyleSlant, FontWeight as StyleWeight, ResolvedFont, StyleSpec};

const SPECIMEN: &str = "Hxgy";

/// What the guide strip needs to know about the current font
#[derive(Debug, Clone, PartialEq)]
pub struct MetricGuide {
    pub family: String,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub ascent: f64,
    pub descent: f64,
    pub point_height: f64,
}

impl MetricGuide {
    pub fn from_font(font: &ResolvedFont) -> Self {
        let (weight, slant) = match font.style() {
            StyleSpec::Flags { weight, slant } => (
                match weight {
                    StyleWeight::Normal => FontWeight::Normal,
                    StyleWeight::Bold => FontWeight::Bold,
                },
                match slant {
                    StyleSlant::Normal => FontSlant::Normal,
                    StyleSlant::Italic => FontSlant::Italic,
                },
            ),
            // Cairo's toy API only knows weight and slant
            StyleSpec::Named(face) => {
                let face = face.to_lowercase();
                let weight = if face.contains("bold") || face.contains("black") || face.contains("heavy") {
                    FontWeight::Bold
                } else {
                    FontWeight::Normal
                };
                let slant = if face.contains("italic") {
                    FontSlant::Italic
                } else if face.contains("oblique") {
                    FontSlant::Oblique
                } else {
                    FontSlant::Normal
                };
                (weight, slant)
            }
        };

        MetricGuide {
            family: font.matched_name().to_string(),
            weight,
            slant,
            ascent: f64::from(font.ascent()),
            descent: f64::from(font.descent()),
            point_height: f64::from(font.point_height()),
        }
    }

    /// Scale that fits the full line height into `height` pixels
    pub fn fit_scale(&self, height: f64) -> f64 {
        let line = self.ascent + self.descent;
        if line <= 0.0 || height <= 0.0 {
            return 1.0;
        }
        (height / line).min(1.0)
    }

    /// Draw the specimen and its guide lines into a `width` x `height` area
    pub fn draw(&self, cr: &Context, width: f64, height: f64) -> Result<(), cairo::Error> {
        cr.set_source_rgb(1.0, 1.0, 1.0);
        cr.paint()?;

        let scale = self.fit_scale(height - 4.0);
        let ascent = self.ascent * scale;
        let descent = self.descent * scale;
        let top = ((height - ascent - descent) / 2.0).max(0.0);
        let baseline = top + ascent;

        cr.set_line_width(1.0);
        // ascent, baseline, descent
        for (y, (r, g, b)) in [
            (top, (0.2, 0.4, 0.9)),
            (baseline, (0.9, 0.2, 0.2)),
            (baseline + descent, (0.2, 0.7, 0.3)),
        ] {
            cr.set_source_rgb(r, g, b);
            cr.move_to(0.0, y.round() + 0.5);
            cr.line_to(width, y.round() + 0.5);
            cr.stroke()?;
        }

        cr.select_font_face(&self.family, self.slant, self.weight);
        cr.set_font_size(self.point_height * scale);
        cr.set_source_rgb(0.0, 0.0, 0.0);
        cr.move_to(8.0, baseline);
        cr.show_text(SPECIMEN)?;

        Ok(())
    }
}
