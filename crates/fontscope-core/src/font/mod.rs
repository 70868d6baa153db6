//! Typeface handles, style selection, and resolved fonts

pub mod resolver;
pub mod size;

/// Font weight variants for the plain/bold/italic style flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Font slant variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSlant {
    Normal,
    Italic,
}

/// How a face within a family is picked
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleSpec {
    /// Host face name such as "Regular" or "Bold Italic"
    Named(String),
    /// Weight and slant flags, matched by the host
    Flags { weight: FontWeight, slant: FontSlant },
}

impl StyleSpec {
    pub fn plain() -> Self {
        StyleSpec::Flags {
            weight: FontWeight::Normal,
            slant: FontSlant::Normal,
        }
    }

    pub fn named(name: &str) -> Self {
        StyleSpec::Named(name.to_string())
    }

    /// Human-readable label used in logs and the metrics panel
    pub fn label(&self) -> String {
        match self {
            StyleSpec::Named(name) => name.clone(),
            StyleSpec::Flags { weight, slant } => match (weight, slant) {
                (FontWeight::Normal, FontSlant::Normal) => "Plain".to_string(),
                (FontWeight::Bold, FontSlant::Normal) => "Bold".to_string(),
                (FontWeight::Normal, FontSlant::Italic) => "Italic".to_string(),
                (FontWeight::Bold, FontSlant::Italic) => "Bold Italic".to_string(),
            },
        }
    }
}

/// Typeface handle returned by a font catalog
///
/// Ascent and descent are normalised so that `ascent + descent == 1.0` in
/// units of font height. `height_to_points` converts a height into the
/// typeface's em (point) size.
#[derive(Debug, Clone, PartialEq)]
pub struct Typeface {
    /// Family name that was asked for
    pub requested_name: String,
    /// Family name the host actually used
    pub matched_name: String,
    pub style: StyleSpec,
    pub height_to_points: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl Typeface {
    /// True when the host substituted another family for the requested one
    pub fn is_substituted(&self) -> bool {
        !self.requested_name.eq_ignore_ascii_case(&self.matched_name)
    }
}

/// First style in host order; the one selected after a typeface change
pub fn default_style(styles: &[String]) -> Option<&str> {
    styles.first().map(String::as_str)
}
