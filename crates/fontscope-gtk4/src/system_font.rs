//! System default UI font lookup

use tracing::debug;

/// Family of the desktop's configured UI font
///
/// Reads the `gtk-font-name` setting (e.g. "Cantarell 11") and keeps only
/// the family part.
pub fn default_sans_serif_typeface() -> Option<String> {
    let settings = gtk4::Settings::default()?;
    let font_name = settings.gtk_font_name()?;
    let desc = pango::FontDescription::from_string(&font_name);
    let family = first_family(desc.family()?.as_str())?;
    debug!("DefaultSansSerifTypefaceName={:?}", family);
    Some(family)
}

/// First entry of a comma-separated family list
fn first_family(families: &str) -> Option<String> {
    families
        .split(',')
        .map(str::trim)
        .find(|f| !f.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_family() {
        assert_eq!(first_family("Cantarell").as_deref(), Some("Cantarell"));
        assert_eq!(first_family(" Noto Sans, Sans").as_deref(), Some("Noto Sans"));
        assert_eq!(first_family(",Sans").as_deref(), Some("Sans"));
        assert_eq!(first_family(" , "), None);
    }
}
