//! Dummy backend for exercising the core without a windowing toolkit

use std::cell::Cell;

use crate::font::{StyleSpec, Typeface};
use crate::traits::{BackendError, DisplaySurfaceProvider, FontCatalogProvider};

struct DummyFamily {
    name: String,
    styles: Vec<String>,
    height_to_points: f32,
    ascent: f32,
}

/// In-memory font catalog with fixed metrics
pub struct DummyFontCatalog {
    families: Vec<DummyFamily>,
}

impl Default for DummyFontCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyFontCatalog {
    /// Family returned for names the catalog does not know
    pub const FALLBACK_TYPEFACE: &'static str = "DejaVu Sans";

    /// Catalog with a few common Linux families
    pub fn new() -> Self {
        DummyFontCatalog { families: Vec::new() }
            .with_typeface("Cantarell", &["Regular", "Bold"], 0.83, 0.79)
            .with_typeface(
                Self::FALLBACK_TYPEFACE,
                &["Book", "Bold", "Oblique", "Bold Oblique"],
                0.86,
                0.76,
            )
            .with_typeface("Noto Serif", &["Regular", "Italic", "Bold"], 0.73, 0.78)
    }

    /// Catalog without any families; every lookup falls back
    pub fn empty() -> Self {
        DummyFontCatalog { families: Vec::new() }
    }

    /// Add or replace a family; descent is `1.0 - ascent`
    pub fn with_typeface(mut self, name: &str, styles: &[&str], height_to_points: f32, ascent: f32) -> Self {
        self.families.retain(|f| !f.name.eq_ignore_ascii_case(name));
        self.families.push(DummyFamily {
            name: name.to_string(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
            height_to_points,
            ascent,
        });
        self
    }

    fn find(&self, name: &str) -> Option<&DummyFamily> {
        self.families.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

impl FontCatalogProvider for DummyFontCatalog {
    fn typeface_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.families.iter().map(|f| f.name.clone()).collect();
        names.sort_by_key(|n| n.to_lowercase());
        names
    }

    fn styles_for(&self, typeface: &str) -> Vec<String> {
        self.find(typeface).map(|f| f.styles.clone()).unwrap_or_default()
    }

    fn typeface(&self, name: &str, style: &StyleSpec) -> Typeface {
        let family = self.find(name).or_else(|| self.find(Self::FALLBACK_TYPEFACE));
        match family {
            Some(family) => Typeface {
                requested_name: name.to_string(),
                matched_name: family.name.clone(),
                style: style.clone(),
                height_to_points: family.height_to_points,
                ascent: family.ascent,
                descent: 1.0 - family.ascent,
            },
            None => Typeface {
                requested_name: name.to_string(),
                matched_name: Self::FALLBACK_TYPEFACE.to_string(),
                style: style.clone(),
                height_to_points: 1.0,
                ascent: 0.8,
                descent: 0.2,
            },
        }
    }
}

/// Surface provider that records operations for testing
#[derive(Default)]
pub struct DummySurfaceProvider {
    current: Option<u32>,
    engines: Vec<(u32, Vec<String>)>,
    applied: Vec<(u32, usize)>,
    queries: Cell<usize>,
    releases: usize,
    fail_apply: bool,
}

impl DummySurfaceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with surface `id` attached
    pub fn with_surface(mut self, id: u32, engines: Vec<String>) -> Self {
        self.attach(id, engines);
        self
    }

    /// Make every engine switch fail
    pub fn with_failing_apply(mut self) -> Self {
        self.fail_apply = true;
        self
    }

    /// Attach surface `id`, replacing the current one
    pub fn attach(&mut self, id: u32, engines: Vec<String>) {
        self.engines.retain(|(s, _)| *s != id);
        self.engines.push((id, engines));
        self.current = Some(id);
    }

    pub fn detach(&mut self) {
        self.current = None;
    }

    /// Every (surface, index) pair applied so far
    pub fn applied(&self) -> &[(u32, usize)] {
        &self.applied
    }

    /// Number of engine-list queries
    pub fn queries(&self) -> usize {
        self.queries.get()
    }

    pub fn releases(&self) -> usize {
        self.releases
    }
}

impl DisplaySurfaceProvider for DummySurfaceProvider {
    type Surface = u32;

    fn current_surface(&self) -> Option<u32> {
        self.current
    }

    fn available_rendering_engines(&self, surface: &u32) -> Vec<String> {
        self.queries.set(self.queries.get() + 1);
        self.engines
            .iter()
            .find(|(s, _)| s == surface)
            .map(|(_, e)| e.clone())
            .unwrap_or_default()
    }

    fn set_rendering_engine(&mut self, surface: &u32, index: usize) -> Result<(), BackendError> {
        if self.fail_apply {
            return Err(BackendError::Rendering(format!("engine {} rejected", index)));
        }
        self.applied.push((*surface, index));
        Ok(())
    }

    fn release_rendering_engine(&mut self) {
        self.releases += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_sorted() {
        let catalog = DummyFontCatalog::new().with_typeface("arial", &["Regular"], 0.76, 0.8);
        assert_eq!(
            catalog.typeface_names(),
            vec!["arial", "Cantarell", "DejaVu Sans", "Noto Serif"]
        );
    }

    #[test]
    fn test_empty_catalog_still_answers() {
        let catalog = DummyFontCatalog::empty();
        assert!(catalog.typeface_names().is_empty());
        assert!(catalog.styles_for("Anything").is_empty());
        let typeface = catalog.typeface("Anything", &StyleSpec::plain());
        assert!(typeface.is_substituted());
        assert_eq!(typeface.height_to_points, 1.0);
    }
}
