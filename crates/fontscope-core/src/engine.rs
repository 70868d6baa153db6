//! Rendering-engine selection for a display surface
//!
//! Engine lists belong to one surface. Whenever the surface behind the
//! owning window changes, the list is queried again and the selected index
//! is clamped into the new list.

use tracing::{debug, info, warn};

use crate::traits::DisplaySurfaceProvider;

/// Clamp a requested engine index into a list of `count` engines
///
/// An empty list always yields index 0.
pub fn clamp_engine_index(index: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let last = i64::try_from(count - 1).unwrap_or(i64::MAX);
    // Result lies in 0..count, so it fits in usize
    index.clamp(0, last) as usize
}

/// Outcome of re-reading the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineUpdate {
    /// Same surface as before; list and selection untouched
    Unchanged,
    /// Surface changed; the engine list was re-queried
    ListChanged,
}

/// Tracks the engine list of the current surface and the selected engine
pub struct EngineSelector<P: DisplaySurfaceProvider> {
    provider: P,
    surface: Option<P::Surface>,
    engines: Vec<String>,
    index: usize,
}

impl<P: DisplaySurfaceProvider> EngineSelector<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            surface: None,
            engines: Vec::new(),
            index: 0,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn current_engine_list(&self) -> &[String] {
        &self.engines
    }

    pub fn selected_index(&self) -> usize {
        self.index
    }

    pub fn selected_engine(&self) -> Option<&str> {
        self.engines.get(self.index).map(String::as_str)
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Select an engine, clamping `index` into the current list
    ///
    /// Returns the index that was applied. Without a surface or engines the
    /// index is recorded but nothing is applied.
    pub fn select_engine(&mut self, index: i64) -> usize {
        self.index = clamp_engine_index(index, self.engines.len());

        if let Some(surface) = &self.surface {
            if self.engines.is_empty() {
                debug!("No rendering engines available on the current surface");
            } else {
                match self.provider.set_rendering_engine(surface, self.index) {
                    Ok(()) => debug!("renderingengine={:?}", self.engines[self.index]),
                    Err(e) => warn!("Failed to apply rendering engine {:?}: {}", self.engines[self.index], e),
                }
            }
        }

        self.index
    }

    /// Re-read the surface from the provider after a structural change
    pub fn update_surface(&mut self) -> EngineUpdate {
        let surface = self.provider.current_surface();
        if surface == self.surface {
            return EngineUpdate::Unchanged;
        }

        if self.surface.is_some() {
            self.provider.release_rendering_engine();
        }

        self.engines = match &surface {
            Some(s) => self.provider.available_rendering_engines(s),
            None => Vec::new(),
        };
        self.surface = surface;
        info!("Surface changed, {} rendering engine(s) available", self.engines.len());

        // Reclamp and re-apply the previous choice
        self.select_engine(self.index as i64);
        EngineUpdate::ListChanged
    }

    /// Forget the surface before the host destroys it
    pub fn detach_surface(&mut self) {
        if self.surface.take().is_some() {
            self.provider.release_rendering_engine();
        }
        self.engines.clear();
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_backend::DummySurfaceProvider;
    use rand::Rng;

    fn two_engines() -> Vec<String> {
        vec!["engine_a".to_string(), "engine_b".to_string()]
    }

    #[test]
    fn test_clamp_matches_definition() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let index: i64 = rng.random_range(-1000..1000);
            let count: usize = rng.random_range(0..50);
            let expected = if count == 0 {
                0
            } else {
                index.max(0).min(count as i64 - 1) as usize
            };
            assert_eq!(clamp_engine_index(index, count), expected);
        }
        assert_eq!(clamp_engine_index(i64::MIN, 3), 0);
        assert_eq!(clamp_engine_index(i64::MAX, 3), 2);
    }

    #[test]
    fn test_empty_list_forces_zero() {
        let mut selector = EngineSelector::new(DummySurfaceProvider::new());
        assert_eq!(selector.select_engine(5), 0);
        assert!(selector.provider().applied().is_empty());
    }

    #[test]
    fn test_out_of_range_indices_clamp() {
        let provider = DummySurfaceProvider::new().with_surface(1, two_engines());
        let mut selector = EngineSelector::new(provider);
        assert_eq!(selector.update_surface(), EngineUpdate::ListChanged);

        assert_eq!(selector.select_engine(-1), 0);
        assert_eq!(selector.select_engine(10), 1);
        assert_eq!(selector.selected_engine(), Some("engine_b"));
        assert_eq!(selector.provider().applied().last(), Some(&(1, 1)));
    }

    #[test]
    fn test_same_surface_is_not_requeried() {
        let provider = DummySurfaceProvider::new().with_surface(1, two_engines());
        let mut selector = EngineSelector::new(provider);
        selector.update_surface();
        let queries = selector.provider().queries();

        assert_eq!(selector.update_surface(), EngineUpdate::Unchanged);
        assert_eq!(selector.provider().queries(), queries);
    }

    #[test]
    fn test_new_surface_reclamps_previous_index() {
        let engines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let provider = DummySurfaceProvider::new().with_surface(1, engines);
        let mut selector = EngineSelector::new(provider);
        selector.update_surface();
        selector.select_engine(2);

        selector.provider_mut().attach(2, vec!["only".to_string()]);
        assert_eq!(selector.update_surface(), EngineUpdate::ListChanged);

        assert_eq!(selector.current_engine_list(), ["only".to_string()]);
        assert_eq!(selector.selected_index(), 0);
        assert_eq!(selector.provider().applied().last(), Some(&(2, 0)));
        assert_eq!(selector.provider().releases(), 1);
    }

    #[test]
    fn test_losing_the_surface_empties_the_list() {
        let provider = DummySurfaceProvider::new().with_surface(1, two_engines());
        let mut selector = EngineSelector::new(provider);
        selector.update_surface();
        selector.select_engine(1);

        selector.provider_mut().detach();
        assert_eq!(selector.update_surface(), EngineUpdate::ListChanged);

        assert!(selector.current_engine_list().is_empty());
        assert_eq!(selector.selected_index(), 0);
        assert!(!selector.has_surface());
    }

    #[test]
    fn test_detach_releases_engine() {
        let provider = DummySurfaceProvider::new().with_surface(1, two_engines());
        let mut selector = EngineSelector::new(provider);
        selector.update_surface();

        selector.detach_surface();

        assert_eq!(selector.provider().releases(), 1);
        assert!(selector.current_engine_list().is_empty());
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn test_apply_failure_keeps_selection() {
        let provider = DummySurfaceProvider::new()
            .with_surface(1, two_engines())
            .with_failing_apply();
        let mut selector = EngineSelector::new(provider);
        selector.update_surface();

        assert_eq!(selector.select_engine(1), 1);
        assert!(selector.provider().applied().is_empty());
    }
}
