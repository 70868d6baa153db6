//! GSK renderers as selectable rendering engines

use std::cell::RefCell;

use fontscope_core::{BackendError, DisplaySurfaceProvider};
use gtk4::prelude::*;
use gtk4::{gdk, gsk};
use tracing::{debug, info};

fn cairo_renderer() -> gsk::Renderer {
    gsk::CairoRenderer::new().upcast()
}

fn gl_renderer() -> gsk::Renderer {
    gsk::GLRenderer::new().upcast()
}

/// Renderers offered on every surface, in display order
const CANDIDATES: [(&str, fn() -> gsk::Renderer); 2] = [("Cairo", cairo_renderer), ("OpenGL", gl_renderer)];

struct ActiveRenderer {
    name: &'static str,
    renderer: gsk::Renderer,
}

/// Surface provider for the native surface of a GTK window
///
/// An engine is available when its renderer realizes on the surface.
/// The selected renderer stays realized and draws the preview.
pub struct GskSurfaceProvider {
    window: glib::WeakRef<gtk4::Window>,
    /// Candidate indices that realized on the last queried surface
    available: RefCell<Vec<usize>>,
    active: Option<ActiveRenderer>,
}

impl GskSurfaceProvider {
    pub fn new(window: &impl IsA<gtk4::Window>) -> Self {
        GskSurfaceProvider {
            window: window.upcast_ref::<gtk4::Window>().downgrade(),
            available: RefCell::new(Vec::new()),
            active: None,
        }
    }

    /// Renderer of the selected engine, realized on the current surface
    pub fn active_renderer(&self) -> Option<&gsk::Renderer> {
        self.active.as_ref().map(|a| &a.renderer)
    }

    pub fn active_engine_name(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.name)
    }

    fn probe(surface: &gdk::Surface, name: &str, create: fn() -> gsk::Renderer) -> bool {
        let renderer = create();
        match renderer.realize(Some(surface)) {
            Ok(()) => {
                renderer.unrealize();
                true
            }
            Err(e) => {
                debug!("Renderer {} unavailable: {}", name, e);
                false
            }
        }
    }
}

impl DisplaySurfaceProvider for GskSurfaceProvider {
    type Surface = gdk::Surface;

    fn current_surface(&self) -> Option<gdk::Surface> {
        self.window.upgrade()?.surface()
    }

    fn available_rendering_engines(&self, surface: &gdk::Surface) -> Vec<String> {
        let available: Vec<usize> = CANDIDATES
            .iter()
            .enumerate()
            .filter(|(_, (name, create))| Self::probe(surface, name, *create))
            .map(|(i, _)| i)
            .collect();
        let names = available.iter().map(|&i| CANDIDATES[i].0.to_string()).collect();
        *self.available.borrow_mut() = available;
        names
    }

    fn set_rendering_engine(&mut self, surface: &gdk::Surface, index: usize) -> Result<(), BackendError> {
        let candidate = self
            .available
            .borrow()
            .get(index)
            .copied()
            .ok_or_else(|| BackendError::Rendering(format!("no rendering engine at index {}", index)))?;
        let (name, create) = CANDIDATES[candidate];

        if self.active_engine_name() == Some(name) {
            return Ok(());
        }
        self.release_rendering_engine();

        let renderer = create();
        renderer
            .realize(Some(surface))
            .map_err(|e| BackendError::Rendering(format!("{}: {}", name, e)))?;
        info!("Rendering engine {} realized", name);
        self.active = Some(ActiveRenderer { name, renderer });
        Ok(())
    }

    fn release_rendering_engine(&mut self) {
        if let Some(active) = self.active.take() {
            debug!("Releasing rendering engine {}", active.name);
            active.renderer.unrealize();
        }
    }
}
