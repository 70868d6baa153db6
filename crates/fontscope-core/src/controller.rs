//! Selection controller
//!
//! UI toolkits translate their widget signals into [`UiEvent`]s and feed them
//! to [`Controller::handle`]. The controller owns the current selection and
//! answers with a [`ViewUpdate`] describing what the view has to show; it
//! never touches widgets itself.

use tracing::debug;

use crate::config::{DemoConfig, StyleMode};
use crate::engine::{EngineSelector, EngineUpdate};
use crate::font::resolver::{FontResolver, ResolvedFont};
use crate::font::size::parse_point_size;
use crate::font::{default_style, StyleSpec};
use crate::traits::{DisplaySurfaceProvider, FontCatalogProvider};

/// User or host events the controller reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    TypefaceChanged(String),
    StyleChanged(String),
    /// Raw text of the size entry
    SizeChanged(String),
    EngineSelected(i64),
    /// The window's native surface was created or replaced
    SurfaceAttached,
    /// The window's native surface is about to be destroyed
    SurfaceDetached,
    SampleTextChanged(String),
}

/// Current dropdown and entry state
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub typeface: String,
    pub style: StyleSpec,
    pub size_text: String,
}

/// Replacement contents for a list widget
#[derive(Debug, Clone, PartialEq)]
pub struct ListUpdate {
    pub items: Vec<String>,
    pub selected: Option<usize>,
}

/// Everything the view must change after an event
///
/// `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewUpdate {
    pub typefaces: Option<ListUpdate>,
    pub styles: Option<ListUpdate>,
    pub size_text: Option<String>,
    pub engines: Option<ListUpdate>,
    pub engine_index: Option<usize>,
    pub font: Option<ResolvedFont>,
    pub metrics_text: Option<String>,
    pub sample_text: Option<String>,
}

impl ViewUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ViewUpdate::default()
    }

    /// True when the preview has to be drawn again
    pub fn needs_redraw(&self) -> bool {
        self.font.is_some() || self.engines.is_some() || self.engine_index.is_some() || self.sample_text.is_some()
    }
}

pub struct Controller<C: FontCatalogProvider, P: DisplaySurfaceProvider> {
    resolver: FontResolver<C>,
    selector: EngineSelector<P>,
    config: DemoConfig,
    selection: Selection,
    font: Option<ResolvedFont>,
    sample_text: String,
}

impl<C: FontCatalogProvider, P: DisplaySurfaceProvider> Controller<C, P> {
    pub fn new(resolver: FontResolver<C>, selector: EngineSelector<P>, config: DemoConfig) -> Self {
        let selection = Selection {
            typeface: config.default_typeface.clone(),
            style: StyleSpec::plain(),
            size_text: config.default_size_text(),
        };
        Self {
            resolver,
            selector,
            config,
            selection,
            font: None,
            sample_text: String::new(),
        }
    }

    pub fn resolver(&self) -> &FontResolver<C> {
        &self.resolver
    }

    pub fn selector(&self) -> &EngineSelector<P> {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut EngineSelector<P> {
        &mut self.selector
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn font(&self) -> Option<&ResolvedFont> {
        self.font.as_ref()
    }

    pub fn sample_text(&self) -> &str {
        &self.sample_text
    }

    /// Populate the lists and resolve the startup font
    ///
    /// The configured default typeface is selected when the catalog lists
    /// it; otherwise the first typeface is.
    pub fn initialize(&mut self) -> ViewUpdate {
        let mut update = ViewUpdate::default();

        let names = self.resolver.typeface_names();
        let default = &self.config.default_typeface;
        let index = names.iter().position(|n| n.eq_ignore_ascii_case(default));
        let selected = match index {
            Some(i) => Some(i),
            None if !names.is_empty() => Some(0),
            None => None,
        };
        let typeface = selected
            .and_then(|i| names.get(i).cloned())
            .unwrap_or_else(|| default.clone());
        debug!("Initial typeface {:?} out of {} families", typeface, names.len());

        update.typefaces = Some(ListUpdate { items: names, selected });
        update.styles = self.select_typeface(typeface);
        self.selection.size_text = self.config.default_size_text();
        update.size_text = Some(self.selection.size_text.clone());
        self.refresh_font(&mut update);
        update
    }

    /// Apply one event to the selection
    pub fn handle(&mut self, event: UiEvent) -> ViewUpdate {
        let mut update = ViewUpdate::default();

        match event {
            UiEvent::TypefaceChanged(name) => {
                update.styles = self.select_typeface(name);
                self.refresh_font(&mut update);
            }
            UiEvent::StyleChanged(style) => {
                if self.config.style_mode == StyleMode::Named {
                    self.selection.style = StyleSpec::Named(style);
                    self.refresh_font(&mut update);
                }
            }
            UiEvent::SizeChanged(text) => {
                self.selection.size_text = text;
                self.refresh_font(&mut update);
            }
            UiEvent::EngineSelected(index) => {
                update.engine_index = Some(self.selector.select_engine(index));
            }
            UiEvent::SurfaceAttached => {
                if self.selector.update_surface() == EngineUpdate::ListChanged {
                    update.engines = Some(self.engine_list());
                }
            }
            UiEvent::SurfaceDetached => {
                self.selector.detach_surface();
                update.engines = Some(self.engine_list());
            }
            UiEvent::SampleTextChanged(text) => {
                self.sample_text = text.clone();
                update.sample_text = Some(text);
            }
        }

        update
    }

    /// Switch typeface; in named mode the style list is reloaded and its
    /// first entry selected
    fn select_typeface(&mut self, name: String) -> Option<ListUpdate> {
        self.selection.typeface = name;

        match self.config.style_mode {
            StyleMode::Plain => {
                self.selection.style = StyleSpec::plain();
                None
            }
            StyleMode::Named => {
                let styles = self.resolver.styles_for(&self.selection.typeface);
                self.selection.style = match default_style(&styles) {
                    Some(first) => StyleSpec::named(first),
                    None => StyleSpec::plain(),
                };
                let selected = if styles.is_empty() { None } else { Some(0) };
                Some(ListUpdate { items: styles, selected })
            }
        }
    }

    fn refresh_font(&mut self, update: &mut ViewUpdate) {
        let size = parse_point_size(&self.selection.size_text);
        let font = self.resolver.resolve(&self.selection.typeface, &self.selection.style, size);
        update.metrics_text = Some(font.report().to_string());
        update.font = Some(font.clone());
        self.font = Some(font);
    }

    fn engine_list(&self) -> ListUpdate {
        let items = self.selector.current_engine_list().to_vec();
        let selected = if items.is_empty() {
            None
        } else {
            Some(self.selector.selected_index())
        };
        ListUpdate { items, selected }
    }
}
