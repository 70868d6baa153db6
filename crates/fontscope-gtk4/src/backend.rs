//! GTK4 backend: owns the controller and applies its view updates

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_channel::{Receiver, Sender};
use fontscope_core::{Controller, DemoConfig, EngineSelector, FontResolver, ListUpdate, UiEvent, ViewUpdate};
use gtk4::prelude::*;
use gtk4::{gdk, DrawingArea, DropDown, Entry, Label, Picture, StringList, TextTag, TextView};
use tracing::{debug, warn};

use crate::catalog::PangoFontCatalog;
use crate::guides::MetricGuide;
use crate::preview::{preview_colors, preview_extent, render_layout, MAX_PREVIEW_EXTENT};
use crate::surface::GskSurfaceProvider;

pub(crate) type GtkController = Controller<PangoFontCatalog, GskSurfaceProvider>;

/// Widgets the backend writes to
pub(crate) struct Widgets {
    pub engine_model: StringList,
    pub engine_combo: DropDown,
    pub typeface_model: StringList,
    pub typeface_combo: DropDown,
    pub style_model: StringList,
    pub style_combo: DropDown,
    pub size_entry: Entry,
    pub editor: TextView,
    pub font_tag: TextTag,
    pub preview: Picture,
    pub metrics_label: Label,
    pub guides: DrawingArea,
}

/// Complete GTK4 backend for the selection controller
pub struct Gtk4Backend {
    controller: RefCell<GtkController>,
    widgets: Widgets,
    guide: Rc<RefCell<Option<MetricGuide>>>,
    /// Set while widgets are changed programmatically
    updating: Cell<bool>,
    event_tx: Sender<UiEvent>,
    dark: bool,
}

impl Gtk4Backend {
    pub(crate) fn new(
        window: &gtk4::Window,
        widgets: Widgets,
        guide: Rc<RefCell<Option<MetricGuide>>>,
        config: DemoConfig,
    ) -> (Rc<Self>, Receiver<UiEvent>) {
        let catalog = PangoFontCatalog::for_widget(window);
        let resolver = FontResolver::new(catalog, config.font_defaults());
        let selector = EngineSelector::new(GskSurfaceProvider::new(window));
        let dark = config.prefer_dark_theme;
        let controller = Controller::new(resolver, selector, config);

        let (event_tx, event_rx) = async_channel::unbounded::<UiEvent>();

        let backend = Rc::new(Gtk4Backend {
            controller: RefCell::new(controller),
            widgets,
            guide,
            updating: Cell::new(false),
            event_tx,
            dark,
        });
        (backend, event_rx)
    }

    pub(crate) fn widgets(&self) -> &Widgets {
        &self.widgets
    }

    /// Queue an event unless the widgets are being updated programmatically
    pub fn send(&self, event: UiEvent) {
        if self.updating.get() {
            return;
        }
        if let Err(e) = self.event_tx.send_blocking(event) {
            warn!("Dropping UI event, controller loop is gone: {}", e);
        }
    }

    /// Drain events on the main context until the channel closes
    pub(crate) fn run_event_loop(self: &Rc<Self>, event_rx: Receiver<UiEvent>) {
        let backend = Rc::clone(self);
        glib::spawn_future_local(async move {
            while let Ok(event) = event_rx.recv().await {
                backend.dispatch(event);
            }
            debug!("Controller event loop finished");
        });
    }

    /// Populate the widgets from the controller's initial state
    pub fn initialize(&self) {
        let update = self.controller.borrow_mut().initialize();
        self.apply(update);
    }

    /// Run one event through the controller and show the result
    pub fn dispatch(&self, event: UiEvent) {
        debug!("Dispatching {:?}", event);
        let update = match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.handle(event),
            Err(_) => {
                warn!("Controller busy, dropping {:?}", event);
                return;
            }
        };
        self.apply(update);
    }

    fn apply(&self, update: ViewUpdate) {
        if update.is_empty() {
            return;
        }
        let w = &self.widgets;

        self.updating.set(true);
        if let Some(list) = &update.typefaces {
            Self::replace_list(&w.typeface_model, &w.typeface_combo, list);
        }
        if let Some(list) = &update.styles {
            Self::replace_list(&w.style_model, &w.style_combo, list);
            w.style_combo.set_sensitive(!list.items.is_empty());
        }
        if let Some(list) = &update.engines {
            Self::replace_list(&w.engine_model, &w.engine_combo, list);
        }
        if let Some(index) = update.engine_index {
            w.engine_combo.set_selected(index as u32);
        }
        if let Some(text) = &update.size_text {
            w.size_entry.set_text(text);
        }
        if let Some(font) = &update.font {
            let desc = self.controller.borrow().resolver().catalog().description_for(font);
            w.font_tag.set_font_desc(Some(&desc));
            *self.guide.borrow_mut() = Some(MetricGuide::from_font(font));
            w.guides.queue_draw();
        }
        if let Some(text) = &update.metrics_text {
            w.metrics_label.set_text(text);
        }
        if update.font.is_some() || update.sample_text.is_some() {
            let buffer = w.editor.buffer();
            let (start, end) = buffer.bounds();
            buffer.apply_tag(&w.font_tag, &start, &end);
        }
        self.updating.set(false);

        if update.needs_redraw() {
            self.render_preview();
        }
    }

    fn replace_list(model: &StringList, combo: &DropDown, list: &ListUpdate) {
        let items: Vec<&str> = list.items.iter().map(String::as_str).collect();
        model.splice(0, model.n_items(), &items);
        let selected = list
            .selected
            .map_or(gtk4::INVALID_LIST_POSITION, |i| i as u32);
        combo.set_selected(selected);
    }

    /// Redraw the preview with the selected rendering engine
    pub fn render_preview(&self) {
        let Ok(controller) = self.controller.try_borrow() else {
            return;
        };
        let preview = &self.widgets.preview;

        let Some(renderer) = controller.selector().provider().active_renderer() else {
            preview.set_paintable(None::<&gdk::Paintable>);
            return;
        };
        let Some(font) = controller.font() else {
            return;
        };

        let desc = controller.resolver().catalog().description_for(font);
        let layout = preview.create_pango_layout(Some(controller.sample_text()));
        layout.set_font_description(Some(&desc));

        let config = controller.config();
        let width = self
            .widgets
            .editor
            .width()
            .max(config.window_width / 2)
            .min(MAX_PREVIEW_EXTENT);
        layout.set_width(width * pango::SCALE);
        layout.set_wrap(pango::WrapMode::WordChar);
        let (_, layout_height) = layout.pixel_size();
        let (width, height) = preview_extent(width, layout_height);

        let (fg, bg) = preview_colors(self.dark);
        match render_layout(renderer, &layout, width, height, &fg, &bg) {
            Ok(texture) => preview.set_paintable(Some(&texture)),
            Err(e) => warn!("Preview rendering failed: {}", e),
        }
    }
}
