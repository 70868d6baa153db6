//! FontScope widget tree and signal wiring

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use fontscope_core::constants::{
    CONTROL_HEIGHT, ENGINE_COMBO_WIDTH, MARGIN, SIZE_COMBO_WIDTH, SPACING, STYLE_COMBO_WIDTH,
    TYPEFACE_COMBO_WIDTH,
};
use fontscope_core::{load_sample_text, sample_text_path, DemoConfig, FontScopeError, FontScopeResult, StyleMode, UiEvent};
use gtk4::prelude::*;
use gtk4::{
    gdk, gio, Align, DrawingArea, DropDown, Entry, Label, ListBox, MenuButton, Orientation, Picture, Popover,
    ScrolledWindow, SelectionMode, StringList, TextTag, TextView,
};
use tracing::{info, warn};

use crate::backend::{Gtk4Backend, Widgets};
use crate::guides::MetricGuide;

const GUIDE_STRIP_HEIGHT: i32 = 72;

/// Complete FontScope view: selection row, editor, preview and metrics
pub struct FontScopeWidget {
    root: gtk4::Box,
    backend: Rc<Gtk4Backend>,
}

impl FontScopeWidget {
    /// Build the widget for `window` with default configuration
    pub fn new(window: &impl IsA<gtk4::Window>) -> FontScopeResult<Self> {
        Self::with_config(window, DemoConfig::default())
    }

    /// Build the widget for `window` with custom configuration
    pub fn with_config(window: &impl IsA<gtk4::Window>, config: DemoConfig) -> FontScopeResult<Self> {
        if gdk::Display::default().is_none() {
            return Err(FontScopeError::InitializationError {
                reason: "no display available".to_string(),
            });
        }
        let window = window.upcast_ref::<gtk4::Window>();
        let max_sample_bytes = config.max_sample_text_bytes;
        let sample_file = config.sample_text_file.clone();

        let (root, widgets) = Self::build_widgets(&config);
        let guide: Rc<RefCell<Option<MetricGuide>>> = Rc::new(RefCell::new(None));

        let draw_guide = Rc::clone(&guide);
        widgets.guides.set_draw_func(move |_, cr, w, h| {
            if let Some(guide) = draw_guide.borrow().as_ref() {
                if let Err(e) = guide.draw(cr, f64::from(w), f64::from(h)) {
                    warn!("Failed to draw metric guides: {}", e);
                }
            }
        });

        let (backend, event_rx) = Gtk4Backend::new(window, widgets, guide, config);
        Self::connect_signals(&backend, window, max_sample_bytes);
        backend.run_event_loop(event_rx);
        backend.initialize();

        if let Some(text) = sample_text_path(&sample_file).and_then(|p| load_sample_text(&p, max_sample_bytes)) {
            backend.widgets().editor.buffer().set_text(&text);
        }

        Ok(FontScopeWidget { root, backend })
    }

    fn build_widgets(config: &DemoConfig) -> (gtk4::Box, Widgets) {
        let root = gtk4::Box::new(Orientation::Vertical, SPACING);
        root.set_margin_top(MARGIN);
        root.set_margin_bottom(MARGIN);
        root.set_margin_start(MARGIN);
        root.set_margin_end(MARGIN);

        let controls = gtk4::Box::new(Orientation::Horizontal, SPACING);
        controls.set_size_request(-1, CONTROL_HEIGHT);

        let engine_model = StringList::new(&[]);
        let engine_combo = DropDown::builder().model(&engine_model).build();
        engine_combo.set_size_request(ENGINE_COMBO_WIDTH, -1);
        engine_combo.set_tooltip_text(Some("Rendering engine"));

        let typeface_model = StringList::new(&[]);
        let typeface_combo = DropDown::builder().model(&typeface_model).build();
        typeface_combo.set_size_request(TYPEFACE_COMBO_WIDTH, -1);
        typeface_combo.set_tooltip_text(Some("Typeface"));

        let style_model = StringList::new(&[]);
        let style_combo = DropDown::builder().model(&style_model).build();
        style_combo.set_size_request(STYLE_COMBO_WIDTH, -1);
        style_combo.set_tooltip_text(Some("Style"));

        let size_entry = Entry::new();
        size_entry.set_width_chars(4);
        size_entry.set_size_request(SIZE_COMBO_WIDTH, -1);
        size_entry.set_tooltip_text(Some("Point size"));
        let size_box = gtk4::Box::new(Orientation::Horizontal, 0);
        size_box.add_css_class("linked");
        size_box.append(&size_entry);
        size_box.append(&Self::size_preset_button(&size_entry, &config.size_presets));

        controls.append(&engine_combo);
        controls.append(&typeface_combo);
        if config.style_mode == StyleMode::Named {
            controls.append(&style_combo);
        }
        controls.append(&size_box);
        root.append(&controls);

        let editor = TextView::new();
        editor.set_wrap_mode(gtk4::WrapMode::WordChar);
        editor.set_accepts_tab(true);
        let font_tag = TextTag::new(Some("sample-font"));
        editor.buffer().tag_table().add(&font_tag);

        let preview = Picture::new();
        preview.set_can_shrink(false);
        preview.set_halign(Align::Start);
        preview.set_valign(Align::Start);

        let metrics_label = Label::new(None);
        metrics_label.set_xalign(0.0);
        metrics_label.set_yalign(0.0);
        metrics_label.set_selectable(true);

        let guides = DrawingArea::new();
        guides.set_content_height(GUIDE_STRIP_HEIGHT);
        guides.set_hexpand(true);

        // Editor takes the upper half, preview and metrics the lower half
        let halves = gtk4::Box::new(Orientation::Vertical, SPACING);
        halves.set_homogeneous(true);
        halves.set_vexpand(true);
        halves.append(&ScrolledWindow::builder().child(&editor).build());

        let lower = gtk4::Box::new(Orientation::Vertical, SPACING);
        lower.append(
            &ScrolledWindow::builder()
                .child(&preview)
                .vexpand(true)
                .build(),
        );
        let metrics_row = gtk4::Box::new(Orientation::Horizontal, SPACING);
        metrics_row.append(&metrics_label);
        metrics_row.append(&guides);
        lower.append(&metrics_row);
        halves.append(&lower);
        root.append(&halves);

        let widgets = Widgets {
            engine_model,
            engine_combo,
            typeface_model,
            typeface_combo,
            style_model,
            style_combo,
            size_entry,
            editor,
            font_tag,
            preview,
            metrics_label,
            guides,
        };
        (root, widgets)
    }

    /// Menu button listing the size presets; picking one fills `entry`
    fn size_preset_button(entry: &Entry, presets: &[String]) -> MenuButton {
        let list = ListBox::new();
        list.set_selection_mode(SelectionMode::None);
        for size in presets {
            list.append(&Label::new(Some(size.as_str())));
        }

        let popover = Popover::new();
        popover.set_child(Some(&list));

        let entry = entry.clone();
        let presets = presets.to_vec();
        let popover_ref = popover.downgrade();
        list.connect_row_activated(move |_, row| {
            if let Some(size) = usize::try_from(row.index()).ok().and_then(|i| presets.get(i)) {
                entry.set_text(size);
            }
            if let Some(popover) = popover_ref.upgrade() {
                popover.popdown();
            }
        });

        MenuButton::builder()
            .popover(&popover)
            .tooltip_text("Size presets")
            .build()
    }

    fn connect_signals(backend: &Rc<Gtk4Backend>, window: &gtk4::Window, max_sample_bytes: u64) {
        let w = backend.widgets();

        let weak = Rc::downgrade(backend);
        w.engine_combo.connect_selected_notify(move |combo| {
            let selected = combo.selected();
            if selected != gtk4::INVALID_LIST_POSITION {
                send(&weak, UiEvent::EngineSelected(i64::from(selected)));
            }
        });

        let weak = Rc::downgrade(backend);
        let model = w.typeface_model.clone();
        w.typeface_combo.connect_selected_notify(move |combo| {
            if let Some(name) = model.string(combo.selected()) {
                send(&weak, UiEvent::TypefaceChanged(name.to_string()));
            }
        });

        let weak = Rc::downgrade(backend);
        let model = w.style_model.clone();
        w.style_combo.connect_selected_notify(move |combo| {
            if let Some(style) = model.string(combo.selected()) {
                send(&weak, UiEvent::StyleChanged(style.to_string()));
            }
        });

        let weak = Rc::downgrade(backend);
        w.size_entry.connect_changed(move |entry| {
            send(&weak, UiEvent::SizeChanged(entry.text().to_string()));
        });

        let weak = Rc::downgrade(backend);
        w.editor.buffer().connect_changed(move |buffer| {
            let (start, end) = buffer.bounds();
            send(&weak, UiEvent::SampleTextChanged(buffer.text(&start, &end, false).to_string()));
        });

        // Files dropped on the editor replace the sample text
        let drop_target = gtk4::DropTarget::new(gio::File::static_type(), gdk::DragAction::COPY);
        let buffer = w.editor.buffer();
        drop_target.connect_drop(move |_, value, _, _| {
            let Ok(file) = value.get::<gio::File>() else {
                return false;
            };
            match file.path().and_then(|p| load_sample_text(&p, max_sample_bytes)) {
                Some(text) => {
                    buffer.set_text(&text);
                    true
                }
                None => false,
            }
        });
        w.editor.add_controller(drop_target);

        // Rewrap the preview when the available width changes
        let weak = Rc::downgrade(backend);
        w.guides.connect_resize(move |_, _, _| {
            if let Some(backend) = weak.upgrade() {
                backend.render_preview();
            }
        });

        // Surface created: re-query engines once the loop picks it up
        let weak = Rc::downgrade(backend);
        window.connect_realize(move |_| {
            info!("Window surface realized");
            send(&weak, UiEvent::SurfaceAttached);
        });

        // Surface about to go away: release engines before it does
        let weak = Rc::downgrade(backend);
        window.connect_unrealize(move |_| {
            info!("Window surface unrealizing");
            if let Some(backend) = weak.upgrade() {
                backend.dispatch(UiEvent::SurfaceDetached);
            }
        });
    }

    /// Get the GTK widget
    pub fn widget(&self) -> &gtk4::Box {
        &self.root
    }

    /// Get access to the backend
    pub fn backend(&self) -> &Rc<Gtk4Backend> {
        &self.backend
    }
}

fn send(backend: &Weak<Gtk4Backend>, event: UiEvent) {
    if let Some(backend) = backend.upgrade() {
        backend.send(event);
    }
}
