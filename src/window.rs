// src/window.rs
use fontscope_core::DemoConfig;
use fontscope_gtk4::system_font::default_sans_serif_typeface;
use fontscope_gtk4::FontScopeWidget;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Label};
use tracing::{error, info, warn};

pub const APP_ID: &str = "com.example.fontscope";
pub const APP_TITLE: &str = "FontScope";

/// Create and present the main window
pub fn build_window(app: &Application, config: &DemoConfig) -> ApplicationWindow {
    let mut config = config.clone();
    if let Some(family) = default_sans_serif_typeface() {
        config = config.with_default_typeface(&family);
    }
    if let Err(e) = config.validate() {
        warn!("{}, falling back to defaults", e);
        config = DemoConfig::default().with_default_typeface(&config.default_typeface);
    }

    if let Some(settings) = gtk4::Settings::default() {
        settings.set_gtk_application_prefer_dark_theme(config.prefer_dark_theme);
    }

    let window = ApplicationWindow::builder()
        .application(app)
        .title(APP_TITLE)
        .default_width(config.window_width)
        .default_height(config.window_height)
        .resizable(true)
        .build();

    match FontScopeWidget::with_config(&window, config) {
        Ok(widget) => window.set_child(Some(widget.widget())),
        Err(e) => {
            error!("Failed to build FontScope view: {}", e);
            window.set_child(Some(&Label::new(Some(&e.to_string()))));
        }
    }

    info!("Main window ready");
    window.present();
    window
}
