// src/main.rs
use fontscope::{APP_ID, build_window};
use fontscope_core::DemoConfig;
use gtk4::Application;
use gtk4::gio::ApplicationFlags;
use gtk4::prelude::*;

fn main() -> glib::ExitCode {
    env_logger::init();

    let config = DemoConfig::default();
    let flags = if config.allow_multiple_instances {
        ApplicationFlags::NON_UNIQUE
    } else {
        ApplicationFlags::empty()
    };

    let app = Application::builder()
        .application_id(APP_ID)
        .flags(flags)
        .build();

    app.connect_activate(move |app| {
        build_window(app, &config);
    });

    app.run()
}
