// tests/scenario_tests.rs
//! End-to-end selection scenarios against the dummy backend

use fontscope::dummy_backend::{DummyFontCatalog, DummySurfaceProvider};
use fontscope::{
    Controller, DemoConfig, EngineSelector, FontDefaults, FontResolver, StyleMode, StyleSpec,
    UiEvent, load_sample_text,
};

fn engines(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn scenario_a_arial_regular_twelve_points() {
    let catalog = DummyFontCatalog::new().with_typeface("Arial", &["Regular", "Bold"], 0.76, 0.8);
    let resolver = FontResolver::new(catalog, FontDefaults::default());

    let font = resolver.resolve("Arial", &StyleSpec::named("Regular"), 12.0);

    assert!((font.height() - 15.789).abs() < 1e-3, "pixel height {}", font.height());
    assert!((font.point_height() - 12.0).abs() < 1e-3);
    assert_eq!(font.leading(), font.height() - font.point_height());
}

#[test]
fn scenario_b_empty_engine_list_selects_zero() {
    let mut selector = EngineSelector::new(DummySurfaceProvider::new());
    selector.update_surface();

    assert_eq!(selector.select_engine(5), 0);
    assert!(selector.current_engine_list().is_empty());
}

#[test]
fn scenario_c_oversized_sample_text_is_skipped() {
    let dir = std::env::temp_dir().join(format!("fontscope-scenario-c-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sampletext.txt");
    std::fs::write(&path, vec![b'x'; 70000]).unwrap();

    assert_eq!(load_sample_text(&path, 65536), None);
}

#[test]
fn scenario_d_engine_index_clamps_both_ways() {
    let provider = DummySurfaceProvider::new().with_surface(1, engines(&["engine_a", "engine_b"]));
    let mut selector = EngineSelector::new(provider);
    selector.update_surface();

    assert_eq!(selector.select_engine(-1), 0);
    assert_eq!(selector.select_engine(10), 1);
    assert_eq!(selector.provider().applied(), &[(1, 0), (1, 0), (1, 1)]);
}

#[test]
fn controller_session_walkthrough() {
    let catalog = DummyFontCatalog::new().with_typeface("Arial", &["Regular", "Bold", "Italic"], 0.76, 0.8);
    let config = DemoConfig::new().with_default_typeface("Arial");
    let resolver = FontResolver::new(catalog, config.font_defaults());
    let surface = DummySurfaceProvider::new();
    let mut controller = Controller::new(resolver, EngineSelector::new(surface), config);

    let init = controller.initialize();
    assert_eq!(init.typefaces.as_ref().and_then(|t| t.selected), Some(0));
    assert_eq!(init.styles.as_ref().map(|s| s.items.len()), Some(3));
    assert!(init.metrics_text.as_deref().unwrap_or_default().contains("point height: 14.00"));

    // Window shows up with two engines
    controller
        .selector_mut()
        .provider_mut()
        .attach(1, engines(&["Cairo", "OpenGL"]));
    let attached = controller.handle(UiEvent::SurfaceAttached);
    assert_eq!(attached.engines.map(|e| e.items.len()), Some(2));
    assert_eq!(controller.handle(UiEvent::EngineSelected(1)).engine_index, Some(1));

    let sized = controller.handle(UiEvent::SizeChanged("12".to_string()));
    let font = sized.font.expect("font after size change");
    assert!((font.height() - 15.789).abs() < 1e-3);

    let styled = controller.handle(UiEvent::StyleChanged("Italic".to_string()));
    assert_eq!(styled.font.map(|f| f.style().clone()), Some(StyleSpec::named("Italic")));

    // Surface recreated with a single engine: previous index 1 clamps to 0
    controller
        .selector_mut()
        .provider_mut()
        .attach(2, engines(&["Cairo"]));
    let recreated = controller.handle(UiEvent::SurfaceAttached);
    let list = recreated.engines.expect("engine list after new surface");
    assert_eq!(list.selected, Some(0));
    assert_eq!(controller.selector().selected_engine(), Some("Cairo"));
}

#[test]
fn plain_mode_session_never_lists_styles() {
    let config = DemoConfig::new().with_style_mode(StyleMode::Plain);
    let resolver = FontResolver::new(DummyFontCatalog::new(), config.font_defaults());
    let mut controller = Controller::new(resolver, EngineSelector::new(DummySurfaceProvider::new()), config);

    assert!(controller.initialize().styles.is_none());
    let update = controller.handle(UiEvent::TypefaceChanged("Noto Serif".to_string()));
    assert!(update.styles.is_none());
    assert_eq!(update.font.map(|f| f.style().clone()), Some(StyleSpec::plain()));
}
