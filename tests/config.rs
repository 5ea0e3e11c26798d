//! Configuration file tests

use std::time::Duration;

use player_shell::config::{ShellConfig, TransitionTiming, WidthRange};
use player_shell::messages::{DrawerMsg, Msg, ResizeMsg};
use player_shell::model::{Edge, Route, ShellModel, SidebarConfig};
use player_shell::runtime::{ManualClock, ShellRuntime, WindowPointerEvent};
use player_shell::store::LayoutStore;
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = ShellConfig::default();
    config.sidebar.left = WidthRange::new(200.0, 500.0, 320.0);
    config.timing.reveal_delay_ms = 750;
    config.animation.drawer = TransitionTiming::new(150, 120);
    config.chrome.player_bar_height = 72.0;

    config.save_to(&path).unwrap();
    assert!(path.exists());
    assert_eq!(ShellConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ShellConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, ShellConfig::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "sidebar: [this is not\n  a mapping").unwrap();

    assert_eq!(ShellConfig::load_from(&path), ShellConfig::default());
}

#[test]
fn test_partial_file_overrides_only_named_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "timing:\n  reveal_delay_ms: 250\n").unwrap();

    let config = ShellConfig::load_from(&path);
    assert_eq!(config.timing.reveal_delay(), Duration::from_millis(250));
    assert_eq!(config.timing.drawer_close_delay(), Duration::from_millis(50));
    assert_eq!(config.sidebar, ShellConfig::default().sidebar);
}

fn runtime(config: ShellConfig) -> (ShellRuntime<ManualClock>, ManualClock, LayoutStore) {
    let store = LayoutStore::new(SidebarConfig::from_limits(&config.sidebar));
    let model = ShellModel::new(store.clone(), config, (1280.0, 800.0))
        .with_route(Route::new("/library/artists"));
    let clock = ManualClock::new();
    let mut rt = ShellRuntime::new(model, clock.clone());
    rt.mount();
    (rt, clock, store)
}

#[test]
fn test_configured_reveal_delay_is_used() {
    let mut config = ShellConfig::default();
    config.timing.reveal_delay_ms = 250;
    let (mut rt, clock, _store) = runtime(config);

    rt.dispatch(Msg::Drawer(DrawerMsg::RevealEnter));
    clock.advance(Duration::from_millis(249));
    rt.pump();
    assert!(!rt.model().drawer.open);
    clock.advance(Duration::from_millis(1));
    rt.pump();
    assert!(rt.model().drawer.open);
}

#[test]
fn test_configured_limits_clamp_drags() {
    let mut config = ShellConfig::default();
    config.sidebar.left = WidthRange::new(200.0, 320.0, 260.0);
    let (mut rt, _clock, store) = runtime(config);
    assert_eq!(store.sidebar_config().left_width.as_str(), "260px");

    rt.dispatch(Msg::Resize(ResizeMsg::Start(Edge::Left)));
    rt.window_event(WindowPointerEvent::Move {
        client_x: 900.0,
        client_y: 0.0,
    });
    rt.window_event(WindowPointerEvent::Up);
    assert_eq!(store.sidebar_config().left_width.as_str(), "320px");
}
