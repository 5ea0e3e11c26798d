//! Queue drawer reveal and dismissal tests

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{harness, harness_with, LIBRARY, WINDOW};
use player_shell::config::ShellConfig;
use player_shell::messages::{DrawerMsg, LayoutMsg, Msg};
use player_shell::model::{Route, ShellModel, SidebarConfig, NOW_PLAYING};
use player_shell::runtime::{ManualClock, ShellRuntime};
use player_shell::store::LayoutStore;

#[test]
fn test_short_hover_never_opens() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(499);
    h.leave_reveal();
    h.advance(1000);

    assert!(!h.drawer_open());
}

#[test]
fn test_drawer_opens_exactly_after_reveal_delay() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(499);
    assert!(!h.drawer_open());
    h.advance(1);
    assert!(h.drawer_open());
}

#[test]
fn test_repeated_enters_do_not_restart_or_duplicate() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(200);
    h.hover_reveal();
    h.advance(200);
    h.hover_reveal();
    assert_eq!(
        h.rt.pending_timers(),
        1,
        "only one reveal timer may be pending"
    );

    h.advance(100);
    assert!(h.drawer_open(), "first hover's deadline applies");
}

#[test]
fn test_leave_and_reenter_restarts_delay() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(300);
    h.leave_reveal();
    h.advance(100);
    h.hover_reveal();

    // The first hover's deadline passes without effect
    h.advance(200);
    assert!(!h.drawer_open());
    h.advance(299);
    assert!(!h.drawer_open());
    h.advance(1);
    assert!(h.drawer_open());
}

#[test]
fn test_reveal_leave_does_not_close_open_drawer() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(500);
    assert!(h.drawer_open());

    h.leave_reveal();
    h.advance(1000);
    assert!(h.drawer_open());
}

#[test]
fn test_drawer_leave_closes_after_check_delay() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(500);

    h.leave_drawer();
    h.advance(49);
    assert!(h.drawer_open());
    h.advance(1);
    assert!(!h.drawer_open());
}

#[test]
fn test_reordering_suppresses_close() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(500);

    h.leave_drawer();
    h.advance(20);
    h.store.set_reordering_queue(true);
    h.advance(100);
    assert!(h.drawer_open(), "close suppressed while reordering");

    // The drawer stays open until the pointer leaves again
    h.store.set_reordering_queue(false);
    h.advance(1000);
    assert!(h.drawer_open());
    h.leave_drawer();
    h.advance(50);
    assert!(!h.drawer_open());
}

#[test]
fn test_reordering_flag_is_read_when_check_fires() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(500);

    // Set when the pointer leaves, cleared before the check runs
    h.store.set_reordering_queue(true);
    h.leave_drawer();
    h.advance(30);
    h.store.set_reordering_queue(false);
    h.advance(20);
    assert!(!h.drawer_open());
}

#[test]
fn test_injected_reordering_signal() {
    let store = LayoutStore::new(SidebarConfig::default());
    let signal = Rc::new(Cell::new(false));
    let model = ShellModel::new(store, ShellConfig::default(), WINDOW)
        .with_route(Route::new(LIBRARY))
        .with_reordering_signal(signal.clone());
    let clock = ManualClock::new();
    let mut rt = ShellRuntime::new(model, clock.clone());
    rt.mount();

    rt.dispatch(Msg::Drawer(DrawerMsg::RevealEnter));
    clock.advance(std::time::Duration::from_millis(500));
    rt.pump();
    assert!(rt.model().drawer.open);

    signal.set(true);
    rt.dispatch(Msg::Drawer(DrawerMsg::DrawerLeave));
    clock.advance(std::time::Duration::from_millis(50));
    rt.pump();
    assert!(rt.model().drawer.open);
}

#[test]
fn test_explicit_close_is_immediate() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(500);
    h.send(Msg::Drawer(DrawerMsg::Close));
    assert!(!h.drawer_open());
}

#[test]
fn test_now_playing_closes_drawer() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(500);
    assert!(h.drawer_open());

    h.navigate(NOW_PLAYING);
    assert!(!h.drawer_open());
    assert!(!h.rt.model().visibility().show_drawer);
}

#[test]
fn test_navigation_cancels_armed_reveal() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(200);
    h.navigate(NOW_PLAYING);
    h.advance(500);
    assert!(!h.drawer_open());

    // Back on a normal route the drawer is still closed
    h.navigate(LIBRARY);
    assert!(!h.drawer_open());
}

#[test]
fn test_expanding_side_panel_closes_drawer() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(500);

    h.send(Msg::Layout(LayoutMsg::ToggleRightExpanded));
    assert!(h.store.sidebar_config().right_expanded);
    assert!(!h.drawer_open());

    // Collapsing again brings back the button, not the drawer
    h.send(Msg::Layout(LayoutMsg::ToggleRightExpanded));
    assert!(!h.drawer_open());
    assert!(h.rt.model().visibility().show_drawer_button);
}

#[test]
fn test_external_expand_closes_drawer() {
    let mut h = harness();
    h.hover_reveal();
    h.advance(500);

    h.set_expanded_externally(true);
    assert!(!h.drawer_open());
}

#[test]
fn test_hover_ignored_when_button_hidden() {
    let mut h = harness_with(SidebarConfig::default(), NOW_PLAYING);
    h.hover_reveal();
    assert_eq!(h.rt.pending_timers(), 0);
    h.advance(600);
    assert!(!h.drawer_open());
}
