//! End-to-end tests for the dashboard shell: key events in, focus and
//! tile state out.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tv_dashboard::config::Config;
use tv_dashboard::dashboard::Dashboard;
use tv_dashboard::dashboard::theme::ThemeVariant;
use tv_dashboard::navigation::{NavOutcome, RegionId};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mounted(config: &Config) -> Dashboard {
    let mut dashboard = Dashboard::new(config).unwrap();
    dashboard.mount();
    dashboard
}

#[test]
fn test_arrow_keys_move_focus() {
    let mut dashboard = mounted(&Config::default());

    let outcome = dashboard.handle_key(&press(KeyCode::Down));
    assert!(matches!(outcome, Some(NavOutcome::Moved { from: 0, to: 1, .. })));
    assert!(dashboard.view().is_focused(&RegionId::new("language")));

    dashboard.handle_key(&press(KeyCode::Left));
    assert!(dashboard.view().is_focused(&RegionId::new("theme")));
}

#[test]
fn test_enter_activates_focused_tile() {
    let mut dashboard = mounted(&Config::default());
    assert_eq!(dashboard.view().theme.variant, ThemeVariant::Dark);

    let outcome = dashboard.handle_key(&press(KeyCode::Enter));

    assert_eq!(outcome, Some(NavOutcome::Activated(RegionId::new("theme"))));
    assert_eq!(dashboard.view().theme.variant, ThemeVariant::Light);
}

#[test]
fn test_unbound_keys_are_not_navigation() {
    let mut dashboard = mounted(&Config::default());

    assert_eq!(dashboard.handle_key(&press(KeyCode::Char('x'))), None);
    assert_eq!(dashboard.navigator().cursor(), Some(0));
}

#[test]
fn test_key_release_is_ignored() {
    let mut dashboard = mounted(&Config::default());
    let mut release = press(KeyCode::Down);
    release.kind = KeyEventKind::Release;

    assert_eq!(dashboard.handle_key(&release), None);
    assert_eq!(dashboard.navigator().cursor(), Some(0));
}

#[test]
fn test_configured_bindings_drive_navigation() {
    let mut config = Config::default();
    config.keys.down.push("j".to_string());
    config.keys.up.push("k".to_string());
    let mut dashboard = mounted(&config);

    dashboard.handle_key(&press(KeyCode::Char('j')));
    dashboard.handle_key(&press(KeyCode::Char('j')));
    assert_eq!(dashboard.navigator().cursor(), Some(2));

    dashboard.handle_key(&press(KeyCode::Char('k')));
    assert_eq!(dashboard.navigator().cursor(), Some(1));
}

#[test]
fn test_escape_then_resume() {
    let mut dashboard = mounted(&Config::default());
    dashboard.handle_key(&press(KeyCode::Down));

    assert_eq!(
        dashboard.handle_key(&press(KeyCode::Esc)),
        Some(NavOutcome::Cancelled)
    );
    assert_eq!(dashboard.view().focused, None);

    dashboard.handle_key(&press(KeyCode::Up));
    assert!(dashboard.view().is_focused(&RegionId::new("theme")));
}

#[test]
fn test_autofocus_can_be_disabled() {
    let mut config = Config::default();
    config.navigation.autofocus = false;
    let dashboard = mounted(&config);

    assert_eq!(dashboard.view().focused, None);
    assert_eq!(dashboard.navigator().cursor(), Some(0));
}
