// Dashboard board and app state, driven without a terminal

use crossterm::event::KeyCode;
use hostsnap::ui::dashboard::{map_key, DashboardApp, DashboardBoard, DashboardEvent};
use hostsnap::{ReportConfig, Section};

use super::fixtures::{Fault, StubHost};

#[test]
fn test_refresh_fills_every_slot() {
    let mut host = StubHost::default();
    let mut board = DashboardBoard::new(&Section::ALL);
    board
        .refresh_all(&mut host, &ReportConfig::default())
        .unwrap();

    assert_eq!(board.refresh_count(), 1);
    assert!(board.last_refreshed().is_some());
    for slot in board.slots() {
        assert!(!slot.text.is_empty());
        assert!(!slot.failed);
        assert_ne!(slot.text, "Not collected yet.\n");
    }
    assert_eq!(
        board.slot(Section::Uptime).unwrap().text,
        "System Uptime: 1 day, 1:01:01\n"
    );
}

#[test]
fn test_refresh_overwrites_previous_values() {
    let mut host = StubHost::default();
    let config = ReportConfig::default();
    let mut board = DashboardBoard::new(&Section::ALL);
    board.refresh_all(&mut host, &config).unwrap();

    host.hostname = "renamed".to_string();
    host.cpu_usage = 99.0;
    host.faults = vec![Fault::Battery];
    board.refresh_all(&mut host, &config).unwrap();

    assert_eq!(board.refresh_count(), 2);
    assert!(board
        .slot(Section::Network)
        .unwrap()
        .text
        .starts_with("Hostname: renamed\n"));
    assert!(board
        .slot(Section::Cpu)
        .unwrap()
        .text
        .contains("CPU usage: 99.0%"));
    let battery = board.slot(Section::Battery).unwrap();
    assert!(battery.failed);
    assert!(battery.text.starts_with("Collector failed: "));

    // A later clean refresh clears the failure flag again
    host.faults.clear();
    board.refresh_all(&mut host, &config).unwrap();
    assert!(!board.slot(Section::Battery).unwrap().failed);
}

#[test]
fn test_app_refresh_and_navigation() {
    let mut app = DashboardApp::new(Box::new(StubHost::default()), ReportConfig::default());
    assert!(app.refresh_pending);

    app.refresh().unwrap();
    assert!(!app.refresh_pending);
    assert_eq!(app.board.refresh_count(), 1);

    app.handle_event(map_key(KeyCode::Tab));
    assert_eq!(app.selected_tab, 1);
    app.handle_event(map_key(KeyCode::BackTab));
    app.handle_event(map_key(KeyCode::BackTab));
    assert_eq!(app.selected_tab, 8);

    app.handle_event(DashboardEvent::SelectTab(3));
    assert_eq!(app.selected_tab, 3);
    app.handle_event(DashboardEvent::SelectTab(42));
    assert_eq!(app.selected_tab, 3);
}

#[test]
fn test_app_basic_variant_has_five_tabs() {
    let mut app = DashboardApp::new(Box::new(StubHost::default()), ReportConfig::basic());
    app.refresh().unwrap();
    assert_eq!(app.board.slots().len(), 5);

    app.handle_event(DashboardEvent::PrevTab);
    assert_eq!(app.selected_tab, 4);
}

#[test]
fn test_app_refresh_key_and_quit() {
    let mut app = DashboardApp::new(Box::new(StubHost::default()), ReportConfig::default());
    app.refresh().unwrap();

    app.handle_event(map_key(KeyCode::Char('r')));
    assert!(app.refresh_pending);

    app.handle_event(map_key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn test_scroll_resets_on_tab_change() {
    let mut app = DashboardApp::new(Box::new(StubHost::default()), ReportConfig::default());
    app.refresh().unwrap();

    // The OS slot has six lines
    app.handle_event(DashboardEvent::ScrollDown);
    app.handle_event(DashboardEvent::ScrollDown);
    assert_eq!(app.scroll, 2);

    app.handle_event(DashboardEvent::NextTab);
    assert_eq!(app.scroll, 0);
    app.handle_event(DashboardEvent::ScrollUp);
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_scroll_stops_at_last_line() {
    let mut app = DashboardApp::new(Box::new(StubHost::default()), ReportConfig::default());
    app.refresh().unwrap();

    app.handle_event(DashboardEvent::PageDown);
    assert_eq!(app.scroll, 5);
    app.handle_event(DashboardEvent::ScrollDown);
    assert_eq!(app.scroll, 5);
    app.handle_event(DashboardEvent::PageUp);
    assert_eq!(app.scroll, 0);

    // Single-line uptime slot cannot scroll at all
    app.handle_event(DashboardEvent::SelectTab(7));
    app.handle_event(DashboardEvent::PageDown);
    assert_eq!(app.scroll, 0);
}
