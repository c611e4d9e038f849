use crossterm::event::KeyCode;

/// Events that can occur in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    NextTab,
    PrevTab,
    /// Jump straight to a tab by position
    SelectTab(usize),
    /// Re-run every collector and overwrite all slots
    Refresh,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    /// No action
    None,
}

/// Keys listed by the help overlay, in display order
pub const KEY_HELP: &[(&str, &str)] = &[
    ("q / Esc", "Quit"),
    ("? / h", "Toggle this help"),
    ("r / F5", "Refresh every section"),
    ("Tab / →", "Next section"),
    ("Shift+Tab / ←", "Previous section"),
    ("1-9", "Jump to a section"),
    ("↑ ↓ / j k", "Scroll"),
    ("PgUp / PgDn", "Scroll a page"),
];

pub fn map_key(code: KeyCode) -> DashboardEvent {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => DashboardEvent::Quit,
        KeyCode::Char('?') | KeyCode::Char('h') => DashboardEvent::ToggleHelp,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => DashboardEvent::NextTab,
        KeyCode::BackTab | KeyCode::Left => DashboardEvent::PrevTab,
        KeyCode::Char('r') | KeyCode::F(5) => DashboardEvent::Refresh,
        KeyCode::Char(c @ '1'..='9') => DashboardEvent::SelectTab(c as usize - '1' as usize),
        KeyCode::Up | KeyCode::Char('k') => DashboardEvent::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => DashboardEvent::ScrollDown,
        KeyCode::PageUp => DashboardEvent::PageUp,
        KeyCode::PageDown => DashboardEvent::PageDown,
        _ => DashboardEvent::None,
    }
}
