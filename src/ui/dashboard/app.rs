use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{warn, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::config::ReportConfig;
use crate::core::telemetry::HostProbe;

use super::board::DashboardBoard;
use super::event_handler::{map_key, DashboardEvent};
use super::render::render_ui;

const PAGE: i32 = 10;

/// Dashboard application state
pub struct DashboardApp {
    pub board: DashboardBoard,
    pub config: ReportConfig,
    host: Box<dyn HostProbe>,
    pub selected_tab: usize,
    pub scroll: u16,
    pub should_quit: bool,
    pub show_help: bool,
    /// A refresh was requested and runs after the next draw
    pub refresh_pending: bool,
}

impl DashboardApp {
    pub fn new(host: Box<dyn HostProbe>, config: ReportConfig) -> Self {
        Self {
            board: DashboardBoard::new(config.variant.sections()),
            config,
            host,
            selected_tab: 0,
            scroll: 0,
            should_quit: false,
            show_help: false,
            refresh_pending: true,
        }
    }

    /// Re-run the whole pipeline into the board
    pub fn refresh(&mut self) -> Result<()> {
        self.refresh_pending = false;
        let refreshed = self
            .board
            .refresh_all(self.host.as_mut(), &self.config)
            .context("Failed to refresh system information");
        // New text may be shorter than the old
        self.scroll = self.scroll.min(self.max_scroll());
        refreshed
    }

    fn tab_count(&self) -> usize {
        self.board.slots().len().max(1)
    }

    /// Last scroll offset that still shows a line of the selected slot
    fn max_scroll(&self) -> u16 {
        let lines = self
            .board
            .slots()
            .get(self.selected_tab)
            .map(|slot| slot.text.lines().count())
            .unwrap_or(0);
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll) + delta).max(0);
        let target = u16::try_from(target).unwrap_or(u16::MAX);
        self.scroll = target.min(self.max_scroll());
    }

    fn select_tab(&mut self, index: usize) {
        if index != self.selected_tab {
            self.selected_tab = index;
            self.scroll = 0;
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Quit => self.should_quit = true,
            DashboardEvent::ToggleHelp => self.show_help = !self.show_help,
            DashboardEvent::NextTab => self.select_tab((self.selected_tab + 1) % self.tab_count()),
            DashboardEvent::PrevTab => {
                let count = self.tab_count();
                self.select_tab((self.selected_tab + count - 1) % count);
            }
            DashboardEvent::SelectTab(index) => {
                if index < self.board.slots().len() {
                    self.select_tab(index);
                }
            }
            DashboardEvent::Refresh => self.refresh_pending = true,
            DashboardEvent::ScrollUp => self.scroll_by(-1),
            DashboardEvent::ScrollDown => self.scroll_by(1),
            DashboardEvent::PageUp => self.scroll_by(-PAGE),
            DashboardEvent::PageDown => self.scroll_by(PAGE),
            DashboardEvent::None => {}
        }
    }
}

/// Mutes the `log` facade while the dashboard owns the terminal; stderr
/// would otherwise draw over the frame. The previous level comes back on drop.
struct LogSilencer {
    previous: LevelFilter,
}

impl LogSilencer {
    fn new() -> Self {
        let previous = log::max_level();
        log::set_max_level(LevelFilter::Off);
        Self { previous }
    }
}

impl Drop for LogSilencer {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

/// Run the dashboard TUI until the user quits
pub fn run_dashboard(host: Box<dyn HostProbe>, config: ReportConfig) -> Result<()> {
    let _quiet = LogSilencer::new();

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = DashboardApp::new(host, config);
    let result = event_loop(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    first_error([result, restored])
}

/// Every step runs even when an earlier one fails
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let steps = [
        disable_raw_mode().context("Failed to disable raw mode"),
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen"),
        terminal.show_cursor().context("Failed to show cursor"),
    ];
    first_error(steps)
}

fn first_error(results: impl IntoIterator<Item = Result<()>>) -> Result<()> {
    results
        .into_iter()
        .find(|r| r.is_err())
        .unwrap_or(Ok(()))
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render_ui(frame, app))?;

        if app.refresh_pending {
            // The status line already says "Refreshing"; collection blocks
            if let Err(e) = app.refresh() {
                warn!("{:#}", e);
            }
            continue;
        }

        if event::poll(Duration::from_millis(250)).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    app.handle_event(map_key(key.code));
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
