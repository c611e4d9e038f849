use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use super::app::DashboardApp;
use super::event_handler::KEY_HELP;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(3),    // Selected section
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_tabs(frame, chunks[0], app);
    render_section(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let titles: Vec<Line> = app
        .board
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let style = if slot.failed {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{} {}", i + 1, slot.label), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(format!(" {} ", app.config.variant.banner()))
                .borders(Borders::ALL),
        )
        .select(app.selected_tab)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_section(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let Some(slot) = app.board.slots().get(app.selected_tab) else {
        return;
    };

    let border_color = if slot.failed { Color::Red } else { Color::Cyan };
    let block = Block::default()
        .title(format!(" {} ", slot.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(slot.text.as_str())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let status = if app.refresh_pending {
        Span::styled(
            "Refreshing... ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        match app.board.last_refreshed() {
            Some(at) => Span::styled(
                format!("Updated {} ", at.format("%H:%M:%S")),
                Style::default().fg(Color::Green),
            ),
            None => Span::raw(""),
        }
    };

    let footer = Line::from(vec![
        status,
        Span::styled(
            "│ r Refresh │ Tab/←→ Switch │ ↑↓ Scroll │ ? Help │ q Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(footer), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let key_width = KEY_HELP.iter().map(|(keys, _)| keys.chars().count()).max().unwrap_or(0);
    let lines: Vec<Line> = KEY_HELP
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<width$}  ", keys, width = key_width),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" hostsnap dashboard keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let popup = popup_area(area, 60, 50);
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
