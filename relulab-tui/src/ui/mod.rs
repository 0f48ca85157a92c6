//! Top-level UI layout — header, sidebar, chart, expander, status bar.
//!
//! Title block up top, the "Input Settings" sidebar on the left, the chart
//! filling the rest, and a collapsible properties section tucked under the
//! chart when open.

pub mod chart_panel;
pub mod overlays;
pub mod properties_panel;
pub mod settings_panel;
pub mod status_bar;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use relulab_core::content;

use crate::app::{AppState, Overlay};
use crate::theme::Theme;

const SIDEBAR_WIDTH: u16 = 36;
const EXPANDER_HEIGHT: u16 = 9;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let theme = Theme::for_mode(app.render.layout.dark_mode);

    // Paint the surface so the theme flag is visible edge to edge.
    let surface = Block::default().style(
        ratatui::style::Style::default()
            .bg(theme.background)
            .fg(theme.text_primary),
    );
    f.render_widget(surface, f.area());

    // Split: 2-line header, main area, 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], &theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    settings_panel::render(f, body[0], app, &theme);

    // Chart column, with the expander section below it when open.
    if app.properties_expanded {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(EXPANDER_HEIGHT)])
            .split(body[1]);
        chart_panel::render(f, rows[0], app, &theme);
        properties_panel::render(f, rows[1], &theme);
    } else {
        chart_panel::render(f, body[1], app, &theme);
    }

    status_bar::render(f, chunks[2], app, &theme);

    // Overlays draw on top of the main area.
    match app.overlay {
        Overlay::Help => overlays::render_help(f, chunks[1], &theme),
        Overlay::ErrorHistory => overlays::render_error_history(f, chunks[1], app, &theme),
        Overlay::None => {}
    }
}

fn draw_header(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(content::PAGE_TITLE, theme.title())),
        Line::from(Span::styled(content::SECTION_HEADING, theme.heading())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
