//! Sidebar — "Input Settings": the half-width slider and its key hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use relulab_core::content;
use relulab_core::params::HalfWidth;

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::widgets::slider;

const TRACK_WIDTH: usize = 26;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(format!(" {} ", content::SIDEBAR_HEADING))
        .title_style(theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let hw = app.half_width();

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(content::SLIDER_LABEL, theme.heading())),
        Line::from(""),
        slider::line(
            hw,
            HalfWidth::MIN,
            HalfWidth::MAX,
            TRACK_WIDTH,
            theme.accent(),
            theme.heading(),
        ),
        Line::from(Span::styled(
            format!("x ∈ [-{hw}, {hw}]  ({} points)", app.render.curve.len()),
            theme.text(),
        )),
        Line::from(""),
        Line::from(Span::styled(content::SLIDER_HELP, theme.muted())),
        Line::from(""),
    ];

    for (keys, desc) in [
        ("←/→", "adjust by 1"),
        ("PgUp/PgDn", "adjust by 5"),
        ("Home", "reset to default"),
        ("m", "math properties"),
        ("t", "dark/light theme"),
        ("e", "error history"),
        ("?", "help"),
        ("q", "quit"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:>9}  "), theme.accent()),
            Span::styled(desc, theme.muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
