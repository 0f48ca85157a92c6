//! Overlay widgets — help and error history.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use relulab_core::content;

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// Keyboard reference overlay.
pub fn render_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(" Help ")
        .title_style(theme.title());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, theme, "Slider");
    key(&mut lines, theme, "←/→ or h/l", "Adjust half-width by 1");
    key(&mut lines, theme, "PgUp/PgDn or L/H", "Adjust half-width by 5");
    key(&mut lines, theme, "Home or 0", "Reset to the default (10)");
    lines.push(Line::from(""));

    section(&mut lines, theme, "View");
    key(&mut lines, theme, "m", "Toggle the mathematical properties section");
    key(&mut lines, theme, "t", "Toggle dark / light theme");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Overlays");
    key(&mut lines, theme, "e", "Error history");
    key(&mut lines, theme, "?", "This help");
    key(&mut lines, theme, "Esc / q", "Close the open overlay");
    lines.push(Line::from(""));

    section(&mut lines, theme, "About");
    lines.push(Line::from(Span::styled(content::INTRO, theme.text())));

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Error history overlay, newest first.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(format!(" Errors ({}) ", app.error_history.len()))
        .title_style(theme.title());

    let mut lines: Vec<Line> = Vec::new();
    if app.error_history.is_empty() {
        lines.push(Line::from(Span::styled(
            "No errors this session.",
            theme.muted(),
        )));
    } else {
        for record in app.error_history.iter().skip(app.error_scroll) {
            lines.push(Line::from(vec![
                Span::styled(
                    record.timestamp.format("%H:%M:%S ").to_string(),
                    theme.muted(),
                ),
                Span::styled(record.message.as_str(), theme.status(crate::app::StatusLevel::Error)),
            ]));
        }
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

fn section(lines: &mut Vec<Line<'_>>, theme: &Theme, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme.title())));
}

fn key(lines: &mut Vec<Line<'_>>, theme: &Theme, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>18}  "), theme.accent()),
        Span::styled(desc.to_string(), theme.muted()),
    ]));
}
