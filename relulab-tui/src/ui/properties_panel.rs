//! Expander content — the piecewise definition and the property bullets.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use relulab_core::content;

use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(format!(" {} ", content::PROPERTIES_HEADING))
        .title_style(theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = content::FORMULA_LINES
        .iter()
        .map(|l| Line::from(Span::styled(*l, theme.accent())))
        .collect();

    lines.push(Line::from(""));
    for p in &content::MATH_PROPERTIES {
        lines.push(Line::from(vec![
            Span::styled(format!("• {}: ", p.name), theme.heading()),
            Span::styled(p.detail, theme.text()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
