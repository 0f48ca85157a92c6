//! Bottom status bar — key hints plus the last status/error message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let mut spans: Vec<Span> = vec![Span::styled(
        " ←/→:range  m:properties  t:theme  e:errors  ?:help  q:quit",
        theme.muted(),
    )];

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), theme.status(*level)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
