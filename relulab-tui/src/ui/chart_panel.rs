//! The chart — two line series (curve plus dashed zero baseline) with axis
//! titles and legend, bounds taken from the current render state.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use relulab_core::series::Series;

use crate::app::AppState;
use crate::theme::{series_color, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let rs = &app.render;

    let baseline_points = rs.baseline.points();
    let curve_points = rs.curve.points();

    // Baseline first so the curve draws over it.
    let datasets = vec![
        dataset(&rs.baseline, &baseline_points),
        dataset(&rs.curve, &curve_points),
    ];

    let [x_min, x_max] = rs.x_bounds();
    let [y_min, y_max] = rs.y_bounds();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(format!(" {} ", rs.layout.title))
        .title_style(theme.title());

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(Span::styled(rs.layout.x_label.clone(), theme.muted()))
                .style(theme.muted())
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::styled(format!("{x_min:.0}"), theme.muted()),
                    Span::styled("0", theme.muted()),
                    Span::styled(format!("{x_max:.0}"), theme.muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(rs.layout.y_label.clone(), theme.muted()))
                .style(theme.muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled("0", theme.muted()),
                    Span::styled(format!("{:.0}", y_max / 2.0), theme.muted()),
                    Span::styled(format!("{y_max:.0}"), theme.muted()),
                ]),
        );

    f.render_widget(chart, area);
}

/// Braille line for solid series; dots stand in for a dashed stroke.
fn dataset<'a>(series: &'a Series, points: &'a [(f64, f64)]) -> Dataset<'a> {
    let marker = if series.style.dashed {
        symbols::Marker::Dot
    } else {
        symbols::Marker::Braille
    };
    Dataset::default()
        .name(series.name.as_str())
        .marker(marker)
        .style(Style::default().fg(series_color(series.style.color)))
        .graph_type(GraphType::Line)
        .data(points)
}
