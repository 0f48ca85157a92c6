//! Labeled horizontal slider — a `[====      ]` track for integer parameters.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Render a slider track for `value` within `[min, max]`.
///
/// The filled portion scales linearly with the value's position in the range;
/// the numeric value is appended after the track.
pub fn line(
    value: i32,
    min: i32,
    max: i32,
    track_width: usize,
    track_style: Style,
    value_style: Style,
) -> Line<'static> {
    let filled = filled_cells(value, min, max, track_width);
    let empty = track_width.saturating_sub(filled);
    Line::from(vec![
        Span::styled(
            format!("[{}{}]", "=".repeat(filled), " ".repeat(empty)),
            track_style,
        ),
        Span::styled(format!(" {value}"), value_style),
    ])
}

fn filled_cells(value: i32, min: i32, max: i32, track_width: usize) -> usize {
    debug_assert!(min < max);
    let frac = f64::from(value.clamp(min, max) - min) / f64::from(max - min);
    (frac * track_width as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_at_min_full_at_max() {
        assert_eq!(filled_cells(5, 5, 50, 30), 0);
        assert_eq!(filled_cells(50, 5, 50, 30), 30);
    }

    #[test]
    fn midpoint_half_full() {
        // (27.5 would be exact; 28 rounds to 15.33→15)
        assert_eq!(filled_cells(28, 5, 50, 30), 15);
    }

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(filled_cells(-100, 5, 50, 30), 0);
        assert_eq!(filled_cells(100, 5, 50, 30), 30);
    }

    #[test]
    fn line_width_is_stable() {
        for value in [5, 17, 50] {
            let line = line(value, 5, 50, 20, Style::default(), Style::default());
            let track: String = line.spans[0].content.to_string();
            assert_eq!(track.len(), 22, "track must keep its width at {value}");
        }
    }
}
