//! Chart layout options passed to the rendering sink.

use serde::{Deserialize, Serialize};

/// Title text, axis labels, theme flag, and height for one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Dark chart theme, the dashboard default.
    pub dark_mode: bool,
    /// Preferred chart height in pixels. Terminal sinks are free to ignore it.
    pub height: u16,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            title: "ReLU Function: f(x) = max(0, x)".to_string(),
            x_label: "Input (x)".to_string(),
            y_label: "Output (Activation)".to_string(),
            dark_mode: true,
            height: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard() {
        let layout = ChartLayout::default();
        assert_eq!(layout.title, "ReLU Function: f(x) = max(0, x)");
        assert_eq!(layout.x_label, "Input (x)");
        assert_eq!(layout.y_label, "Output (Activation)");
        assert!(layout.dark_mode);
        assert_eq!(layout.height, 500);
    }
}
