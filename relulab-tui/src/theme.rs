//! Dark and light palettes for the dashboard.
//!
//! Dark is the default. The curve keeps its spring-green stroke in both
//! modes because the series carries its own color.

use ratatui::style::{Color, Modifier, Style};

use relulab_core::series::Rgb;

/// Palette for one theme mode.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub warning: Color,
    pub negative: Color,
    pub muted: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 17, 20),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
            accent: Color::Rgb(0, 204, 150),
            warning: Color::Rgb(255, 160, 0),
            negative: Color::Rgb(255, 85, 85),
            muted: Color::Rgb(110, 110, 125),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(248, 248, 245),
            text_primary: Color::Black,
            text_secondary: Color::Rgb(70, 70, 70),
            accent: Color::Rgb(0, 150, 110),
            warning: Color::Rgb(180, 110, 0),
            negative: Color::Rgb(190, 30, 30),
            muted: Color::Rgb(130, 130, 140),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    // ── Style helpers ────────────────────────────────────────────────

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Status bar style for a message severity.
    pub fn status(&self, level: crate::app::StatusLevel) -> Style {
        use crate::app::StatusLevel;
        let color = match level {
            StatusLevel::Info => self.accent,
            StatusLevel::Warning => self.warning,
            StatusLevel::Error => self.negative,
        };
        Style::default().fg(color)
    }
}

/// Map a series' carried color onto the terminal.
pub fn series_color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::StatusLevel;
    use relulab_core::series::CURVE_COLOR;

    #[test]
    fn modes_differ() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text_primary, light.text_primary);
    }

    #[test]
    fn for_mode_selects() {
        assert_eq!(Theme::for_mode(true).background, Theme::dark().background);
        assert_eq!(Theme::for_mode(false).background, Theme::light().background);
    }

    #[test]
    fn status_severity_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.status(StatusLevel::Info).fg, Some(theme.accent));
        assert_eq!(theme.status(StatusLevel::Warning).fg, Some(theme.warning));
        assert_eq!(theme.status(StatusLevel::Error).fg, Some(theme.negative));
    }

    #[test]
    fn series_color_passes_through() {
        assert_eq!(series_color(CURVE_COLOR), Color::Rgb(0, 204, 150));
    }
}
