//! Keyboard input dispatch — overlays consume input first, then global keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay};

/// Step sizes for the half-width slider.
const STEP: i32 = 1;
const BIG_STEP: i32 = 5;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            handle_help_overlay(app, key);
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }

        // Slider — the bounding control of the whole dashboard.
        KeyCode::Left | KeyCode::Char('h') => app.step_half_width(-STEP),
        KeyCode::Right | KeyCode::Char('l') => app.step_half_width(STEP),
        KeyCode::PageDown | KeyCode::Char('H') => app.step_half_width(-BIG_STEP),
        KeyCode::PageUp | KeyCode::Char('L') => app.step_half_width(BIG_STEP),
        KeyCode::Home | KeyCode::Char('0') => app.reset_half_width(),

        // View toggles.
        KeyCode::Char('m') => app.toggle_properties(),
        KeyCode::Char('t') => app.toggle_theme(),

        // Overlays.
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
        }
        _ => {}
    }
}

fn handle_help_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}
