//! Application state — single-owner, main-thread only.
//!
//! Recomputation is synchronous: a slider change produces the next frame
//! before the next draw. There is no worker thread and no shared state;
//! the whole interaction model is one pure render pass per input event.

use std::collections::VecDeque;

use chrono::NaiveDateTime;

use relulab_core::params::HalfWidth;
use relulab_core::render::{on_half_width_change, RenderState};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub message: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,

    /// The current frame; replaced wholesale on every slider change.
    pub render: RenderState,

    /// The "See Mathematical Properties" expander.
    pub properties_expanded: bool,

    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            running: true,
            render: RenderState::new(HalfWidth::default()),
            properties_expanded: false,
            overlay: Overlay::None,
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
        }
    }

    pub fn half_width(&self) -> i32 {
        self.render.half_width.get()
    }

    /// Handle a slider change. On error the previous frame stays on screen
    /// and the message lands in the status bar and history.
    pub fn set_half_width(&mut self, value: i32) {
        if value == self.half_width() {
            return;
        }
        match on_half_width_change(value) {
            Ok(mut next) => {
                // The theme toggle lives in the layout; carry it across frames.
                next.layout.dark_mode = self.render.layout.dark_mode;
                self.render = next;
                self.set_status(format!("Domain set to [-{value}, {value}]"));
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    /// Step the slider. The control owns the range, so steps clamp at the
    /// rails instead of erroring.
    pub fn step_half_width(&mut self, delta: i32) {
        let target = (self.half_width() + delta).clamp(HalfWidth::MIN, HalfWidth::MAX);
        if target == self.half_width() {
            self.set_warning(format!(
                "Half-width is limited to [{}, {}]",
                HalfWidth::MIN,
                HalfWidth::MAX
            ));
            return;
        }
        self.set_half_width(target);
    }

    pub fn reset_half_width(&mut self) {
        self.set_half_width(HalfWidth::DEFAULT);
        self.set_status(format!("Half-width reset to {}", HalfWidth::DEFAULT));
    }

    pub fn toggle_properties(&mut self) {
        self.properties_expanded = !self.properties_expanded;
    }

    pub fn toggle_theme(&mut self) {
        self.render.layout.dark_mode = !self.render.layout.dark_mode;
        let mode = if self.render.layout.dark_mode {
            "dark"
        } else {
            "light"
        };
        self.set_status(format!("Switched to {mode} theme"));
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, message: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            message: message.clone(),
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
