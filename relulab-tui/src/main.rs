//! ReLU Lab TUI — interactive dashboard for the ReLU activation curve.
//!
//! Layout:
//! - Header: page title and section heading
//! - Sidebar: "Input Settings" with the half-width slider
//! - Chart: the ReLU curve and its dashed zero baseline
//! - Expander: "See Mathematical Properties" below the chart (toggle with m)
//! - Status bar: key hints and the last status/error message
//!
//! One synchronous recompute-and-render pass per interaction; no worker
//! thread, no shared state, nothing persisted across sessions.

mod app;
mod input;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // 1. Render the current frame.
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input (50ms timeout for ~20 FPS tick). Handlers
        //    recompute synchronously, so the next draw shows the new frame.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit.
        if !app.running {
            break;
        }
    }
    Ok(())
}
