//! Terminal User Interface (TUI) for tubedash
//!
//! Renders the dashboard with ratatui and drives the clock/metrics tickers
//! from the crossterm event loop.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, prelude::Backend, Terminal};
use std::io;
use std::time::Instant;

use crate::config::Config;
use crate::error::Result;

mod app;
mod ui;

pub use app::App;

/// Run the TUI application
pub fn run(config: Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    // Tickers stop before the screen goes away
    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    log::info!("tui started");

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Right | KeyCode::Tab => app.focus_next(),
                        KeyCode::Left | KeyCode::BackTab => app.focus_previous(),
                        KeyCode::F(12) => {
                            if let Err(e) = app.save_config() {
                                log::warn!("config save failed: {}", e);
                                app.set_status_message(format!("Failed to save config: {}", e));
                            }
                        }
                        // Menu entries have no action
                        _ => {}
                    }
                }
            }
        }

        app.on_tick(Instant::now());
    }

    log::info!("tui stopped");
    Ok(())
}
