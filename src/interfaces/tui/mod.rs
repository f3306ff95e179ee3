//! Interactive terminal interface
//!
//! The run loop draws, applies finished background fetches, then polls
//! for input with a short timeout so in-flight results surface without a
//! keypress.

pub mod app;
mod event_handler;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::Result;

use app::App;

pub async fn run_tui(config: &AppConfig) -> Result<()> {
    let app = App::new(config)?;
    info!("starting interactive session");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_loop(&mut terminal, app).await;

    // Restore the terminal even when the loop errored.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        app.drain_fetches();
        terminal.draw(|frame| ui::ui(frame, &mut app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && event_handler::handle_key_event(&mut app, key)
                {
                    info!("session closed");
                    return Ok(());
                }
            }
        }
    }
}
