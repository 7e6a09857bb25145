//! StudyFlow terminal host.
//!
//! Mounts the two state models, paints the rendered tree, and dispatches
//! activation events into the models. Keys: digits toggle steps, `c`
//! toggles the comparison panel, `j`/`k`/arrows scroll, `q` quits; cards
//! and the comparison header respond to mouse clicks.

mod app;
mod ui;

use std::io;
use std::sync::Mutex;

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use ui::build_screen;

/// Restores the terminal on every exit path, panics included.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        io::stdout().execute(EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = io::stdout().execute(DisableMouseCapture);
        let _ = io::stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Log to a file so the alternate screen stays clean. Destination comes
/// from `STUDYFLOW_LOG`, filter from `RUST_LOG`.
fn init_tracing() -> Result<()> {
    let path = std::env::var("STUDYFLOW_LOG").unwrap_or_else(|_| "studyflow.log".to_string());
    let file = std::fs::File::create(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;

    let content = sf_types::optuna_flow();
    content.validate()?;
    info!(steps = content.steps.len(), "content validated");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = App::new(content);

    while !app.should_quit {
        let tree = sf_render::render(&app.content, &app.sequence, &app.panel);
        let screen = build_screen(&tree);

        let viewport_height = terminal.size()?.height as usize;
        app.clamp_scroll(screen.lines.len(), viewport_height);

        let paragraph =
            Paragraph::new(screen.lines.clone()).scroll((app.scroll as u16, 0));
        terminal.draw(|frame| {
            frame.render_widget(paragraph, frame.size());
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, &screen.regions),
            _ => {}
        }
    }

    drop(guard);
    info!("shutting down");
    Ok(())
}
