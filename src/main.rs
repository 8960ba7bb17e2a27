mod animation;
mod app;
mod config;
mod error;
mod event;
mod ui;
mod view;

use std::io;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use crate::app::App;
use crate::config::{CliArgs, Config};
use crate::error::BarSwapError;
use crate::event::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse();

    if cli.print_default_config {
        print!("{}", config::default_config_toml());
        return Ok(());
    }

    // Initialize color-eyre with custom panic hook that restores terminal
    install_panic_hook();

    let config = config::load(&cli)?;

    // Held until exit so buffered log lines get flushed
    let _log_guard = init_logging(&config.general.log_level);

    info!(
        "barswap starting (delay {:?}, mouse {})",
        config.tick_delay(),
        config.appearance.mouse
    );

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| BarSwapError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.appearance.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut event_handler = EventHandler::new();
    let mut app = App::new(&config, event_handler.scheduler())?;

    // ── Main event loop ───────────────────────────────────────────────
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        match event_handler.next().await {
            Some(event) => app.handle_event(event),
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    event_handler.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("barswap exiting");
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        // Call default handler
        default_hook(panic_info);
    }));
    color_eyre::install().ok();
}

/// Initialize tracing to a log file (never stdout: the terminal belongs to the UI).
/// An unwritable log directory disables logging instead of aborting startup.
fn init_logging(level: &str) -> WorkerGuard {
    use tracing_subscriber::EnvFilter;

    let log_dir = Config::log_dir();
    let (writer, guard) = match config::open_log_file(&log_dir) {
        Ok(file) => tracing_appender::non_blocking(file),
        Err(e) => {
            eprintln!("Logging disabled, cannot write to {}: {}", log_dir.display(), e);
            tracing_appender::non_blocking(io::sink())
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}
