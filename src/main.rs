mod ui;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::Command;
use std::str::FromStr;

use termpad_app::{App, ExitAction};
use termpad_config::Config;
use termpad_logger::LogLevel;

fn init_logger(config: &Config) {
    let log_file_path = config.log_file_path();
    let min_log_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);
    termpad_logger::init(log_file_path, config.logging.max_entries, min_log_level);
}

/// Start a fresh copy of this program with the same arguments and wait for
/// it, returning its exit code
fn relaunch() -> Result<i32> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    termpad_logger::info(format!("Restarting {}", exe.display()));

    let status = Command::new(&exe)
        .args(&args)
        .status()
        .with_context(|| format!("Failed to restart {}", exe.display()))?;
    Ok(status.code().unwrap_or(1))
}

fn main() -> Result<()> {
    // Missing config is fine, a broken one falls back to defaults
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config: {:#}. Using defaults.", e);
        Config::default()
    });
    init_logger(&config);

    let mut app = App::new(config)?;

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run application
    let result = app.run(&mut terminal, ui::render);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(ExitAction::Quit) => {
            termpad_logger::info("Application exited");
            Ok(())
        }
        Ok(ExitAction::Restart) => {
            // Drop the terminal before the child takes over the tty
            drop(terminal);
            let code = relaunch()?;
            std::process::exit(code);
        }
        Err(err) => {
            termpad_logger::error(format!("Fatal error: {:#}", err));
            eprintln!("Error: {:?}", err);
            Ok(())
        }
    }
}
