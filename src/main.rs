//! Terminal clock runner (default binary).
//!
//! Takes no arguments; configuration comes from the environment (see
//! `ClockConfig`). Exits 0 on `q`, nonzero if the terminal cannot be set up.

use std::fs::OpenOptions;
use std::io;

use anyhow::{bail, Context, Result};
use crossterm::tty::IsTty;
use log::{info, warn};

use sclock::core::LocalClock;
use sclock::engine::{Clock, ClockConfig};
use sclock::input::TerminalEvents;
use sclock::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = ClockConfig::from_env();
    init_logging(&config)?;
    check_terminal()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &ClockConfig) -> Result<()> {
    let mut clock = Clock::new(term, LocalClock, config);
    clock.run(&mut TerminalEvents)
}

fn check_terminal() -> Result<()> {
    if !io::stdout().is_tty() {
        bail!("stdout is not a terminal");
    }
    let (w, h) = crossterm::terminal::size().context("failed to query terminal size")?;
    info!("terminal is {}x{}", w, h);
    Ok(())
}

/// Logs go to `SCLOCK_LOG_PATH` only; the screen belongs to the clock.
fn init_logging(config: &ClockConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path))?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialise logging")?;
    Ok(())
}
