//! FutureFlow CLI - a terminal front end for the productivity dashboard.

mod commands;
mod console;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use futureflow_timer::TimerConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::console::Console;
use crate::session::{LineResult, Session};

#[derive(Parser)]
#[command(name = "futureflow")]
#[command(about = "Tasks, notes, goals and a focus timer in your terminal", long_about = None)]
struct Cli {
    /// Focus phase length in seconds
    #[arg(long, default_value_t = futureflow_timer::config::DEFAULT_FOCUS_SECS)]
    focus_secs: u32,
    /// Break phase length in seconds
    #[arg(long, default_value_t = futureflow_timer::config::DEFAULT_BREAK_SECS)]
    break_secs: u32,
    /// Print every timer tick
    #[arg(long)]
    ticks: bool,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = TimerConfig::new()
        .with_focus_secs(cli.focus_secs)
        .with_break_secs(cli.break_secs);
    info!("Starting session: focus {}s, break {}s", config.focus_secs, config.break_secs);

    let mut session = Session::new(config);
    let mut events = session.subscribe();
    let mut console = Console::new(tokio::io::stdout());

    console.line("FutureFlow - type 'help' for commands, 'quit' to leave.").await?;
    console.prompt().await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match session.handle_line(&line).await {
                    LineResult::Output(text) => console.output(&text).await?,
                    LineResult::Quit => break,
                }
                console.prompt().await?;
            }
            event = events.recv() => match event {
                Ok(event) => {
                    if let Some(text) = render::timer_event(&event, cli.ticks) {
                        console.notify(&text).await?;
                    }
                }
                Err(RecvError::Lagged(skipped)) => debug!("Dropped {} timer events", skipped),
                Err(RecvError::Closed) => break,
            },
        }
    }

    session.shutdown().await;
    debug!("Session ended");
    Ok(())
}
