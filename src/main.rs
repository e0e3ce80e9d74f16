//! crust-slowread: slow-consumer diagnostic client for the CRUST daemon
//!
//! Connects to the daemon's socket, requests a state resend and drains the
//! response at one byte per second, echoing each byte to stdout. Used to
//! verify that the daemon's synchronous writes to a slow client neither
//! deadlock nor drop data.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use crust_slowread::client::SlowReader;
use crust_slowread::config::ReaderConfig;
use crust_slowread::protocol::Command;

/// Pause between single-byte reads. Fixed: the throttle is the tool.
const DRAIN_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "crust-slowread")]
#[command(about = "Drain the CRUST daemon's state output at one byte per second")]
#[command(version)]
struct Cli {
    /// Socket path (defaults to /var/run/crust/crust.sock)
    #[arg(long)]
    socket: Option<PathBuf>,

    /// Config file path (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the drained bytes.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("crust_slowread=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ReaderConfig::load(cli.config.as_deref())?;
    let socket_path = cli.socket.unwrap_or(config.socket_path);

    let mut reader = match SlowReader::connect(&socket_path, DRAIN_INTERVAL).await {
        Ok(r) => r,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: could not connect to {:?}", socket_path);
            eprintln!("Is the CRUST daemon running?");
            return Err(e.into());
        }
    };

    reader.send_command(Command::ResendState).await?;
    info!(
        "Sent {} to {:?}, draining one byte every {:?}",
        Command::ResendState.code(),
        socket_path,
        DRAIN_INTERVAL
    );

    let mut stdout = tokio::io::stdout();

    tokio::select! {
        result = reader.drain(&mut stdout) => {
            let summary = result?;
            info!("Peer closed the connection after {} bytes", summary.bytes);
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
        }
    }

    Ok(())
}
