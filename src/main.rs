//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_shotchart::{
    cli::{Commands, GetCmd, ShotChart},
    commands::{players::handle_players, shots::handle_shots},
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = ShotChart::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Shots {
                target,
                season,
                playoffs,
                json,
            } => handle_shots(target, season, playoffs, json)
                .await
                .context("failed to load shot chart data")?,

            GetCmd::Players {
                search,
                limit,
                json,
            } => handle_players(search, limit, json)
                .await
                .context("failed to list players")?,
        },
    }

    Ok(())
}
