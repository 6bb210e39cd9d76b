use clap::{Parser, Subcommand};
use log::info;
use ptracker::clients::errors::Result;

use crate::tracker;

#[derive(Parser)]
#[command(name = "ptracker")]
#[command(version, about = "Record new additions to a Spotify playlist", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Track {},
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Track {} => {
            track_playlist().await?;
        }
    }
    Ok(())
}

async fn track_playlist() -> Result<()> {
    info!("Building config ...");
    let mut config = tracker::ConfigBuilder::new().build()?;
    info!("Authorizing client ...");
    config.spotify.authorize_client().await?;
    let tracker = tracker::Tracker::new(config);
    tracker.track().await
}
