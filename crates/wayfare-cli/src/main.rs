mod display;
mod history;
mod plan;
mod remote;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wayfare_core::{AppConfig, DestinationCatalog};
use wayfare_store::{FileStore, TripHistory};

use crate::history::HistoryCommands;
use crate::plan::PlanArgs;
use crate::remote::RemoteCommands;

#[derive(Debug, Parser)]
#[command(name = "wayfare")]
#[command(about = "Plan trips and keep a short history of them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Plan a trip locally or with the planning service
    Plan(PlanArgs),
    /// Inspect the recent-trips history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Talk to the planning service directly
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = wayfare_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan(args) => {
            let catalog = load_catalog(&config)?;
            let mut history = open_history(&config)?;
            plan::run_plan(&config, &catalog, &mut history, args).await?;
        }
        Commands::History { command } => {
            let mut history = open_history(&config)?;
            history::run_history(&mut history, command)?;
        }
        Commands::Remote { command } => {
            let client = wayfare_api::PlannerClient::from_config(&config)?;
            remote::run_remote(&client, command).await?;
        }
    }

    Ok(())
}

fn open_history(config: &AppConfig) -> anyhow::Result<TripHistory<FileStore>> {
    let store = FileStore::open(&config.data_dir)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "opened trip history");
    Ok(TripHistory::new(store))
}

fn load_catalog(config: &AppConfig) -> anyhow::Result<DestinationCatalog> {
    match &config.destinations_path {
        Some(path) => {
            let catalog = wayfare_core::load_destinations(path)?;
            tracing::debug!(
                path = %path.display(),
                destinations = catalog.destinations.len(),
                "loaded destination catalog"
            );
            Ok(catalog)
        }
        None => Ok(DestinationCatalog::builtin()),
    }
}

#[cfg(test)]
mod tests;
