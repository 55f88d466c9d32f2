//! `wayfare remote`: direct access to the planning service's stored trips.

use clap::Subcommand;
use wayfare_api::PlannerClient;

use crate::display;

#[derive(Debug, Subcommand)]
pub enum RemoteCommands {
    /// List trips stored on the planning service
    List {
        #[arg(long, default_value = "0")]
        skip: u32,
        #[arg(long, default_value = "100")]
        limit: u32,
        /// Print the trips as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one stored trip
    Show {
        id: String,
        /// Print the trip as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete one stored trip
    Delete { id: String },
    /// Check that the planning service is up
    Health,
}

/// # Errors
///
/// Returns an error if the planning service request fails or JSON output
/// cannot be encoded.
pub(crate) async fn run_remote(
    client: &PlannerClient,
    command: RemoteCommands,
) -> anyhow::Result<()> {
    match command {
        RemoteCommands::List { skip, limit, json } => {
            let trips = client.list_trips(skip, limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&trips)?);
            } else if trips.is_empty() {
                println!("no trips stored on {}", client.base_url());
            } else {
                display::print_trip_table(&trips);
            }
        }
        RemoteCommands::Show { id, json } => {
            let trip = client.get_trip(&id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&trip)?);
            } else {
                display::print_trip(&trip);
            }
        }
        RemoteCommands::Delete { id } => {
            client.delete_trip(&id).await?;
            println!("deleted remote trip {id}");
        }
        RemoteCommands::Health => {
            let status = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}
