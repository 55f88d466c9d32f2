//! `wayfare history`: the local recent-trips list.

use clap::Subcommand;
use wayfare_store::{KeyValueStore, TripHistory, MAX_TRIPS};

use crate::display;

#[derive(Debug, Subcommand)]
pub enum HistoryCommands {
    /// List saved trips, most recent first
    List {
        /// Print the trips as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one saved trip
    Show {
        id: String,
        /// Print the trip as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove one saved trip
    Remove { id: String },
    /// Remove every saved trip
    Clear,
}

/// # Errors
///
/// Returns an error if the trip is unknown, the history cannot be written,
/// or JSON output cannot be encoded.
pub(crate) fn run_history<S: KeyValueStore>(
    history: &mut TripHistory<S>,
    command: HistoryCommands,
) -> anyhow::Result<()> {
    match command {
        HistoryCommands::List { json } => {
            let trips = history.list();
            if json {
                println!("{}", serde_json::to_string_pretty(&trips)?);
            } else if trips.is_empty() {
                println!("no saved trips; run `wayfare plan` first");
            } else {
                display::print_trip_table(&trips);
                println!("\n{} of {MAX_TRIPS} slots used", trips.len());
            }
        }
        HistoryCommands::Show { id, json } => {
            let trip = history
                .get(&id)
                .ok_or_else(|| anyhow::anyhow!("no saved trip with id '{id}'"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&trip)?);
            } else {
                display::print_trip(&trip);
            }
        }
        HistoryCommands::Remove { id } => {
            if history.remove(&id)? {
                println!("removed trip {id}");
            } else {
                anyhow::bail!("no saved trip with id '{id}'");
            }
        }
        HistoryCommands::Clear => {
            history.clear()?;
            println!("trip history cleared");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use wayfare_core::TripRecord;
    use wayfare_store::MemoryStore;

    use super::*;

    fn trip(id: &str) -> TripRecord {
        TripRecord {
            id: id.to_string(),
            origin: None,
            destination: "Rome".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
            budget: 500.0,
            interests: vec![],
            weather_summary: "Sunny, 25°C".to_string(),
            cost_estimate: 350.0,
            itinerary: vec![],
            created_at: Utc::now(),
        }
    }

    fn seeded() -> TripHistory<MemoryStore> {
        let mut history = TripHistory::new(MemoryStore::new());
        history.insert(trip("a")).unwrap();
        history.insert(trip("b")).unwrap();
        history
    }

    #[test]
    fn remove_known_trip() {
        let mut history = seeded();
        run_history(&mut history, HistoryCommands::Remove { id: "a".to_string() }).unwrap();
        let ids: Vec<String> = history.list().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn remove_unknown_trip_is_an_error() {
        let mut history = seeded();
        let err = run_history(&mut history, HistoryCommands::Remove { id: "zzz".to_string() })
            .unwrap_err();
        assert!(err.to_string().contains("zzz"));
        assert_eq!(history.list().len(), 2);
    }

    #[test]
    fn show_unknown_trip_is_an_error() {
        let mut history = seeded();
        let result = run_history(
            &mut history,
            HistoryCommands::Show {
                id: "nope".to_string(),
                json: false,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn clear_empties_history() {
        let mut history = seeded();
        run_history(&mut history, HistoryCommands::Clear).unwrap();
        assert!(history.list().is_empty());
        run_history(&mut history, HistoryCommands::List { json: true }).unwrap();
    }
}
