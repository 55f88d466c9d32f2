//! `wayfare plan`: build a trip, save it to history, print it.

use chrono::NaiveDate;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wayfare_api::PlannerClient;
use wayfare_core::{AppConfig, DestinationCatalog, TripFormInput, TripRecord};
use wayfare_store::{KeyValueStore, TripHistory};

use crate::display;

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Destination city (e.g., Tokyo)
    #[arg(long)]
    pub destination: String,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,
    /// Last day of the trip, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,
    /// Total budget
    #[arg(long)]
    pub budget: f64,
    /// Interest to plan around; repeat for several
    #[arg(long = "interest")]
    pub interests: Vec<String>,
    /// Where the trip starts from
    #[arg(long)]
    pub origin: Option<String>,
    #[arg(long, default_value = "1")]
    pub travelers: u32,
    /// Ask the planning service instead of generating locally
    #[arg(long)]
    pub remote: bool,
    /// Seed for the local generator (overrides WAYFARE_SYNTH_SEED)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Do not add the trip to history
    #[arg(long)]
    pub no_save: bool,
    /// Print the trip as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    fn to_form(&self) -> TripFormInput {
        let mut form = TripFormInput::new(
            self.destination.trim(),
            self.start,
            self.end,
            self.budget,
            self.interests
                .iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect(),
        );
        form.origin = self
            .origin
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string);
        form.travelers = self.travelers;
        form
    }
}

/// Plans a trip and, unless `--no-save`, prepends it to the history.
///
/// A failed history write is reported as a warning; the planned trip is
/// still printed.
///
/// # Errors
///
/// Returns an error if the form is invalid, the planning service fails, or
/// output cannot be encoded.
pub(crate) async fn run_plan<S: KeyValueStore>(
    config: &AppConfig,
    catalog: &DestinationCatalog,
    history: &mut TripHistory<S>,
    args: PlanArgs,
) -> anyhow::Result<()> {
    let form = args.to_form();
    form.validate()?;

    let trip = if args.remote {
        let client = PlannerClient::from_config(config)?;
        tracing::info!(
            base_url = %client.base_url(),
            destination = %form.destination,
            "requesting trip plan"
        );
        client.plan_trip(&form).await?
    } else {
        plan_with_seed(&form, catalog, args.seed.or(config.synth_seed))?
    };

    if !args.no_save {
        if let Err(error) = history.insert(trip.clone()) {
            tracing::warn!(%error, trip_id = %trip.id, "could not save trip to history");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trip)?);
    } else {
        display::print_trip(&trip);
    }
    Ok(())
}

/// Runs the local generator with a seeded RNG when a seed is given.
fn plan_with_seed(
    form: &TripFormInput,
    catalog: &DestinationCatalog,
    seed: Option<u64>,
) -> anyhow::Result<TripRecord> {
    if !catalog.contains(&form.destination) {
        tracing::debug!(
            destination = %form.destination,
            "destination not in catalog; using default profile"
        );
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    Ok(wayfare_planner::plan_locally(form, catalog, &mut rng)?)
}
