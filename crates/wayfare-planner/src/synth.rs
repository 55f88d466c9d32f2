//! Local itinerary generator.
//!
//! Produces the same loosely-shaped payload the offline planner has always
//! produced and hands it to the normalizer, so locally planned trips and
//! service-planned trips take the same path into the history store.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde_json::{json, Value};
use wayfare_core::{DestinationCatalog, TripFormInput, TripRecord};

use crate::error::NormalizeError;
use crate::normalize::{normalize_at, PLACEHOLDER_WEATHER};

/// Longest itinerary the generator will lay out, regardless of trip length.
pub const MAX_SYNTH_DAYS: u32 = 7;

/// Flat per-trip overhead subtracted from the budget when estimating cost.
const COST_OVERHEAD: f64 = 150.0;
const COST_SHARE: f64 = 0.85;

/// Estimated spend for a budget: the lesser of `budget - 150` and 85% of the
/// budget, rounded, never below zero.
#[must_use]
pub fn estimate_cost(budget: f64) -> f64 {
    (budget - COST_OVERHEAD)
        .min(budget * COST_SHARE)
        .round()
        .max(0.0)
}

/// Builds a raw trip payload for `form` from the destination catalog.
///
/// Day `i` uses the destination's activities in rotation. When interests are
/// given, interest `i % len` is looked up and, if the catalog knows it, one of
/// its activities is drawn from `rng` instead. The id is the epoch-millisecond
/// time of `now` plus a random hex suffix.
pub fn synthesize<R: Rng>(
    form: &TripFormInput,
    catalog: &DestinationCatalog,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Value {
    let profile = catalog.lookup(&form.destination);
    let fallback_activity = format!("Explore {}", form.destination);
    let destination_activities: Vec<&str> = profile
        .map(|p| {
            p.activities
                .iter()
                .map(String::as_str)
                .filter(|a| !a.trim().is_empty())
                .collect()
        })
        .unwrap_or_default();
    let weather = profile.map_or(PLACEHOLDER_WEATHER, |p| p.weather.as_str());

    let day_count = form.duration_days().min(MAX_SYNTH_DAYS) as usize;
    let itinerary: Vec<Value> = (0..day_count)
        .map(|i| {
            let mut activity = if destination_activities.is_empty() {
                fallback_activity.as_str()
            } else {
                destination_activities[i % destination_activities.len()]
            };

            if !form.interests.is_empty() {
                let interest = &form.interests[i % form.interests.len()];
                if let Some(options) = catalog.interest_activities(interest) {
                    activity = options[rng.random_range(0..options.len())].as_str();
                }
            }

            json!({
                "day": i + 1,
                "activity": activity,
                "description": format!("Enjoy a full day of {}", activity.to_lowercase()),
            })
        })
        .collect();

    // Suffix keeps plans made in the same millisecond apart.
    let id = format!("{}-{:04x}", now.timestamp_millis(), rng.random::<u16>());

    json!({
        "id": id,
        "origin": form.origin,
        "destination": form.destination,
        "startDate": form.start_date.to_string(),
        "endDate": form.end_date.to_string(),
        "budget": form.budget,
        "interests": form.interests,
        "weather": weather,
        "costEstimate": estimate_cost(form.budget),
        "itinerary": itinerary,
        "createdAt": now.to_rfc3339(),
    })
}

/// Plans a trip without the remote service: [`synthesize`] then normalize.
///
/// # Errors
///
/// Returns [`NormalizeError`] only if the generated payload fails
/// normalization, which would indicate a generator bug.
pub fn plan_locally<R: Rng>(
    form: &TripFormInput,
    catalog: &DestinationCatalog,
    rng: &mut R,
) -> Result<TripRecord, NormalizeError> {
    let now = Utc::now();
    let raw = synthesize(form, catalog, rng, now);
    normalize_at(&raw, form, now)
}
