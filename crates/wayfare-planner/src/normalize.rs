//! Normalization of raw trip payloads into [`TripRecord`].
//!
//! Every field of the output has a default, so a payload can only be
//! rejected for its overall shape, never for a missing field. The form the
//! user submitted fills the gaps the payload leaves (interests are never
//! echoed back by the service, for example).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use wayfare_core::{DayPlan, TripFormInput, TripRecord};

use crate::error::NormalizeError;
use crate::types::{RawCostBreakdown, RawDay, RawTrip};

/// Weather shown when the payload carries none. Real weather lookups belong
/// to the planning service.
pub const PLACEHOLDER_WEATHER: &str = "Sunny, 25°C";

/// Normalizes `raw` against the submitted `form`, stamping synthesized
/// values with the current time.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidResponseShape`] if `raw` is not a JSON
/// object or its itinerary is present but not an array.
pub fn normalize(raw: &Value, form: &TripFormInput) -> Result<TripRecord, NormalizeError> {
    normalize_at(raw, form, Utc::now())
}

/// Like [`normalize`] with an explicit clock. `now` becomes the `created_at`
/// and, in epoch milliseconds, the `id` when the payload provides neither.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidResponseShape`] if `raw` is not a JSON
/// object or its itinerary is present but not an array.
pub fn normalize_at(
    raw: &Value,
    form: &TripFormInput,
    now: DateTime<Utc>,
) -> Result<TripRecord, NormalizeError> {
    if !raw.is_object() {
        return Err(NormalizeError::InvalidResponseShape {
            reason: format!("expected a JSON object, got {}", json_kind(raw)),
        });
    }

    let trip = RawTrip::deserialize(raw).map_err(|e| NormalizeError::InvalidResponseShape {
        reason: e.to_string(),
    })?;

    Ok(from_raw(trip, form, now))
}

/// Builds a [`TripRecord`] from an already-decoded payload. Infallible: every
/// field falls back to the form or a fixed default.
#[must_use]
pub fn from_raw(mut raw: RawTrip, form: &TripFormInput, now: DateTime<Utc>) -> TripRecord {
    let days = raw.take_itinerary();

    let id = raw
        .id
        .take()
        .and_then(|id| id.into_string())
        .unwrap_or_else(|| now.timestamp_millis().to_string());

    let destination = non_blank(raw.destination.take()).unwrap_or_else(|| form.destination.clone());
    let origin = non_blank(raw.origin.take()).or_else(|| form.origin.clone());

    let start_date = first_date(raw.start_date_candidates()).unwrap_or(form.start_date);
    let end_date = first_date(raw.end_date_candidates()).unwrap_or(form.end_date);

    let raw_budget = raw.budget.and_then(|b| b.as_f64());
    let budget = non_negative(raw_budget.unwrap_or(form.budget));

    // Flat estimate (local generator), then the service's breakdown total,
    // then whichever budget is known.
    let cost_estimate = raw
        .flat_cost()
        .or_else(|| raw.cost_breakdown.as_ref().and_then(RawCostBreakdown::total))
        .or(raw_budget)
        .unwrap_or(form.budget);

    let weather_summary = raw
        .weather_text()
        .unwrap_or_else(|| PLACEHOLDER_WEATHER.to_string());

    let interests = if form.interests.is_empty() {
        raw.interests.take().unwrap_or_default()
    } else {
        form.interests.clone()
    };

    let created_at = raw
        .created_at_candidates()
        .into_iter()
        .flatten()
        .find_map(parse_timestamp)
        .unwrap_or(now);

    let itinerary = normalize_itinerary(days, &destination);

    TripRecord {
        id,
        origin,
        destination,
        start_date,
        end_date,
        budget,
        interests,
        weather_summary,
        cost_estimate: non_negative(cost_estimate),
        itinerary,
        created_at,
    }
}

/// Converts raw day entries into [`DayPlan`]s sorted by day.
///
/// Day numbers present in the input are kept as-is; entries without a
/// positive day number take their 1-based position. The sort is stable, so
/// entries sharing a day keep their input order.
#[must_use]
pub fn normalize_itinerary(days: Vec<RawDay>, destination: &str) -> Vec<DayPlan> {
    let mut plans: Vec<DayPlan> = days
        .into_iter()
        .enumerate()
        .map(|(idx, raw_day)| {
            let position = u32::try_from(idx + 1).unwrap_or(u32::MAX);
            let day = raw_day.day_number().unwrap_or(position);
            normalize_day(raw_day, day, destination)
        })
        .collect();

    plans.sort_by_key(|p| p.day);
    plans
}

fn normalize_day(raw_day: RawDay, day: u32, destination: &str) -> DayPlan {
    let slots = raw_day.slot_texts();

    let activity_label = raw_day.label().unwrap_or_else(|| format!("Day {day}"));

    let description = non_blank(raw_day.description)
        .or_else(|| (!slots.is_empty()).then(|| slots.join(" ")))
        .unwrap_or_else(|| format!("Enjoy your time in {destination}"));

    DayPlan {
        day,
        activity_label,
        description: Some(description),
    }
}

/// Parses a `"YYYY-MM-DD"` date, also accepting timestamps that start with one.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let prefix = s.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Parses an RFC 3339 timestamp. Timestamps without an offset (the service
/// emits these) are read as UTC; a bare date is read as UTC midnight.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn first_date(candidates: [Option<&str>; 2]) -> Option<NaiveDate> {
    candidates.into_iter().flatten().find_map(parse_date)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Clamps to zero; NaN also becomes zero.
fn non_negative(value: f64) -> f64 {
    value.max(0.0)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
