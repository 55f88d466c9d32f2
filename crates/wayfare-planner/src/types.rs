//! Boundary types for trip payloads.
//!
//! Two producers feed the normalizer and they disagree on almost everything:
//!
//! ### Local generator
//! camelCase keys, string `id`, a flat `costEstimate`, a `weather` string and
//! per-day `{ day, activity, description }` entries.
//!
//! ### Remote planning service
//! snake_case keys, numeric `id`, no `interests`, the itinerary nested under
//! `plan.itinerary` (or `plan.daily_plan`), a `cost_breakdown` object whose
//! total is spelled `total` or `total_cost`, and per-day entries that carry
//! `morning` / `afternoon` / `evening` either as plain strings or as blocks
//! like `{ "activities": ["Louvre"], "description": "..." }`.
//!
//! Every field is optional here, and a field of the wrong type reads as
//! absent. The itinerary is the exception: it must be an array when present,
//! though entries that are not day objects are dropped. Numbers are accepted
//! as JSON numbers or numeric strings because the service has returned both.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A trip payload as received. Alternate spellings of a field are kept in
/// separate slots, since a payload may carry more than one of them; the
/// accessor methods pick between them in a fixed order.
#[derive(Debug, Default, Deserialize)]
pub struct RawTrip {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(default, rename = "startDate", deserialize_with = "lenient")]
    pub start_date_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub end_date: Option<String>,
    #[serde(default, rename = "endDate", deserialize_with = "lenient")]
    pub end_date_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub budget: Option<Numeric>,
    #[serde(default, deserialize_with = "lenient")]
    pub interests: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub weather: Option<String>,
    #[serde(default, rename = "weatherSummary", deserialize_with = "lenient")]
    pub weather_summary_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub weather_summary: Option<String>,
    #[serde(default, rename = "costEstimate", deserialize_with = "lenient")]
    pub cost_estimate_camel: Option<Numeric>,
    #[serde(default, deserialize_with = "lenient")]
    pub cost_estimate: Option<Numeric>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_estimated_cost: Option<Numeric>,
    #[serde(default, deserialize_with = "lenient")]
    pub cost_breakdown: Option<RawCostBreakdown>,
    #[serde(default, deserialize_with = "day_list")]
    pub itinerary: Option<Vec<RawDay>>,
    #[serde(default, deserialize_with = "day_list")]
    pub daily_plan: Option<Vec<RawDay>>,
    #[serde(default)]
    pub plan: Option<RawPlan>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default, rename = "createdAt", deserialize_with = "lenient")]
    pub created_at_camel: Option<String>,
}

impl RawTrip {
    /// Picks the first itinerary source present: top-level `itinerary`,
    /// then `plan.itinerary`, `plan.daily_plan`, top-level `daily_plan`.
    #[must_use]
    pub fn take_itinerary(&mut self) -> Vec<RawDay> {
        if let Some(days) = self.itinerary.take() {
            return days;
        }
        if let Some(RawPlan::Structured {
            itinerary,
            daily_plan,
        }) = self.plan.take()
        {
            if let Some(days) = itinerary.or(daily_plan) {
                return days;
            }
        }
        self.daily_plan.take().unwrap_or_default()
    }

    /// `start_date`, then `startDate`.
    #[must_use]
    pub fn start_date_candidates(&self) -> [Option<&str>; 2] {
        [self.start_date.as_deref(), self.start_date_camel.as_deref()]
    }

    /// `end_date`, then `endDate`.
    #[must_use]
    pub fn end_date_candidates(&self) -> [Option<&str>; 2] {
        [self.end_date.as_deref(), self.end_date_camel.as_deref()]
    }

    /// First non-blank of `weather`, `weatherSummary`, `weather_summary`.
    #[must_use]
    pub fn weather_text(&self) -> Option<String> {
        first_non_blank([
            &self.weather,
            &self.weather_summary_camel,
            &self.weather_summary,
        ])
    }

    /// First usable flat estimate: `costEstimate`, `cost_estimate`,
    /// `total_estimated_cost`.
    #[must_use]
    pub fn flat_cost(&self) -> Option<f64> {
        [
            self.cost_estimate_camel,
            self.cost_estimate,
            self.total_estimated_cost,
        ]
        .into_iter()
        .flatten()
        .find_map(Numeric::as_f64)
    }

    /// `created_at`, then `createdAt`.
    #[must_use]
    pub fn created_at_candidates(&self) -> [Option<&str>; 2] {
        [self.created_at.as_deref(), self.created_at_camel.as_deref()]
    }
}

/// Server ids are integers; locally generated ids are strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl RawId {
    /// Renders the id as a string, or `None` when it is blank.
    #[must_use]
    pub fn into_string(self) -> Option<String> {
        let rendered = match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s.trim().to_string(),
        };
        (!rendered.is_empty()).then_some(rendered)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(#[serde(deserialize_with = "parse_numeric_text")] Option<f64>),
}

fn parse_numeric_text<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse::<f64>().ok())
}

impl Numeric {
    /// The value as a finite `f64`, if it is one.
    #[must_use]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Numeric::Number(n) => Some(n),
            Numeric::Text(n) => n,
        }
        .filter(|n| n.is_finite())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCostBreakdown {
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<Numeric>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_cost: Option<Numeric>,
}

impl RawCostBreakdown {
    /// `total`, then `total_cost`.
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        [self.total, self.total_cost]
            .into_iter()
            .flatten()
            .find_map(Numeric::as_f64)
    }
}

/// The service's `plan` field: structured when it carries an itinerary,
/// anything else (free text from a language model, say) is ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawPlan {
    Structured {
        #[serde(default, deserialize_with = "day_list")]
        itinerary: Option<Vec<RawDay>>,
        #[serde(default, deserialize_with = "day_list")]
        daily_plan: Option<Vec<RawDay>>,
    },
    Other(Value),
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDay {
    #[serde(default, deserialize_with = "lenient")]
    pub day: Option<Numeric>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub activity: Option<String>,
    #[serde(default, rename = "activityLabel", deserialize_with = "lenient")]
    pub activity_label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning: Option<TimeSlot>,
    #[serde(default, deserialize_with = "lenient")]
    pub afternoon: Option<TimeSlot>,
    #[serde(default, deserialize_with = "lenient")]
    pub evening: Option<TimeSlot>,
}

impl RawDay {
    /// First non-blank of `title`, `activity`, `activityLabel`.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        first_non_blank([&self.title, &self.activity, &self.activity_label])
    }

    /// The day number when it is a positive integer.
    #[must_use]
    pub fn day_number(&self) -> Option<u32> {
        let n = self.day.and_then(Numeric::as_f64)?;
        if n < 1.0 || n.fract() > 0.0 || n > f64::from(u32::MAX) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let day = n as u32;
        Some(day)
    }

    /// Morning, afternoon and evening text in that order, trimmed, skipping
    /// absent or blank slots.
    #[must_use]
    pub fn slot_texts(&self) -> Vec<String> {
        [&self.morning, &self.afternoon, &self.evening]
            .into_iter()
            .flatten()
            .filter_map(TimeSlot::text)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TimeSlot {
    Text(String),
    Block {
        #[serde(default)]
        activities: Vec<SlotActivity>,
        #[serde(default)]
        activity: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SlotActivity {
    Name(String),
    Detailed {
        #[serde(default)]
        name: Option<String>,
    },
}

impl TimeSlot {
    /// A single line of text for this slot, or `None` when it says nothing.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let text = match self {
            TimeSlot::Text(s) => s.trim().to_string(),
            TimeSlot::Block {
                activities,
                activity,
                description,
            } => {
                let names: Vec<&str> = activities
                    .iter()
                    .filter_map(|a| match a {
                        SlotActivity::Name(n) => Some(n.trim()),
                        SlotActivity::Detailed { name } => name.as_deref().map(str::trim),
                    })
                    .filter(|n| !n.is_empty())
                    .collect();
                if names.is_empty() {
                    activity
                        .as_deref()
                        .or(description.as_deref())
                        .unwrap_or_default()
                        .trim()
                        .to_string()
                } else {
                    names.join(", ")
                }
            }
        };
        (!text.is_empty()).then_some(text)
    }
}

fn first_non_blank<const N: usize>(candidates: [&Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Decodes an optional leaf, turning a value of the wrong type into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Decodes a list of day entries. `null` is absent and entries that are not
/// day objects are dropped; anything other than an array is an error.
fn day_list<'de, D>(deserializer: D) -> Result<Option<Vec<RawDay>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(entries) => Ok(Some(
            entries
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|entry| RawDay::deserialize(entry).ok())
                .collect(),
        )),
        other => Err(D::Error::custom(format!(
            "expected an array of day entries, got {}",
            crate::normalize::json_kind(&other)
        ))),
    }
}
