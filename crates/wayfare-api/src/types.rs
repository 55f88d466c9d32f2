//! Request bodies sent to the planning service.
//!
//! The service expects snake_case keys, a traveler count, and the interests
//! twice: once at the top level and once inside `preferences` together with
//! the budget and a travel style.

use chrono::NaiveDate;
use serde::Serialize;
use wayfare_core::TripFormInput;

/// Travel style sent when the user has not chosen one.
pub const DEFAULT_TRAVEL_STYLE: &str = "cultural";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRequest {
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub travelers: u32,
    pub preferences: TripPreferences,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPreferences {
    pub interests: Vec<String>,
    pub budget_range: f64,
    pub travel_style: String,
}

impl From<&TripFormInput> for TripRequest {
    fn from(form: &TripFormInput) -> Self {
        Self {
            destination: form.destination.clone(),
            origin: form.origin.clone(),
            start_date: form.start_date,
            end_date: form.end_date,
            budget: form.budget,
            travelers: form.travelers.max(1),
            preferences: TripPreferences {
                interests: form.interests.clone(),
                budget_range: form.budget,
                travel_style: DEFAULT_TRAVEL_STYLE.to_string(),
            },
            interests: form.interests.clone(),
        }
    }
}
