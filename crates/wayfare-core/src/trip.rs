use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A planned trip in its canonical, fully-populated shape.
///
/// This is both the display model and the unit of persistence: the history
/// store serializes a `Vec<TripRecord>` as a single JSON array with
/// camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    /// Creation timestamp in epoch milliseconds, or the server's numeric id
    /// rendered as a string.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// User-declared spending ceiling. Never negative.
    pub budget: f64,
    pub interests: Vec<String>,
    pub weather_summary: String,
    /// Never negative.
    pub cost_estimate: f64,
    /// Sorted ascending by [`DayPlan::day`].
    pub itinerary: Vec<DayPlan>,
    pub created_at: DateTime<Utc>,
}

impl TripRecord {
    /// Inclusive number of calendar days covered by the trip, or `0` when the
    /// end date precedes the start date.
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        inclusive_days(self.start_date, self.end_date)
    }
}

/// One day of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-indexed day number.
    pub day: u32,
    pub activity_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The user's trip request as collected by a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripFormInput {
    pub destination: String,
    #[serde(default)]
    pub origin: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
}

fn default_travelers() -> u32 {
    1
}

impl TripFormInput {
    /// Builds a request for a single traveler with no origin.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: f64,
        interests: Vec<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            origin: None,
            start_date,
            end_date,
            budget,
            interests,
            travelers: default_travelers(),
        }
    }

    /// Inclusive number of calendar days requested.
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        inclusive_days(self.start_date, self.end_date)
    }

    /// Checks the request the way the planning form does before submitting.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidForm`] for an empty destination, a
    /// negative or non-finite budget, zero travelers, or an end date before
    /// the start date.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.destination.trim().is_empty() {
            return Err(CoreError::InvalidForm(
                "destination must be non-empty".to_string(),
            ));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(CoreError::InvalidForm(format!(
                "budget must be a non-negative number, got {}",
                self.budget
            )));
        }
        if self.travelers == 0 {
            return Err(CoreError::InvalidForm(
                "at least one traveler is required".to_string(),
            ));
        }
        if self.end_date < self.start_date {
            return Err(CoreError::InvalidForm(format!(
                "end date {} is before start date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }
}

fn inclusive_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let span = (end - start).num_days();
    if span < 0 {
        0
    } else {
        u32::try_from(span + 1).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tokyo_form() -> TripFormInput {
        TripFormInput::new(
            "Tokyo",
            date(2025, 3, 1),
            date(2025, 3, 5),
            1000.0,
            vec!["food".to_string()],
        )
    }

    #[test]
    fn duration_is_inclusive() {
        assert_eq!(tokyo_form().duration_days(), 5);
    }

    #[test]
    fn duration_same_day_is_one() {
        let mut form = tokyo_form();
        form.end_date = form.start_date;
        assert_eq!(form.duration_days(), 1);
    }

    #[test]
    fn duration_inverted_range_is_zero() {
        let mut form = tokyo_form();
        form.end_date = date(2025, 2, 1);
        assert_eq!(form.duration_days(), 0);
    }

    #[test]
    fn validate_accepts_well_formed_request() {
        assert!(tokyo_form().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_destination() {
        let mut form = tokyo_form();
        form.destination = "   ".to_string();
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("destination"), "got: {err}");
    }

    #[test]
    fn validate_rejects_negative_budget() {
        let mut form = tokyo_form();
        form.budget = -1.0;
        assert!(matches!(form.validate(), Err(CoreError::InvalidForm(_))));
    }

    #[test]
    fn validate_rejects_nan_budget() {
        let mut form = tokyo_form();
        form.budget = f64::NAN;
        assert!(form.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_dates() {
        let mut form = tokyo_form();
        form.end_date = date(2025, 2, 28);
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("before start date"), "got: {err}");
    }

    #[test]
    fn trip_record_serializes_with_camel_case_keys() {
        let trip = TripRecord {
            id: "1".to_string(),
            origin: None,
            destination: "Rome".to_string(),
            start_date: date(2025, 5, 1),
            end_date: date(2025, 5, 2),
            budget: 800.0,
            interests: vec![],
            weather_summary: "Warm, 25°C".to_string(),
            cost_estimate: 650.0,
            itinerary: vec![DayPlan {
                day: 1,
                activity_label: "Colosseum tour".to_string(),
                description: None,
            }],
            created_at: DateTime::parse_from_rfc3339("2025-04-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let value = serde_json::to_value(&trip).unwrap();
        assert_eq!(value["startDate"], "2025-05-01");
        assert_eq!(value["weatherSummary"], "Warm, 25°C");
        assert_eq!(value["itinerary"][0]["activityLabel"], "Colosseum tour");
        assert!(value.get("origin").is_none());
        assert!(value["itinerary"][0].get("description").is_none());
        assert_eq!(trip.duration_days(), 2);
    }

    #[test]
    fn form_input_defaults_travelers_when_absent() {
        let form: TripFormInput = serde_json::from_value(serde_json::json!({
            "destination": "Bali",
            "startDate": "2025-07-01",
            "endDate": "2025-07-03",
            "budget": 1500
        }))
        .unwrap();
        assert_eq!(form.travelers, 1);
        assert!(form.interests.is_empty());
    }
}
