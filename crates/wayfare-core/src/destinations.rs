//! Destination and interest catalog used by the local itinerary generator.
//!
//! The built-in catalog covers eight cities and six interest categories. A
//! replacement can be supplied as YAML:
//!
//! ```yaml
//! default_destination: paris
//! destinations:
//!   paris:
//!     weather: "Partly Cloudy, 18°C"
//!     activities: ["Visit Eiffel Tower", "Louvre Museum tour"]
//! interests:
//!   food: ["Food market tour", "Cooking class"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const BUILTIN_DEFAULT: &str = "paris";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationProfile {
    pub weather: String,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationCatalog {
    /// Key used when a requested destination is not in the catalog.
    #[serde(default = "builtin_default_key")]
    pub default_destination: String,
    pub destinations: BTreeMap<String, DestinationProfile>,
    #[serde(default)]
    pub interests: BTreeMap<String, Vec<String>>,
}

fn builtin_default_key() -> String {
    BUILTIN_DEFAULT.to_string()
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DestinationCatalog {
    /// The catalog shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        let destinations = [
            (
                "paris",
                "Partly Cloudy, 18°C",
                ["Visit Eiffel Tower", "Louvre Museum tour", "Seine River cruise"],
            ),
            (
                "tokyo",
                "Clear, 22°C",
                [
                    "Explore Shibuya district",
                    "Visit Senso-ji Temple",
                    "Tsukiji Fish Market",
                ],
            ),
            (
                "bali",
                "Sunny, 28°C",
                [
                    "Beach relaxation at Seminyak",
                    "Ubud rice terraces",
                    "Traditional Balinese spa",
                ],
            ),
            (
                "newyork",
                "Sunny, 15°C",
                [
                    "Central Park walk",
                    "Statue of Liberty visit",
                    "Broadway show",
                ],
            ),
            (
                "london",
                "Rainy, 12°C",
                ["British Museum", "Tower of London", "Thames River walk"],
            ),
            (
                "dubai",
                "Hot, 35°C",
                ["Burj Khalifa visit", "Desert safari", "Dubai Mall shopping"],
            ),
            (
                "rome",
                "Warm, 25°C",
                ["Colosseum tour", "Vatican Museums", "Trevi Fountain visit"],
            ),
            (
                "sydney",
                "Sunny, 24°C",
                ["Opera House tour", "Bondi Beach", "Harbour Bridge climb"],
            ),
        ]
        .into_iter()
        .map(|(key, weather, activities)| {
            (
                key.to_string(),
                DestinationProfile {
                    weather: weather.to_string(),
                    activities: activities.iter().map(ToString::to_string).collect(),
                },
            )
        })
        .collect();

        let interests = [
            (
                "adventure",
                [
                    "Hiking expedition",
                    "Zip-lining adventure",
                    "Scuba diving",
                    "Rock climbing",
                ],
            ),
            (
                "culture",
                [
                    "Local museum visit",
                    "Traditional dance performance",
                    "Historical site tour",
                    "Art gallery exploration",
                ],
            ),
            (
                "relaxation",
                [
                    "Spa day",
                    "Beach lounging",
                    "Sunset yoga",
                    "Meditation retreat",
                ],
            ),
            (
                "food",
                [
                    "Food market tour",
                    "Cooking class",
                    "Wine tasting",
                    "Street food exploration",
                ],
            ),
            (
                "nature",
                [
                    "National park visit",
                    "Wildlife safari",
                    "Botanical gardens",
                    "Mountain trekking",
                ],
            ),
            (
                "shopping",
                [
                    "Local markets",
                    "Designer boutiques",
                    "Souvenir hunting",
                    "Craft workshops",
                ],
            ),
        ]
        .into_iter()
        .map(|(key, activities)| {
            (
                key.to_string(),
                activities.iter().map(ToString::to_string).collect(),
            )
        })
        .collect();

        Self {
            default_destination: builtin_default_key(),
            destinations,
            interests,
        }
    }

    /// Normalizes a free-form destination name into a catalog key:
    /// lowercased with all whitespace removed (`"New York"` → `"newyork"`).
    #[must_use]
    pub fn destination_key(name: &str) -> String {
        name.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// Returns the profile for `destination`, falling back to the default
    /// destination's profile for unknown names.
    #[must_use]
    pub fn lookup(&self, destination: &str) -> Option<&DestinationProfile> {
        self.destinations
            .get(&Self::destination_key(destination))
            .or_else(|| self.destinations.get(&self.default_destination))
    }

    /// Returns `true` if `destination` has its own catalog entry.
    #[must_use]
    pub fn contains(&self, destination: &str) -> bool {
        self.destinations
            .contains_key(&Self::destination_key(destination))
    }

    /// Activities associated with an interest category, if known.
    #[must_use]
    pub fn interest_activities(&self, interest: &str) -> Option<&[String]> {
        self.interests
            .get(&interest.trim().to_lowercase())
            .map(Vec::as_slice)
            .filter(|activities| !activities.is_empty())
    }
}

/// Load and validate a destination catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_destinations(path: &Path) -> Result<DestinationCatalog, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::DestinationsFileIo {
            path: path.display().to_string(),
            source: e,
        })?;

    let catalog: DestinationCatalog = serde_yaml::from_str(&content)?;
    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &DestinationCatalog) -> Result<(), ConfigError> {
    if catalog.destinations.is_empty() {
        return Err(ConfigError::Validation(
            "at least one destination is required".to_string(),
        ));
    }

    for (key, profile) in &catalog.destinations {
        let normalized = DestinationCatalog::destination_key(key);
        if normalized != *key {
            return Err(ConfigError::Validation(format!(
                "destination key '{key}' must be lowercase without whitespace (expected '{normalized}')"
            )));
        }
        if profile.weather.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "destination '{key}' has an empty weather summary"
            )));
        }
        if profile.activities.iter().all(|a| a.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "destination '{key}' must list at least one activity"
            )));
        }
    }

    if !catalog
        .destinations
        .contains_key(&catalog.default_destination)
    {
        return Err(ConfigError::Validation(format!(
            "default destination '{}' is not in the catalog",
            catalog.default_destination
        )));
    }

    for (interest, activities) in &catalog.interests {
        let normalized = interest.trim().to_lowercase();
        if normalized != *interest {
            return Err(ConfigError::Validation(format!(
                "interest key '{interest}' must be lowercase and trimmed (expected '{normalized}')"
            )));
        }
        if activities.is_empty() {
            return Err(ConfigError::Validation(format!(
                "interest '{interest}' must list at least one activity"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "destinations_test.rs"]
mod tests;
