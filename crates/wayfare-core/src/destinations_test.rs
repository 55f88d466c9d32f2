use std::io::Write as _;

use tempfile::NamedTempFile;

use super::*;

fn write_temp_yaml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be creatable");
    file.write_all(contents.as_bytes())
        .expect("temp file should be writable");
    file
}

#[test]
fn destination_key_strips_whitespace_and_lowercases() {
    assert_eq!(DestinationCatalog::destination_key("New York"), "newyork");
    assert_eq!(DestinationCatalog::destination_key("  TOKYO "), "tokyo");
}

#[test]
fn builtin_catalog_passes_validation() {
    let catalog = DestinationCatalog::builtin();
    assert!(validate_catalog(&catalog).is_ok());
    assert_eq!(catalog.destinations.len(), 8);
    assert_eq!(catalog.interests.len(), 6);
}

#[test]
fn lookup_known_destination() {
    let catalog = DestinationCatalog::builtin();
    let profile = catalog.lookup("Tokyo").unwrap();
    assert_eq!(profile.weather, "Clear, 22°C");
    assert!(catalog.contains("new york"));
}

#[test]
fn lookup_unknown_destination_falls_back_to_default() {
    let catalog = DestinationCatalog::builtin();
    let profile = catalog.lookup("Reykjavik").unwrap();
    assert_eq!(profile.weather, "Partly Cloudy, 18°C");
    assert!(!catalog.contains("Reykjavik"));
}

#[test]
fn interest_activities_case_insensitive() {
    let catalog = DestinationCatalog::builtin();
    let food = catalog.interest_activities(" Food ").unwrap();
    assert!(food.contains(&"Cooking class".to_string()));
    assert!(catalog.interest_activities("skydiving").is_none());
}

#[test]
fn validate_rejects_missing_default() {
    let mut catalog = DestinationCatalog::builtin();
    catalog.default_destination = "atlantis".to_string();
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("atlantis"), "got: {err}");
}

#[test]
fn validate_rejects_non_normalized_key() {
    let mut catalog = DestinationCatalog::builtin();
    let profile = catalog.destinations["rome"].clone();
    catalog.destinations.insert("New Delhi".to_string(), profile);
    assert!(matches!(
        validate_catalog(&catalog),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn validate_rejects_mixed_case_interest_key() {
    let mut catalog = DestinationCatalog::builtin();
    catalog
        .interests
        .insert("Food".to_string(), vec!["Street food crawl".to_string()]);
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("'Food'"), "got: {err}");
}

#[test]
fn load_destinations_rejects_padded_interest_key() {
    let file = write_temp_yaml(
        r#"
default_destination: lisbon
destinations:
  lisbon:
    weather: "Mild, 20°C"
    activities: ["Belem Tower"]
interests:
  " food ": ["Pastel de nata tasting"]
"#,
    );
    assert!(matches!(
        load_destinations(file.path()),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn validate_rejects_destination_without_activities() {
    let mut catalog = DestinationCatalog::builtin();
    if let Some(profile) = catalog.destinations.get_mut("rome") {
        profile.activities = vec!["  ".to_string()];
    }
    assert!(validate_catalog(&catalog).is_err());
}

#[test]
fn load_destinations_reads_yaml_file() {
    let file = write_temp_yaml(
        r#"
default_destination: lisbon
destinations:
  lisbon:
    weather: "Mild, 20°C"
    activities: ["Tram 28 ride", "Belem Tower"]
interests:
  food: ["Pastel de nata tasting"]
"#,
    );

    let catalog = load_destinations(file.path()).expect("catalog should load");

    assert_eq!(catalog.default_destination, "lisbon");
    assert_eq!(catalog.lookup("Anywhere").unwrap().weather, "Mild, 20°C");
    assert_eq!(
        catalog.interest_activities("food").unwrap(),
        &["Pastel de nata tasting".to_string()]
    );
}

#[test]
fn load_destinations_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.yaml");
    assert!(matches!(
        load_destinations(&path),
        Err(ConfigError::DestinationsFileIo { .. })
    ));
}

#[test]
fn load_destinations_malformed_yaml_is_parse_error() {
    let file = write_temp_yaml("destinations: [not, a, map]");
    let result = load_destinations(file.path());
    assert!(matches!(result, Err(ConfigError::DestinationsFileParse(_))));
}
