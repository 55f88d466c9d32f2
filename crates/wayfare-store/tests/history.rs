//! `TripHistory` against the on-disk `FileStore`.

use chrono::{NaiveDate, Utc};
use tempfile::TempDir;
use wayfare_core::{DayPlan, TripRecord};
use wayfare_store::{FileStore, KeyValueStore, TripHistory, HISTORY_KEY, MAX_TRIPS};

fn make_trip(id: &str) -> TripRecord {
    TripRecord {
        id: id.to_string(),
        origin: None,
        destination: "Sydney".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 11, 4).unwrap(),
        budget: 2000.0,
        interests: vec![],
        weather_summary: "Sunny, 24°C".to_string(),
        cost_estimate: 1700.0,
        itinerary: vec![DayPlan {
            day: 1,
            activity_label: "Opera House tour".to_string(),
            description: Some("Enjoy a full day of opera house tour".to_string()),
        }],
        created_at: Utc::now(),
    }
}

#[test]
fn history_survives_reopening_the_data_dir() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    {
        let mut history = TripHistory::new(FileStore::open(root).unwrap());
        history.insert(make_trip("a")).unwrap();
        history.insert(make_trip("b")).unwrap();
    }

    let history = TripHistory::new(FileStore::open(root).unwrap());
    let ids: Vec<String> = history.list().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["b", "a"]);

}

#[test]
fn cap_holds_on_disk() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let mut history = TripHistory::new(FileStore::open(root).unwrap());

    for n in 0..15 {
        history.insert(make_trip(&n.to_string())).unwrap();
    }

    let reopened = TripHistory::new(FileStore::open(root).unwrap());
    let ids: Vec<String> = reopened.list().into_iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), MAX_TRIPS);
    assert_eq!(ids.first().map(String::as_str), Some("14"));
    assert_eq!(ids.last().map(String::as_str), Some("5"));

}

#[test]
fn clear_removes_the_blob_file() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let mut history = TripHistory::new(FileStore::open(root).unwrap());
    history.insert(make_trip("x")).unwrap();
    assert!(history.store().get(HISTORY_KEY).unwrap().is_some());

    history.clear().unwrap();
    assert!(history.store().get(HISTORY_KEY).unwrap().is_none());
    assert!(!root.join(format!("{HISTORY_KEY}.json")).exists());

}

#[test]
fn hand_edited_garbage_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let mut store = FileStore::open(root).unwrap();
    store.set(HISTORY_KEY, "definitely not json").unwrap();

    let mut history = TripHistory::new(store);
    assert!(history.list().is_empty());

    history.insert(make_trip("fresh")).unwrap();
    assert_eq!(history.list().len(), 1);

}
