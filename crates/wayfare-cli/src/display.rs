//! Plain-text rendering of trips for the terminal.

use std::fmt::Write as _;

use wayfare_core::TripRecord;

pub(crate) fn print_trip(trip: &TripRecord) {
    print!("{}", render_trip(trip));
}

pub(crate) fn print_trip_table(trips: &[TripRecord]) {
    print!("{}", render_trip_table(trips));
}

fn render_trip(trip: &TripRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Trip {}: {}", trip.id, trip.destination);
    if let Some(origin) = &trip.origin {
        let _ = writeln!(out, "From:      {origin}");
    }
    let _ = writeln!(
        out,
        "Dates:     {} to {} ({} days)",
        trip.start_date,
        trip.end_date,
        trip.duration_days()
    );
    let _ = writeln!(
        out,
        "Budget:    {}  (estimated cost {})",
        fmt_money(trip.budget),
        fmt_money(trip.cost_estimate)
    );
    let _ = writeln!(out, "Weather:   {}", trip.weather_summary);
    if !trip.interests.is_empty() {
        let _ = writeln!(out, "Interests: {}", trip.interests.join(", "));
    }
    let _ = writeln!(out, "Created:   {}", trip.created_at.format("%Y-%m-%d %H:%M UTC"));

    if trip.itinerary.is_empty() {
        let _ = writeln!(out, "\nNo itinerary.");
        return out;
    }
    let _ = writeln!(out, "\nItinerary:");
    for day in &trip.itinerary {
        let _ = writeln!(out, "  Day {:<3} {}", day.day, day.activity_label);
        if let Some(description) = &day.description {
            let _ = writeln!(out, "          {description}");
        }
    }
    out
}

fn render_trip_table(trips: &[TripRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16}{:<20}{:<25}{:>10}",
        "ID", "DESTINATION", "DATES", "COST"
    );
    for trip in trips {
        let _ = writeln!(
            out,
            "{:<16}{:<20}{:<25}{:>10}",
            truncate(&trip.id, 15),
            truncate(&trip.destination, 19),
            format!("{} to {}", trip.start_date, trip.end_date),
            fmt_money(trip.cost_estimate)
        );
    }
    out
}

fn fmt_money(amount: f64) -> String {
    format!("${amount:.0}")
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}
