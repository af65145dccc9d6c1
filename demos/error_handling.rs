//! Error handling example for tripmap-rs
//!
//! This example demonstrates the failure paths: unmapped boundaries,
//! backend request failures surfacing as transient notices, superseded
//! loads, and the degraded fallback mode after an init timeout.

use std::time::Duration;
use tripmap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== tripmap-rs Error Handling Example ===\n");

    // Example 1: Unmapped boundaries are not errors
    println!("--- Example 1: Unmapped boundary ---");
    let countries = vec![Country {
        id: 1,
        code: "US".into(),
        name: "United States".into(),
        status: VisitStatus::Visited,
        visited_date: Some("2023-08-14".into()),
    }];
    let registry = Registry::with_builtin_aliases(&countries);
    match registry.resolve("Atlantis") {
        Some(c) => println!("Resolved: {}", c.name()),
        None => println!("\"Atlantis\" is unmapped; it renders with the neutral default style"),
    }
    let style = style_for(None, None);
    println!(
        "Neutral style: fill={} opacity={}",
        style.fill_color, style.fill_opacity
    );
    println!();

    // Example 2: Backend failure becomes a transient notice
    println!("--- Example 2: Backend failure ---");
    let mut view = MapView::new();
    let ticket = view.begin_load(QueryKey::Countries);
    view.complete_countries(ticket, Err("503 Service Unavailable".into()));
    for notice in view.take_notices() {
        println!("[{:?}] {}", notice.kind, notice.message);
    }
    println!();

    // Example 3: A superseded load is discarded, not applied
    println!("--- Example 3: Stale response discarded ---");
    let first = view.begin_load(QueryKey::Countries);
    let second = view.begin_load(QueryKey::Countries);
    let applied = view.complete_countries(second, Ok(countries.clone()));
    println!("Current load applied: {applied}");
    let applied = view.complete_countries(first, Ok(vec![]));
    println!("Stale load applied: {applied}");
    println!();

    // Example 4: Init timeout degrades the map instead of erroring
    println!("--- Example 4: Degraded fallback mode ---");
    view.begin_init(Duration::from_secs(10));
    view.tick(Duration::from_secs(11));
    println!("Init state: {:?}", view.init_state());
    println!("Degraded: {}", view.is_degraded());
    match view.fallback_pass() {
        Some(styles) => println!("Fallback map styles {} countries", styles.len()),
        None => println!("Fallback map waits for the country list"),
    }

    // Example 5: Malformed boundary payloads
    println!("\n--- Example 5: Malformed boundary payload ---");
    let bogus = serde_json::json!({ "type": "Feature" });
    match boundary::parse_feature_collection(&bogus) {
        Ok(_) => println!("Parsed unexpectedly"),
        Err(e) => println!("Rejected: {e}"),
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
