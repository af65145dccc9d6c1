//! Basic usage example for tripmap-rs
//!
//! This example demonstrates how to:
//! - Build a map view and feed it data
//! - Resolve boundary-dataset names to countries
//! - Compute paint styles and react to selection
//! - Read aggregate travel statistics

use tripmap_rs::prelude::*;

fn sample_countries() -> Vec<Country> {
    vec![
        Country {
            id: 1,
            code: "US".into(),
            name: "United States".into(),
            status: VisitStatus::Visited,
            visited_date: Some("2023-08-14".into()),
        },
        Country {
            id: 2,
            code: "FR".into(),
            name: "France".into(),
            status: VisitStatus::Upcoming,
            visited_date: None,
        },
        Country {
            id: 3,
            code: "JP".into(),
            name: "Japan".into(),
            status: VisitStatus::Unvisited,
            visited_date: None,
        },
    ]
}

fn main() -> Result<()> {
    println!("=== tripmap-rs Basic Usage Example ===\n");

    // Example 1: Resolve boundary names against the registry
    println!("--- Example 1: Boundary name resolution ---");
    let countries = sample_countries();
    let registry = Registry::with_builtin_aliases(&countries);
    for name in ["United States of America", "USA", "France", "Atlantis"] {
        match registry.resolve(name) {
            Some(c) => println!("{name:30} -> {} ({})", c.name(), c.code()),
            None => println!("{name:30} -> unmapped"),
        }
    }
    println!();

    // Example 2: Drive the map view through its load sequence
    println!("--- Example 2: Map view loading ---");
    let mut view = MapView::new();
    println!("Styling ready before loads? {}", view.ready_to_style());

    let boundaries = vec![
        BoundaryFeature::new("United States of America"),
        BoundaryFeature::new("France"),
        BoundaryFeature::new("Japan"),
        BoundaryFeature::new("Atlantis"),
    ];
    let ticket = view.begin_boundary_load();
    view.complete_boundary_load(ticket, Ok(boundaries));

    let ticket = view.begin_load(QueryKey::Countries);
    view.complete_countries(ticket, Ok(sample_countries()));
    println!("Styling ready after loads?  {}", view.ready_to_style());
    println!();

    // Example 3: Full style pass
    println!("--- Example 3: Style pass ---");
    for (feature, style) in view.style_pass().expect("both datasets loaded") {
        println!(
            "{:30} fill={} opacity={} stroke={}",
            feature.name, style.fill_color, style.fill_opacity, style.stroke_color
        );
    }
    println!();

    // Example 4: Selection
    println!("--- Example 4: Selection ---");
    let interaction = view.handle_boundary_interaction("France");
    println!("First click on France: {interaction:?}");
    let interaction = view.handle_boundary_interaction("France");
    println!("Second click on France: {interaction:?}");
    for (feature, style) in view.style_pass().expect("both datasets loaded") {
        if style.stroke_color == "#000000" {
            println!("Selected boundary: {}", feature.name);
        }
    }
    view.close_detail();
    println!("Selection after close: {:?}", view.selected());
    println!();

    // Example 5: Travel statistics
    println!("--- Example 5: Travel statistics ---");
    let stats = TravelStats::from_countries(&countries);
    println!("Countries: {}", stats.total);
    println!("Visited: {}", stats.visited);
    println!("Upcoming: {}", stats.upcoming);
    println!("Visited share: {:.1}%", stats.percent_visited());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
