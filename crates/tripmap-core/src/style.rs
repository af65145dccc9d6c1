// crates/tripmap-core/src/style.rs

//! Deterministic paint styles for boundary features.

use crate::model::{Country, CountryId, VisitStatus};
use serde::Serialize;

pub const FILL_VISITED: &str = "#22C55E";
pub const FILL_UPCOMING: &str = "#FCD34D";
pub const FILL_UNVISITED: &str = "#F3F4F6";

pub const STROKE_SELECTED: &str = "#000000";
pub const STROKE_DEFAULT: &str = "#FFFFFF";

/// Paint parameters for one boundary polygon, in the shape the map
/// library's styling callback consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStyle {
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub stroke_color: &'static str,
    pub stroke_weight: f64,
    pub stroke_opacity: f64,
    pub clickable: bool,
}

/// Computes the style for a resolved country (or an unmapped boundary).
///
/// Pure and idempotent: identical inputs always produce an identical
/// style record. Unmapped boundaries get the neutral unvisited default.
pub fn style_for(country: Option<&Country>, selected: Option<CountryId>) -> MapStyle {
    let status = country.map(Country::status).unwrap_or_default();

    let fill_color = match status {
        VisitStatus::Visited => FILL_VISITED,
        VisitStatus::Upcoming => FILL_UPCOMING,
        VisitStatus::Unvisited => FILL_UNVISITED,
    };

    let fill_opacity = match status {
        VisitStatus::Unvisited => 0.2,
        _ => 0.6,
    };

    let is_selected = match (country, selected) {
        (Some(c), Some(id)) => c.id == id,
        _ => false,
    };

    MapStyle {
        fill_color,
        fill_opacity,
        stroke_color: if is_selected { STROKE_SELECTED } else { STROKE_DEFAULT },
        stroke_weight: if is_selected { 4.0 } else { 0.5 },
        stroke_opacity: if is_selected { 1.0 } else { 0.8 },
        clickable: true,
    }
}
