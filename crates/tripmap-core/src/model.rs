// crates/tripmap-core/src/model.rs

use crate::error::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Backend-assigned country identifier, immutable once created.
pub type CountryId = u32;

/// Visit-tracking state of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    #[default]
    Unvisited,
    Upcoming,
    Visited,
}

/// A country record as returned by the tracker backend.
///
/// The client only reads these; all mutation happens server-side through
/// partial updates (see [`StatusUpdate`]).
///
/// Invariant: `visited_date` is present exactly when `status` is
/// [`VisitStatus::Visited`]. The backend owns the date format, so it is
/// carried as an opaque string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: CountryId,
    /// Short geographic identifier (ISO2-style), the join key against
    /// boundary data.
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub status: VisitStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited_date: Option<String>,
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn status(&self) -> VisitStatus {
        self.status
    }

    pub fn is_visited(&self) -> bool {
        self.status == VisitStatus::Visited
    }

    /// Checks the visited-date coupling invariant.
    pub fn validate(&self) -> Result<()> {
        let ok = match self.status {
            VisitStatus::Visited => self.visited_date.is_some(),
            _ => self.visited_date.is_none(),
        };
        if ok {
            Ok(())
        } else {
            Err(MapError::InvalidVisitedDate {
                code: self.code.clone(),
            })
        }
    }
}

/// Partial update sent to the backend, keyed by country id.
///
/// `visited_date` serializes as `null` when absent so a transition away
/// from visited clears the date server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: VisitStatus,
    pub visited_date: Option<String>,
}

impl StatusUpdate {
    pub fn visited(date: impl Into<String>) -> Self {
        Self {
            status: VisitStatus::Visited,
            visited_date: Some(date.into()),
        }
    }

    pub fn upcoming() -> Self {
        Self {
            status: VisitStatus::Upcoming,
            visited_date: None,
        }
    }

    pub fn unvisited() -> Self {
        Self {
            status: VisitStatus::Unvisited,
            visited_date: None,
        }
    }

    /// Applies the update to a country record the way the backend would.
    /// Used by tests and demos to simulate confirmed server state.
    pub fn apply(&self, country: &mut Country) {
        country.status = self.status;
        country.visited_date = self.visited_date.clone();
    }
}

/// A photo record associated with a country. Consumed only through its
/// `country_id` join key when placing image markers on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Postcard {
    pub id: u32,
    pub country_id: CountryId,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rotation: Option<f64>,
}

impl Postcard {
    /// Preferred image source: the hosted URL, falling back to the local
    /// upload path.
    pub fn image_source(&self) -> Option<String> {
        self.image_url
            .clone()
            .or_else(|| self.filename.as_ref().map(|f| format!("/uploads/{f}")))
    }
}

/// Reads a country list from a JSON snapshot on disk.
pub fn load_countries_from_path(path: impl AsRef<Path>) -> Result<Vec<Country>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| MapError::NotFound(format!("country snapshot not found at {}: {e}", path.display())))?;
    let reader = BufReader::new(file);
    let countries: Vec<Country> = serde_json::from_reader(reader)?;
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, status: VisitStatus, visited_date: Option<&str>) -> Country {
        Country {
            id: 1,
            code: code.to_string(),
            name: code.to_string(),
            status,
            visited_date: visited_date.map(str::to_string),
        }
    }

    #[test]
    fn visited_requires_date() {
        assert!(country("US", VisitStatus::Visited, Some("2024-06-01"))
            .validate()
            .is_ok());
        assert!(country("US", VisitStatus::Visited, None).validate().is_err());
    }

    #[test]
    fn non_visited_forbids_date() {
        assert!(country("FR", VisitStatus::Upcoming, None).validate().is_ok());
        assert!(country("FR", VisitStatus::Unvisited, Some("2024-06-01"))
            .validate()
            .is_err());
    }

    #[test]
    fn status_update_round_trips_invariant() {
        let mut c = country("JP", VisitStatus::Upcoming, None);
        StatusUpdate::visited("2025-01-15").apply(&mut c);
        assert!(c.validate().is_ok());
        assert!(c.is_visited());

        StatusUpdate::unvisited().apply(&mut c);
        assert!(c.validate().is_ok());
        assert_eq!(c.visited_date, None);
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let c = country("US", VisitStatus::Visited, Some("2024-06-01"));
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"visitedDate\":\"2024-06-01\""));
        assert!(json.contains("\"status\":\"visited\""));

        let update = StatusUpdate::unvisited();
        let json = serde_json::to_string(&update).unwrap();
        // Explicit null clears the date server-side.
        assert!(json.contains("\"visitedDate\":null"));
    }

    #[test]
    fn postcard_image_source_prefers_url() {
        let p = Postcard {
            id: 1,
            country_id: 7,
            filename: Some("paris.jpg".into()),
            image_url: Some("https://img.example/paris.jpg".into()),
            rotation: None,
        };
        assert_eq!(p.image_source().as_deref(), Some("https://img.example/paris.jpg"));

        let local = Postcard {
            image_url: None,
            ..p
        };
        assert_eq!(local.image_source().as_deref(), Some("/uploads/paris.jpg"));
    }
}
