// crates/tripmap-core/src/stats.rs

use crate::model::{Country, VisitStatus};
use serde::{Deserialize, Serialize};

/// Aggregate visit counts over the current country list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelStats {
    pub total: usize,
    pub visited: usize,
    pub upcoming: usize,
    pub unvisited: usize,
}

impl TravelStats {
    pub fn from_countries(countries: &[Country]) -> Self {
        let mut stats = Self {
            total: countries.len(),
            visited: 0,
            upcoming: 0,
            unvisited: 0,
        };
        for country in countries {
            match country.status {
                VisitStatus::Visited => stats.visited += 1,
                VisitStatus::Upcoming => stats.upcoming += 1,
                VisitStatus::Unvisited => stats.unvisited += 1,
            }
        }
        stats
    }

    /// Share of visited countries, in percent. Zero for an empty list.
    pub fn percent_visited(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.visited as f64 * 100.0 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, status: VisitStatus) -> Country {
        Country {
            id: 0,
            code: code.to_string(),
            name: code.to_string(),
            status,
            visited_date: None,
        }
    }

    #[test]
    fn counts_by_status() {
        let countries = vec![
            country("US", VisitStatus::Visited),
            country("FR", VisitStatus::Visited),
            country("JP", VisitStatus::Upcoming),
            country("BR", VisitStatus::Unvisited),
        ];
        let stats = TravelStats::from_countries(&countries);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.visited, 2);
        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.unvisited, 1);
        assert_eq!(stats.percent_visited(), 50.0);
    }

    #[test]
    fn empty_list_has_zero_percent() {
        let stats = TravelStats::from_countries(&[]);
        assert_eq!(stats.percent_visited(), 0.0);
    }
}
