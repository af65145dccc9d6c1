// crates/tripmap-core/src/client.rs

//! Blocking HTTP client for the tracker backend (feature `remote`).
//!
//! The client never mutates local state: a status update only takes
//! effect once the backend confirms it, after which the caller invalidates
//! the countries cache key and refetches.

use crate::error::{MapError, Result};
use crate::model::{Country, CountryId, Postcard, StatusUpdate};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Creates a client for a backend base URL (e.g. `https://host/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn fetch_countries(&self) -> Result<Vec<Country>> {
        let resp = self.http.get(self.url("countries")).send()?;
        if !resp.status().is_success() {
            return Err(MapError::Backend(format!(
                "GET countries returned {}",
                resp.status()
            )));
        }
        Ok(resp.json()?)
    }

    pub fn fetch_postcards(&self) -> Result<Vec<Postcard>> {
        let resp = self.http.get(self.url("postcards")).send()?;
        if !resp.status().is_success() {
            return Err(MapError::Backend(format!(
                "GET postcards returned {}",
                resp.status()
            )));
        }
        Ok(resp.json()?)
    }

    /// Sends a partial status update for one country and returns the
    /// confirmed record.
    pub fn update_status(&self, id: CountryId, update: &StatusUpdate) -> Result<Country> {
        let resp = self
            .http
            .patch(self.url(&format!("countries/{id}")))
            .json(update)
            .send()?;
        if !resp.status().is_success() {
            return Err(MapError::Backend(format!(
                "PATCH countries/{id} returned {}",
                resp.status()
            )));
        }
        Ok(resp.json()?)
    }
}
