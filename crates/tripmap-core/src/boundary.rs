// crates/tripmap-core/src/boundary.rs

//! # Boundary Dataset
//!
//! Normalizes raw GeoJSON features from the external polygon dataset into
//! [`BoundaryFeature`] values. The external shape is validated once here,
//! at the boundary; the rest of the crate never touches untyped properties.
//!
//! Datasets are fetched fresh on each map initialization and are never
//! cached across sessions.

use crate::error::{MapError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Narrow adapter over one named polygon from the boundary dataset.
///
/// Only the `name` property is consumed; it is the lookup key into the
/// alias table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryFeature {
    pub name: String,
}

impl BoundaryFeature {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Normalizes a list of raw GeoJSON features into boundaries.
///
/// Features with a missing or empty name are skipped; sources disagree on
/// the property casing, so both `name` and `NAME` are probed.
pub fn normalize_features(features: &[Value]) -> Vec<BoundaryFeature> {
    features.iter().filter_map(normalize_feature).collect()
}

fn normalize_feature(feature: &Value) -> Option<BoundaryFeature> {
    let props = feature.get("properties")?;

    let name = props
        .get("name")
        .or_else(|| props.get("NAME"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    Some(BoundaryFeature::new(name))
}

/// Parses a GeoJSON FeatureCollection value into boundary features.
pub fn parse_feature_collection(value: &Value) -> Result<Vec<BoundaryFeature>> {
    let features = value
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| MapError::InvalidData("expected a FeatureCollection with a features array".into()))?;

    Ok(normalize_features(features))
}

/// Loads a boundary dataset from disk (`.geojson`, or `.geojson.gz` with
/// the `compact` feature).
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<BoundaryFeature>> {
    let path = path.as_ref();
    let stream = open_stream(path)?;
    let value: Value = serde_json::from_reader(stream)?;
    parse_feature_collection(&value)
}

fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        MapError::NotFound(format!("boundary dataset not found at {}: {e}", path.display()))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if gzipped {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(MapError::InvalidData(format!(
                "{} is gzipped but the `compact` feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}
