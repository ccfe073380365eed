//! CSV loading for the two flat input files.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::dataset::Dataset;
use crate::error::StatsError;
use crate::types::{DeliveryRow, MatchRow};

fn read_rows<R: std::io::Read, T: DeserializeOwned>(
  mut reader: csv::Reader<R>,
) -> Result<Vec<T>, StatsError> {
  reader
    .deserialize::<T>()
    .collect::<Result<Vec<T>, csv::Error>>()
    .map_err(Into::into)
}

pub fn load_matches(path: &Path) -> Result<Vec<MatchRow>, StatsError> {
  read_rows(csv::Reader::from_path(path)?)
}

pub fn load_deliveries(path: &Path) -> Result<Vec<DeliveryRow>, StatsError> {
  read_rows(csv::Reader::from_path(path)?)
}

/// Load both files and build the joined dataset. The one-time startup cost;
/// everything downstream is in-memory and read-only.
pub fn load_dataset(matches_path: &Path, deliveries_path: &Path) -> Result<Dataset, StatsError> {
  let matches = load_matches(matches_path)?;
  let deliveries = load_deliveries(deliveries_path)?;
  Dataset::build(matches, deliveries)
}
