//! Structured error types for the stats engine.
//!
//! The only fatal conditions are dataset-load failures; query-time
//! computation never raises (unknown names and zero denominators are
//! handled as values, not errors).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
  #[error("csv: {0}")]
  Csv(#[from] csv::Error),

  #[error("delivery references unknown match id {match_id}")]
  DanglingMatch { match_id: u64 },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}
