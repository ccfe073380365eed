//! Shared application state.

use stats_engine::Dataset;

/// Immutable after startup; safe to share across requests without locking.
pub struct AppState {
  pub dataset: Dataset,
}
