//! Cricket Stats Engine — deterministic aggregation over historical data.
//!
//! Loads match-level and delivery-level CSVs into an immutable in-memory
//! dataset, then computes team head-to-head records and per-player batting
//! and bowling reports on demand. Every aggregate is a pure function of the
//! dataset; nothing is cached or mutated after load, so the dataset can be
//! shared read-only across concurrent queries.
//!
//! No DB, no network; pure computation + in-memory state.

pub mod batting;
pub mod bowling;
pub mod dataset;
pub mod error;
pub mod load;
pub mod serialize;
pub mod team;
pub mod types;

pub use dataset::Dataset;
pub use error::StatsError;
pub use types::{BattingRecord, BowlingRecord, HeadToHead, Ratio, TeamRecord};
