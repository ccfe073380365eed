//! Cricket Stats API
//!
//! HTTP boundary over the stats engine. The dataset is loaded once at
//! startup and shared read-only; handlers are stateless reads.
//! Bind to 127.0.0.1 by default (internal only).

mod handlers;
mod state;
mod types;

pub use handlers::{batting_record, bowling_record, health, list_all, team_record, team_vs_team};
pub use state::AppState;
