//! Query-parameter types.
//!
//! Fields are optional so a missing parameter surfaces as a request-level
//! 400 from the handler, while an unknown name stays a domain-level
//! message payload.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TeamVsTeamQuery {
  pub team1: Option<String>,
  pub team2: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamQuery {
  pub team: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BattingQuery {
  pub batsman: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BowlingQuery {
  pub bowler: Option<String>,
}
