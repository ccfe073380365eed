//! HTTP handlers for the stats API.
//!
//! Error policy: a missing query parameter is a request-level 400; an
//! unknown team or player name is a domain-level miss and comes back as a
//! 200 with a `{"message": ...}` payload, so callers inspect the payload
//! shape, not the status code.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use stats_engine::types::Listing;
use stats_engine::{batting, bowling, serialize, team};

use crate::state::AppState;
use crate::types::{BattingQuery, BowlingQuery, TeamQuery, TeamVsTeamQuery};

pub async fn health() -> &'static str {
  "ok"
}

pub async fn list_all(State(state): State<Arc<AppState>>) -> Json<Listing> {
  Json(state.dataset.listing())
}

pub async fn team_vs_team(
  State(state): State<Arc<AppState>>,
  Query(q): Query<TeamVsTeamQuery>,
) -> Response {
  let (team1, team2) = match (q.team1, q.team2) {
    (Some(t1), Some(t2)) if !t1.is_empty() && !t2.is_empty() => (t1, t2),
    _ => return bad_request("Both 'team1' and 'team2' parameters are required."),
  };
  let payload = match team::team_vs_team(&state.dataset, &team1, &team2) {
    Some(h2h) => serde_json::to_value(&h2h).unwrap_or(Value::Null),
    None => serialize::message_value("Invalid team name provided."),
  };
  Json(payload).into_response()
}

pub async fn team_record(
  State(state): State<Arc<AppState>>,
  Query(q): Query<TeamQuery>,
) -> Response {
  let team = match q.team {
    Some(t) if !t.is_empty() => t,
    _ => return bad_request("The 'team' parameter is required."),
  };
  let payload = match team::team_report(&state.dataset, &team) {
    Some(report) => serialize::team_report_value(&report),
    None => serialize::message_value(format!("Team '{}' not found.", team)),
  };
  Json(payload).into_response()
}

pub async fn batting_record(
  State(state): State<Arc<AppState>>,
  Query(q): Query<BattingQuery>,
) -> Response {
  // Trim accidental surrounding whitespace before lookup.
  let name = q.batsman.as_deref().unwrap_or("").trim().to_string();
  if name.is_empty() {
    return bad_request("The 'batsman' parameter is required.");
  }
  let payload = match batting::batting_report(&state.dataset, &name) {
    Some(report) => serialize::batting_report_value(&report),
    None => serialize::message_value(format!("Batsman '{}' not found in records.", name)),
  };
  pretty_json(&payload)
}

pub async fn bowling_record(
  State(state): State<Arc<AppState>>,
  Query(q): Query<BowlingQuery>,
) -> Response {
  let name = q.bowler.as_deref().unwrap_or("").trim().to_string();
  if name.is_empty() {
    return bad_request("The 'bowler' parameter is required.");
  }
  let payload = match bowling::bowling_report(&state.dataset, &name) {
    Some(report) => serialize::bowling_report_value(&report),
    None => serialize::message_value(format!("Bowler '{}' not found in records.", name)),
  };
  pretty_json(&payload)
}

fn bad_request(message: &str) -> Response {
  (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// Player reports go out pretty-printed with stable 4-space indentation.
fn pretty_json(payload: &Value) -> Response {
  match serialize::to_pretty_string(payload) {
    Ok(text) => ([(header::CONTENT_TYPE, "application/json")], text).into_response(),
    Err(e) => {
      eprintln!("stats-api: serialize error: {}", e);
      StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
  }
}
