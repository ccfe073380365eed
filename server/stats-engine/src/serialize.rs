//! Serialization adapter: aggregate records -> transmissible JSON.
//!
//! Integer fields stay integers; rates with no defined value (`Ratio::
//! Undefined`) become JSON null, never a numeric sentinel and never an
//! error. Missing per-opponent records become empty objects.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::error::StatsError;
use crate::types::{BattingReport, BowlingReport, HeadToHead, TeamReport};

/// Head-to-head payloads carry the team names in the keys:
/// `{"total_matches": .., "<team1>_wins": .., "<team2>_wins": .., "no_result": ..}`.
impl Serialize for HeadToHead {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(4))?;
    map.serialize_entry("total_matches", &self.total_matches)?;
    map.serialize_entry(&format!("{}_wins", self.team1), &self.team1_wins)?;
    map.serialize_entry(&format!("{}_wins", self.team2), &self.team2_wins)?;
    map.serialize_entry("no_result", &self.no_result)?;
    map.end()
  }
}

fn value_of<T: Serialize>(v: &T) -> Value {
  serde_json::to_value(v).unwrap_or(Value::Null)
}

/// A present record, or `{}` for an opponent the player never met.
fn record_or_empty<T: Serialize>(rec: &Option<T>) -> Value {
  match rec {
    Some(r) => value_of(r),
    None => Value::Object(Map::new()),
  }
}

pub fn message_value(message: impl Into<String>) -> Value {
  json!({ "message": message.into() })
}

/// Root object keyed by the queried name: `{name: body}`.
fn keyed(name: &str, body: Map<String, Value>) -> Value {
  let mut root = Map::new();
  root.insert(name.to_string(), Value::Object(body));
  Value::Object(root)
}

/// `{team: {"overall_record": .., "head_to_head": {opponent: ..}}}`.
pub fn team_report_value(report: &TeamReport) -> Value {
  let head_to_head: Map<String, Value> = report
    .head_to_head
    .iter()
    .map(|(opponent, h2h)| (opponent.clone(), value_of(h2h)))
    .collect();
  let mut body = Map::new();
  body.insert("overall_record".to_string(), value_of(&report.overall));
  body.insert("head_to_head".to_string(), Value::Object(head_to_head));
  keyed(&report.team, body)
}

/// `{batter: {"overall": .., "against": {team: ..}}}`.
pub fn batting_report_value(report: &BattingReport) -> Value {
  let against: Map<String, Value> = report
    .against
    .iter()
    .map(|(team, rec)| (team.clone(), record_or_empty(rec)))
    .collect();
  let mut body = Map::new();
  body.insert("overall".to_string(), record_or_empty(&report.overall));
  body.insert("against".to_string(), Value::Object(against));
  keyed(&report.batter, body)
}

/// `{bowler: {"overall": .., "against": {team: ..}}}`.
pub fn bowling_report_value(report: &BowlingReport) -> Value {
  let against: Map<String, Value> = report
    .against
    .iter()
    .map(|(team, rec)| (team.clone(), record_or_empty(rec)))
    .collect();
  let mut body = Map::new();
  body.insert("overall".to_string(), record_or_empty(&report.overall));
  body.insert("against".to_string(), Value::Object(against));
  keyed(&report.bowler, body)
}

/// Pretty-print with stable 4-space indentation (the report endpoints'
/// wire format).
pub fn to_pretty_string(value: &Value) -> Result<String, StatsError> {
  let mut buf = Vec::new();
  let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
  let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
  value.serialize(&mut ser)?;
  Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{BattingRecord, Ratio, TeamRecord};
  use std::collections::BTreeMap;

  fn h2h() -> HeadToHead {
    HeadToHead {
      team1: "Chennai Super Kings".into(),
      team2: "Mumbai Indians".into(),
      total_matches: 3,
      team1_wins: 1,
      team2_wins: 1,
      no_result: 1,
    }
  }

  fn batting(average: Ratio) -> BattingRecord {
    BattingRecord {
      innings: 1,
      runs: 30,
      average,
      strike_rate: 150.0,
      balls_faced: 20,
      fours: 3,
      sixes: 1,
      fifties: 0,
      hundreds: 0,
      highest_score: 30,
      not_outs: 1,
      man_of_match: 0,
      dismissals: 0,
    }
  }

  #[test]
  fn head_to_head_uses_dynamic_win_keys() {
    let value = serde_json::to_value(h2h()).unwrap();
    assert_eq!(value["total_matches"], 3);
    assert_eq!(value["Chennai Super Kings_wins"], 1);
    assert_eq!(value["Mumbai Indians_wins"], 1);
    assert_eq!(value["no_result"], 1);
  }

  #[test]
  fn undefined_average_round_trips_as_null() {
    let json = serde_json::to_string(&batting(Ratio::Undefined)).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert!(parsed["average"].is_null());
    assert_eq!(parsed["strike_rate"], 150.0);
    // A re-derivation over the parsed value sees no numeric average at all.
    assert_eq!(parsed["average"].as_f64(), None);
  }

  #[test]
  fn missing_opponent_record_is_an_empty_object() {
    let mut against = BTreeMap::new();
    against.insert("Gujarat Titans".to_string(), None);
    against.insert("Mumbai Indians".to_string(), Some(batting(Ratio::Finite(30.0))));
    let report = BattingReport {
      batter: "MS Dhoni".into(),
      overall: Some(batting(Ratio::Finite(30.0))),
      against,
    };
    let value = batting_report_value(&report);
    let against = &value["MS Dhoni"]["against"];
    assert_eq!(against["Gujarat Titans"], json!({}));
    assert_eq!(against["Mumbai Indians"]["runs"], 30);
  }

  #[test]
  fn team_report_shape() {
    let mut head_to_head = BTreeMap::new();
    head_to_head.insert("Mumbai Indians".to_string(), h2h());
    let report = TeamReport {
      team: "Chennai Super Kings".into(),
      overall: TeamRecord {
        matches_played: 3,
        won: 1,
        lost: 1,
        no_result: 1,
        titles_won: 0,
      },
      head_to_head,
    };
    let value = team_report_value(&report);
    let body = &value["Chennai Super Kings"];
    assert_eq!(body["overall_record"]["matches_played"], 3);
    assert_eq!(
      body["head_to_head"]["Mumbai Indians"]["Chennai Super Kings_wins"],
      1
    );
  }

  #[test]
  fn pretty_printing_uses_four_space_indent() {
    let text = to_pretty_string(&json!({"a": {"b": 1}})).unwrap();
    assert!(text.contains("\n    \"a\""), "{}", text);
    assert!(text.contains("\n        \"b\""), "{}", text);
  }

  #[test]
  fn message_payload_shape() {
    assert_eq!(
      message_value("Invalid team name provided."),
      json!({"message": "Invalid team name provided."})
    );
  }
}
