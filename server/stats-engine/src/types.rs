//! Core types for the stats engine (CSV row contracts + internal models + records).

use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Raw CSV rows (column contract — what the input files provide)
// ---------------------------------------------------------------------------

/// One row of the match-level CSV. Unknown columns are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRow {
  #[serde(rename = "ID")]
  pub id: u64,
  #[serde(rename = "Team1")]
  pub team1: String,
  #[serde(rename = "Team2")]
  pub team2: String,
  /// Stage label; the literal "Final" marks a title match.
  #[serde(rename = "MatchNumber")]
  pub match_number: String,
  /// Empty for no-result / unresolved ties.
  #[serde(rename = "WinningTeam", default)]
  pub winning_team: Option<String>,
  #[serde(rename = "Player_of_Match", default)]
  pub player_of_match: Option<String>,
}

/// One row of the delivery-level CSV (one ball bowled).
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryRow {
  #[serde(rename = "ID")]
  pub id: u64,
  pub innings: u32,
  pub batter: String,
  pub bowler: String,
  #[serde(default)]
  pub extra_type: Option<String>,
  pub batsman_run: u32,
  pub total_run: u32,
  pub non_boundary: u8,
  #[serde(rename = "isWicketDelivery")]
  pub is_wicket_delivery: u8,
  #[serde(default)]
  pub player_out: Option<String>,
  #[serde(default)]
  pub kind: Option<String>,
  #[serde(rename = "BattingTeam")]
  pub batting_team: String,
}

// ---------------------------------------------------------------------------
// Delivery extras and wicket kinds (normalized)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraType {
  Wides,
  Byes,
  Legbyes,
  Noballs,
  Penalty,
  None,
}

impl ExtraType {
  pub fn from_str_loose(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "wides" => Self::Wides,
      "byes" => Self::Byes,
      "legbyes" => Self::Legbyes,
      "noballs" => Self::Noballs,
      "penalty" => Self::Penalty,
      _ => Self::None,
    }
  }

  /// Wides do not count as a ball faced by the batter.
  pub fn counts_as_ball_faced(self) -> bool {
    self != Self::Wides
  }

  /// Wides and no-balls do not count toward the bowler's ball count.
  pub fn counts_as_ball_bowled(self) -> bool {
    !matches!(self, Self::Wides | Self::Noballs)
  }

  /// Byes, leg-byes and penalty runs are not charged to the bowler.
  pub fn charged_to_bowler(self) -> bool {
    !matches!(self, Self::Byes | Self::Legbyes | Self::Penalty)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WicketKind {
  Caught,
  CaughtAndBowled,
  Bowled,
  Stumped,
  Lbw,
  HitWicket,
  /// Run-outs, retirements, obstructions — not credited to the bowler.
  Other,
}

impl WicketKind {
  pub fn from_str_loose(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "caught" => Self::Caught,
      "caught and bowled" => Self::CaughtAndBowled,
      "bowled" => Self::Bowled,
      "stumped" => Self::Stumped,
      "lbw" => Self::Lbw,
      "hit wicket" => Self::HitWicket,
      _ => Self::Other,
    }
  }

  pub fn credited_to_bowler(self) -> bool {
    !matches!(self, Self::Other)
  }
}

// ---------------------------------------------------------------------------
// Internal normalized models (immutable after dataset build)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Match {
  pub id: u64,
  pub team1: String,
  pub team2: String,
  pub is_final: bool,
  pub winning_team: Option<String>,
  pub player_of_match: Option<String>,
}

/// One ball bowled, joined to its match (bowling team derived).
#[derive(Debug, Clone)]
pub struct Delivery {
  pub match_id: u64,
  pub innings: u32,
  pub batting_team: String,
  pub bowling_team: String,
  pub batter: String,
  pub bowler: String,
  pub batter_runs: u32,
  pub total_runs: u32,
  pub extra: ExtraType,
  pub is_wicket: bool,
  pub wicket_kind: Option<WicketKind>,
  pub player_out: Option<String>,
  /// Set when 4 or 6 runs came without the ball crossing the rope off the
  /// bat (e.g. overthrows); such balls are not counted as boundaries.
  pub non_boundary: bool,
}

impl Delivery {
  /// Off-the-bat boundary worth exactly `runs` (4 or 6).
  pub fn off_bat_boundary(&self, runs: u32) -> bool {
    self.batter_runs == runs && !self.non_boundary
  }

  /// Runs on this ball charged to the bowler's analysis.
  pub fn chargeable_runs(&self) -> u32 {
    if self.extra.charged_to_bowler() {
      self.total_runs
    } else {
      0
    }
  }

  /// Wicket on this ball that counts toward the bowler's tally.
  pub fn is_bowler_wicket(&self) -> bool {
    self.is_wicket && matches!(self.wicket_kind, Some(k) if k.credited_to_bowler())
  }
}

// ---------------------------------------------------------------------------
// Ratio — tagged result of a possibly-degenerate division
// ---------------------------------------------------------------------------

/// A rate whose denominator may be zero (e.g. batting average with no
/// dismissals). `Undefined` serializes as JSON null and never leaks into
/// further arithmetic as a numeric infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
  Finite(f64),
  Undefined,
}

impl Ratio {
  pub fn of(numer: f64, denom: f64) -> Self {
    if denom > 0.0 {
      Self::Finite(numer / denom)
    } else {
      Self::Undefined
    }
  }

  pub fn as_f64(self) -> Option<f64> {
    match self {
      Self::Finite(v) => Some(v),
      Self::Undefined => None,
    }
  }
}

impl Serialize for Ratio {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      // Guard against non-finite values sneaking in via Finite.
      Self::Finite(v) if v.is_finite() => serializer.serialize_f64(*v),
      _ => serializer.serialize_none(),
    }
  }
}

// ---------------------------------------------------------------------------
// Output records (JSON contract — what the API emits)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
  pub matches_played: u64,
  pub won: u64,
  pub lost: u64,
  pub no_result: u64,
  pub titles_won: u64,
}

/// Head-to-head tally between two named teams. Serialized with dynamic
/// `<name>_wins` keys (see `serialize`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadToHead {
  pub team1: String,
  pub team2: String,
  pub total_matches: u64,
  pub team1_wins: u64,
  pub team2_wins: u64,
  pub no_result: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingRecord {
  pub innings: u64,
  pub runs: u64,
  pub average: Ratio,
  pub strike_rate: f64,
  pub balls_faced: u64,
  pub fours: u64,
  pub sixes: u64,
  pub fifties: u64,
  pub hundreds: u64,
  pub highest_score: u64,
  /// Can go negative: a batter run out at the non-striker's end in a match
  /// where they never faced a ball is dismissed without an innings here.
  pub not_outs: i64,
  pub man_of_match: u64,
  pub dismissals: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingRecord {
  pub innings: u64,
  pub wickets: u64,
  pub runs_conceded: u64,
  pub economy: f64,
  pub average: Ratio,
  pub strike_rate: Ratio,
  pub balls_bowled: u64,
  pub fours_conceded: u64,
  pub sixes_conceded: u64,
  pub three_wickets_plus: u64,
  /// "wickets/runs" of the best single-match analysis; "0/0" when empty.
  pub best_figure: String,
  pub man_of_match: u64,
}

// ---------------------------------------------------------------------------
// Reports (overall + per-opponent breakdowns)
// ---------------------------------------------------------------------------

use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct TeamReport {
  pub team: String,
  pub overall: TeamRecord,
  /// Keyed by opponent, sorted by name.
  pub head_to_head: BTreeMap<String, HeadToHead>,
}

#[derive(Debug, Clone)]
pub struct BattingReport {
  pub batter: String,
  pub overall: Option<BattingRecord>,
  /// Keyed by opposing team (full universe), sorted; `None` where the
  /// batter never faced that team.
  pub against: BTreeMap<String, Option<BattingRecord>>,
}

#[derive(Debug, Clone)]
pub struct BowlingReport {
  pub bowler: String,
  pub overall: Option<BowlingRecord>,
  pub against: BTreeMap<String, Option<BowlingRecord>>,
}

/// Sorted distinct names for populating selection lists.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
  pub batters: Vec<String>,
  pub bowlers: Vec<String>,
  pub teams: Vec<String>,
}
