//! The immutable in-memory dataset: matches joined to deliveries.
//!
//! Built once at startup from the raw CSV rows; read-only afterwards, so it
//! can be shared across concurrent queries without locking. The build pass
//! derives the bowling-team column, normalizes "NA"/empty markers to none,
//! and precomputes the team universe, sorted player name sets and the
//! main-innings (innings 1 and 2) index so queries avoid full-table scans
//! for name lookups.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::StatsError;
use crate::types::*;

#[derive(Debug)]
pub struct Dataset {
  matches: Vec<Match>,
  match_index: HashMap<u64, usize>,
  deliveries: Vec<Delivery>,
  /// Indices of deliveries in a recognized match innings (1 or 2);
  /// super-overs are excluded from player reports.
  main_innings: Vec<usize>,
  teams: BTreeSet<String>,
  batters: BTreeSet<String>,
  bowlers: BTreeSet<String>,
  main_batters: HashSet<String>,
  main_bowlers: HashSet<String>,
}

/// Treat empty strings and the "NA" placeholder as absent.
fn non_na(value: Option<String>) -> Option<String> {
  value.filter(|s| !s.is_empty() && s != "NA")
}

impl Dataset {
  /// Join delivery rows to match rows and derive the normalized dataset.
  ///
  /// Fails if a delivery references a match id that does not exist — the
  /// join is the one place a malformed input can surface.
  pub fn build(match_rows: Vec<MatchRow>, delivery_rows: Vec<DeliveryRow>) -> Result<Self, StatsError> {
    let mut matches = Vec::with_capacity(match_rows.len());
    let mut match_index = HashMap::with_capacity(match_rows.len());
    let mut teams = BTreeSet::new();

    for row in match_rows {
      teams.insert(row.team1.clone());
      teams.insert(row.team2.clone());
      match_index.insert(row.id, matches.len());
      matches.push(Match {
        id: row.id,
        team1: row.team1,
        team2: row.team2,
        is_final: row.match_number == "Final",
        winning_team: non_na(row.winning_team),
        player_of_match: non_na(row.player_of_match),
      });
    }

    let mut deliveries = Vec::with_capacity(delivery_rows.len());
    let mut main_innings = Vec::new();
    let mut batters = BTreeSet::new();
    let mut bowlers = BTreeSet::new();
    let mut main_batters = HashSet::new();
    let mut main_bowlers = HashSet::new();

    for row in delivery_rows {
      let m = match match_index.get(&row.id) {
        Some(&i) => &matches[i],
        None => return Err(StatsError::DanglingMatch { match_id: row.id }),
      };
      let bowling_team = if row.batting_team == m.team1 {
        m.team2.clone()
      } else {
        m.team1.clone()
      };

      let is_wicket = row.is_wicket_delivery != 0;
      let wicket_kind = non_na(row.kind).map(|k| WicketKind::from_str_loose(&k));
      let extra = row
        .extra_type
        .as_deref()
        .map(ExtraType::from_str_loose)
        .unwrap_or(ExtraType::None);

      batters.insert(row.batter.clone());
      bowlers.insert(row.bowler.clone());
      if row.innings == 1 || row.innings == 2 {
        main_innings.push(deliveries.len());
        main_batters.insert(row.batter.clone());
        main_bowlers.insert(row.bowler.clone());
      }

      deliveries.push(Delivery {
        match_id: row.id,
        innings: row.innings,
        batting_team: row.batting_team,
        bowling_team,
        batter: row.batter,
        bowler: row.bowler,
        batter_runs: row.batsman_run,
        total_runs: row.total_run,
        extra,
        is_wicket,
        wicket_kind,
        player_out: non_na(row.player_out),
        non_boundary: row.non_boundary != 0,
      });
    }

    Ok(Self {
      matches,
      match_index,
      deliveries,
      main_innings,
      teams,
      batters,
      bowlers,
      main_batters,
      main_bowlers,
    })
  }

  pub fn matches(&self) -> &[Match] {
    &self.matches
  }

  pub fn deliveries(&self) -> &[Delivery] {
    &self.deliveries
  }

  pub fn match_by_id(&self, id: u64) -> Option<&Match> {
    self.match_index.get(&id).map(|&i| &self.matches[i])
  }

  /// Deliveries from recognized match innings (1 and 2) — the scope for
  /// player reports.
  pub fn main_innings(&self) -> Vec<&Delivery> {
    self.main_innings.iter().map(|&i| &self.deliveries[i]).collect()
  }

  pub fn teams(&self) -> &BTreeSet<String> {
    &self.teams
  }

  pub fn is_known_team(&self, name: &str) -> bool {
    self.teams.contains(name)
  }

  /// Whether the name appears as a batter in a recognized innings.
  pub fn has_batter(&self, name: &str) -> bool {
    self.main_batters.contains(name)
  }

  /// Whether the name appears as a bowler in a recognized innings.
  pub fn has_bowler(&self, name: &str) -> bool {
    self.main_bowlers.contains(name)
  }

  /// Sorted distinct batter, bowler and team names (for selection lists;
  /// player names come from the full delivery set, super-overs included).
  pub fn listing(&self) -> Listing {
    Listing {
      batters: self.batters.iter().cloned().collect(),
      bowlers: self.bowlers.iter().cloned().collect(),
      teams: self.teams.iter().cloned().collect(),
    }
  }
}
