//! Team-level aggregation: overall records and head-to-head tallies.

use std::collections::BTreeMap;

use crate::dataset::Dataset;
use crate::types::{HeadToHead, Match, TeamRecord, TeamReport};

/// Overall win/loss/no-result/title tally for one team. Losses are derived,
/// so `won + lost + no_result == matches_played` always holds.
pub fn team_record(team: &str, matches: &[Match]) -> TeamRecord {
  let mut matches_played = 0;
  let mut won = 0;
  let mut no_result = 0;
  let mut titles_won = 0;

  for m in matches {
    if m.team1 != team && m.team2 != team {
      continue;
    }
    matches_played += 1;
    match &m.winning_team {
      Some(w) if w == team => {
        won += 1;
        if m.is_final {
          titles_won += 1;
        }
      }
      Some(_) => {}
      None => no_result += 1,
    }
  }

  TeamRecord {
    matches_played,
    won,
    lost: matches_played - won - no_result,
    no_result,
    titles_won,
  }
}

/// Head-to-head tally between two teams, in either home/away order.
///
/// Returns `None` when either name lies outside the team universe; the
/// caller surfaces that as a message payload, not an error status.
pub fn team_vs_team(dataset: &Dataset, team1: &str, team2: &str) -> Option<HeadToHead> {
  if !dataset.is_known_team(team1) || !dataset.is_known_team(team2) {
    return None;
  }

  let mut total_matches = 0;
  let mut team1_wins = 0;
  let mut team2_wins = 0;

  for m in dataset.matches() {
    let paired = (m.team1 == team1 && m.team2 == team2) || (m.team1 == team2 && m.team2 == team1);
    if !paired {
      continue;
    }
    total_matches += 1;
    match m.winning_team.as_deref() {
      Some(w) if w == team1 => team1_wins += 1,
      Some(w) if w == team2 => team2_wins += 1,
      _ => {}
    }
  }

  Some(HeadToHead {
    team1: team1.to_string(),
    team2: team2.to_string(),
    total_matches,
    team1_wins,
    team2_wins,
    no_result: total_matches - (team1_wins + team2_wins),
  })
}

/// Overall record plus a head-to-head entry for every other known team,
/// sorted by opponent name. `None` for an unknown team.
pub fn team_report(dataset: &Dataset, team: &str) -> Option<TeamReport> {
  if !dataset.is_known_team(team) {
    return None;
  }

  let overall = team_record(team, dataset.matches());
  let mut head_to_head = BTreeMap::new();
  for opponent in dataset.teams() {
    if opponent == team {
      continue;
    }
    if let Some(h2h) = team_vs_team(dataset, team, opponent) {
      head_to_head.insert(opponent.clone(), h2h);
    }
  }

  Some(TeamReport {
    team: team.to_string(),
    overall,
    head_to_head,
  })
}
