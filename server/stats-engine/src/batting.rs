//! Batting aggregation: per-batter records, overall and per-opponent.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::dataset::Dataset;
use crate::types::{BattingRecord, BattingReport, Delivery, Ratio};

/// Compute a batter's record over the given delivery scope.
///
/// The scope is whatever the caller has already narrowed to (recognized
/// innings, one opponent, ...). Dismissals and man-of-the-match counts are
/// taken over the whole scope, not just the batter's own deliveries: a
/// batter can be run out off a ball they never faced.
///
/// Returns `None` when the batter has no deliveries in scope.
pub fn batting_record(dataset: &Dataset, batter: &str, scope: &[&Delivery]) -> Option<BattingRecord> {
  let own: Vec<&Delivery> = scope.iter().copied().filter(|d| d.batter == batter).collect();
  if own.is_empty() {
    return None;
  }

  let mut match_ids = HashSet::new();
  let mut runs: u64 = 0;
  let mut balls_faced: u64 = 0;
  let mut fours: u64 = 0;
  let mut sixes: u64 = 0;
  let mut runs_per_match: HashMap<u64, u64> = HashMap::new();

  for d in &own {
    match_ids.insert(d.match_id);
    runs += u64::from(d.batter_runs);
    *runs_per_match.entry(d.match_id).or_insert(0) += u64::from(d.batter_runs);
    if d.extra.counts_as_ball_faced() {
      balls_faced += 1;
    }
    if d.off_bat_boundary(4) {
      fours += 1;
    }
    if d.off_bat_boundary(6) {
      sixes += 1;
    }
  }

  let outs = scope
    .iter()
    .filter(|d| d.player_out.as_deref() == Some(batter))
    .count() as u64;

  let strike_rate = if balls_faced > 0 {
    runs as f64 / balls_faced as f64 * 100.0
  } else {
    0.0
  };
  let average = Ratio::of(runs as f64, outs as f64);

  let fifties = runs_per_match.values().filter(|&&r| (50..100).contains(&r)).count() as u64;
  let hundreds = runs_per_match.values().filter(|&&r| r >= 100).count() as u64;
  let highest_score = runs_per_match.values().copied().max().unwrap_or(0);

  let innings = match_ids.len() as u64;

  Some(BattingRecord {
    innings,
    runs,
    average,
    strike_rate,
    balls_faced,
    fours,
    sixes,
    fifties,
    hundreds,
    highest_score,
    not_outs: innings as i64 - outs as i64,
    man_of_match: man_of_match_count(dataset, batter, scope),
    dismissals: outs,
  })
}

/// Distinct matches in scope where the award went to this player.
pub(crate) fn man_of_match_count(dataset: &Dataset, player: &str, scope: &[&Delivery]) -> u64 {
  let ids: HashSet<u64> = scope.iter().map(|d| d.match_id).collect();
  ids
    .iter()
    .filter(|&&id| {
      dataset
        .match_by_id(id)
        .is_some_and(|m| m.player_of_match.as_deref() == Some(player))
    })
    .count() as u64
}

/// Record restricted to deliveries bowled by the given opposing team.
pub fn batting_vs_team(
  dataset: &Dataset,
  batter: &str,
  team: &str,
  scope: &[&Delivery],
) -> Option<BattingRecord> {
  let opponent_scope: Vec<&Delivery> = scope
    .iter()
    .copied()
    .filter(|d| d.bowling_team == team)
    .collect();
  batting_record(dataset, batter, &opponent_scope)
}

/// Overall record plus a per-team breakdown over the full team universe,
/// computed from recognized match innings only. `None` when the batter
/// never appears in that scope.
pub fn batting_report(dataset: &Dataset, batter: &str) -> Option<BattingReport> {
  if !dataset.has_batter(batter) {
    return None;
  }
  let scope = dataset.main_innings();
  let overall = batting_record(dataset, batter, &scope);
  let against: BTreeMap<String, Option<BattingRecord>> = dataset
    .teams()
    .iter()
    .map(|team| (team.clone(), batting_vs_team(dataset, batter, team, &scope)))
    .collect();

  Some(BattingReport {
    batter: batter.to_string(),
    overall,
    against,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{DeliveryRow, MatchRow};

  fn m(id: u64, team1: &str, team2: &str, pom: Option<&str>) -> MatchRow {
    MatchRow {
      id,
      team1: team1.into(),
      team2: team2.into(),
      match_number: "7".into(),
      winning_team: Some(team1.into()),
      player_of_match: pom.map(Into::into),
    }
  }

  fn ball(id: u64, batter: &str, runs: u32) -> DeliveryRow {
    DeliveryRow {
      id,
      innings: 1,
      batter: batter.into(),
      bowler: "JJ Bumrah".into(),
      extra_type: None,
      batsman_run: runs,
      total_run: runs,
      non_boundary: 0,
      is_wicket_delivery: 0,
      player_out: None,
      kind: None,
      batting_team: "Royal Challengers Bangalore".into(),
    }
  }

  /// Two matches: RCB bats against MI, "V Kohli" scores 58 then 12, out once.
  fn fixture() -> Dataset {
    let matches = vec![
      m(1, "Royal Challengers Bangalore", "Mumbai Indians", Some("V Kohli")),
      m(2, "Mumbai Indians", "Royal Challengers Bangalore", None),
    ];
    let mut deliveries = Vec::new();
    // Match 1: 13 balls, 58 runs (ten 4s, three 6s), plus one wide, not out.
    for _ in 0..10 {
      deliveries.push(ball(1, "V Kohli", 4));
    }
    for _ in 0..3 {
      deliveries.push(ball(1, "V Kohli", 6));
    }
    let mut wide = ball(1, "V Kohli", 0);
    wide.extra_type = Some("wides".into());
    wide.total_run = 1;
    deliveries.push(wide);
    // Match 2: 12 singles, then bowled.
    for _ in 0..12 {
      deliveries.push(ball(2, "V Kohli", 1));
    }
    let mut out = ball(2, "V Kohli", 0);
    out.is_wicket_delivery = 1;
    out.player_out = Some("V Kohli".into());
    out.kind = Some("bowled".into());
    deliveries.push(out);
    Dataset::build(matches, deliveries).unwrap()
  }

  fn record(dataset: &Dataset, batter: &str) -> BattingRecord {
    let scope = dataset.main_innings();
    batting_record(dataset, batter, &scope).unwrap()
  }

  #[test]
  fn core_counting() {
    let dataset = fixture();
    let rec = record(&dataset, "V Kohli");
    assert_eq!(rec.innings, 2);
    assert_eq!(rec.runs, 70);
    // The wide is not a ball faced; the dismissal ball is.
    assert_eq!(rec.balls_faced, 26);
    assert_eq!(rec.dismissals, 1);
    assert_eq!(rec.not_outs, 1);
    assert_eq!(rec.fours, 10);
    assert_eq!(rec.sixes, 3);
    assert_eq!(rec.fifties, 1);
    assert_eq!(rec.hundreds, 0);
    assert_eq!(rec.highest_score, 58);
    assert_eq!(rec.man_of_match, 1);
  }

  #[test]
  fn strike_rate_is_exact() {
    let dataset = fixture();
    let rec = record(&dataset, "V Kohli");
    let expected = 70.0 / 26.0 * 100.0;
    assert!((rec.strike_rate - expected).abs() < 1e-9);
    assert_eq!(rec.average, Ratio::Finite(70.0));
  }

  #[test]
  fn average_undefined_when_never_dismissed() {
    let matches = vec![m(1, "A", "B", None)];
    let deliveries = vec![ball(1, "opener", 4)];
    let dataset = Dataset::build(matches, deliveries).unwrap();
    let rec = record(&dataset, "opener");
    assert_eq!(rec.average, Ratio::Undefined);
  }

  #[test]
  fn strike_rate_zero_when_only_wides_faced() {
    let matches = vec![m(1, "A", "B", None)];
    let mut wide = ball(1, "tailender", 0);
    wide.extra_type = Some("wides".into());
    let dataset = Dataset::build(matches, vec![wide]).unwrap();
    let rec = record(&dataset, "tailender");
    assert_eq!(rec.balls_faced, 0);
    assert_eq!(rec.strike_rate, 0.0);
  }

  #[test]
  fn overthrow_boundary_is_not_a_four() {
    let matches = vec![m(1, "A", "B", None)];
    let mut overthrow = ball(1, "opener", 4);
    overthrow.non_boundary = 1;
    let dataset = Dataset::build(matches, vec![ball(1, "opener", 4), overthrow]).unwrap();
    let rec = record(&dataset, "opener");
    assert_eq!(rec.fours, 1);
    assert_eq!(rec.runs, 8);
  }

  #[test]
  fn run_out_at_non_strikers_end_counts_as_dismissal() {
    let matches = vec![m(1, "A", "B", None)];
    // Partner faces the ball; the non-striker is the one given out.
    let mut run_out = ball(1, "striker", 1);
    run_out.is_wicket_delivery = 1;
    run_out.player_out = Some("non-striker".into());
    run_out.kind = Some("run out".into());
    let deliveries = vec![ball(1, "non-striker", 2), run_out];
    let dataset = Dataset::build(matches, deliveries).unwrap();
    let rec = record(&dataset, "non-striker");
    assert_eq!(rec.dismissals, 1);
    assert_eq!(rec.not_outs, 0);
  }

  #[test]
  fn empty_scope_yields_none() {
    let dataset = fixture();
    let scope = dataset.main_innings();
    assert!(batting_record(&dataset, "nobody", &scope).is_none());
  }

  #[test]
  fn vs_team_narrows_to_one_opponent() {
    let dataset = fixture();
    let scope = dataset.main_innings();
    let vs_mi = batting_vs_team(&dataset, "V Kohli", "Mumbai Indians", &scope).unwrap();
    // Both matches were against MI, so this mirrors the overall record.
    assert_eq!(vs_mi.runs, 70);
    assert!(batting_vs_team(&dataset, "V Kohli", "Chennai Super Kings", &scope).is_none());
  }

  #[test]
  fn report_spans_the_team_universe() {
    let dataset = fixture();
    let report = batting_report(&dataset, "V Kohli").unwrap();
    assert!(report.overall.is_some());
    let teams: Vec<_> = report.against.keys().cloned().collect();
    assert_eq!(teams, vec!["Mumbai Indians", "Royal Challengers Bangalore"]);
    // Never batted against their own side.
    assert!(report.against["Royal Challengers Bangalore"].is_none());
  }

  #[test]
  fn report_not_found_for_unknown_batter() {
    let dataset = fixture();
    assert!(batting_report(&dataset, "A Nonexistent").is_none());
  }
}
