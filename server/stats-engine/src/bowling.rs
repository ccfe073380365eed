//! Bowling aggregation: per-bowler records, best figures, opponent breakdowns.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::batting::man_of_match_count;
use crate::dataset::Dataset;
use crate::types::{BowlingRecord, BowlingReport, Delivery, Ratio};

/// Compute a bowler's record over the given delivery scope.
///
/// Byes, leg-byes and penalty runs are not charged to the bowler; wides and
/// no-balls are charged but do not count as balls bowled. Only catches,
/// bowled, stumpings, lbw and hit-wicket dismissals count as the bowler's
/// wickets.
///
/// Returns `None` when the bowler has no deliveries in scope.
pub fn bowling_record(dataset: &Dataset, bowler: &str, scope: &[&Delivery]) -> Option<BowlingRecord> {
  let own: Vec<&Delivery> = scope.iter().copied().filter(|d| d.bowler == bowler).collect();
  if own.is_empty() {
    return None;
  }

  let mut match_ids = HashSet::new();
  let mut runs_conceded: u64 = 0;
  let mut wickets: u64 = 0;
  let mut balls_bowled: u64 = 0;
  let mut fours_conceded: u64 = 0;
  let mut sixes_conceded: u64 = 0;
  // Per-match (wickets, chargeable runs) for hauls and the best figure.
  let mut per_match: HashMap<u64, (u64, u64)> = HashMap::new();

  for d in &own {
    match_ids.insert(d.match_id);
    let charged = u64::from(d.chargeable_runs());
    let wicket = u64::from(d.is_bowler_wicket());
    runs_conceded += charged;
    wickets += wicket;
    if d.extra.counts_as_ball_bowled() {
      balls_bowled += 1;
    }
    if d.off_bat_boundary(4) {
      fours_conceded += 1;
    }
    if d.off_bat_boundary(6) {
      sixes_conceded += 1;
    }
    let entry = per_match.entry(d.match_id).or_insert((0, 0));
    entry.0 += wicket;
    entry.1 += charged;
  }

  let economy = if balls_bowled > 0 {
    runs_conceded as f64 / balls_bowled as f64 * 6.0
  } else {
    0.0
  };
  let average = Ratio::of(runs_conceded as f64, wickets as f64);
  let strike_rate = Ratio::of(balls_bowled as f64, wickets as f64);

  let three_wickets_plus = per_match.values().filter(|(w, _)| *w >= 3).count() as u64;

  Some(BowlingRecord {
    innings: match_ids.len() as u64,
    wickets,
    runs_conceded,
    economy,
    average,
    strike_rate,
    balls_bowled,
    fours_conceded,
    sixes_conceded,
    three_wickets_plus,
    best_figure: best_figure(&per_match),
    man_of_match: man_of_match_count(dataset, bowler, scope),
  })
}

/// Best single-match analysis: most wickets, then fewest runs conceded,
/// formatted "wickets/runs". "0/0" for an empty map.
fn best_figure(per_match: &HashMap<u64, (u64, u64)>) -> String {
  let mut best: Option<(u64, u64)> = None;
  for &(w, r) in per_match.values() {
    let better = match best {
      None => true,
      Some((bw, br)) => w > bw || (w == bw && r < br),
    };
    if better {
      best = Some((w, r));
    }
  }
  match best {
    Some((w, r)) => format!("{}/{}", w, r),
    None => "0/0".to_string(),
  }
}

/// Per-opponent view of a bowler's record.
///
/// Quirk carried over from the published reports: the opponent name does
/// not narrow the scope, so every `against` entry mirrors the overall
/// record. Callers depend on the shape, not the narrowing.
pub fn bowling_vs_team(
  dataset: &Dataset,
  bowler: &str,
  _team: &str,
  scope: &[&Delivery],
) -> Option<BowlingRecord> {
  bowling_record(dataset, bowler, scope)
}

/// Overall record plus a per-team breakdown over the full team universe,
/// computed from recognized match innings only. `None` when the bowler
/// never appears in that scope.
pub fn bowling_report(dataset: &Dataset, bowler: &str) -> Option<BowlingReport> {
  if !dataset.has_bowler(bowler) {
    return None;
  }
  let scope = dataset.main_innings();
  let overall = bowling_record(dataset, bowler, &scope);
  let against: BTreeMap<String, Option<BowlingRecord>> = dataset
    .teams()
    .iter()
    .map(|team| (team.clone(), bowling_vs_team(dataset, bowler, team, &scope)))
    .collect();

  Some(BowlingReport {
    bowler: bowler.to_string(),
    overall,
    against,
  })
}
