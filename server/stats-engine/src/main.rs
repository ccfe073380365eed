//! Binary entrypoint: load the two CSVs and print one report as JSON.
//!
//! Usage:
//!   stats-engine <matches.csv> <deliveries.csv> team <name> [opponent]
//!   stats-engine <matches.csv> <deliveries.csv> batting <name>
//!   stats-engine <matches.csv> <deliveries.csv> bowling <name>
//!   stats-engine <matches.csv> <deliveries.csv> list

use std::path::Path;
use std::process::ExitCode;

use stats_engine::{batting, bowling, load, serialize, team};

fn usage() -> ExitCode {
  eprintln!("usage: stats-engine <matches.csv> <deliveries.csv> <team|batting|bowling|list> [name] [opponent]");
  ExitCode::from(2)
}

fn main() -> ExitCode {
  let args: Vec<String> = std::env::args().skip(1).collect();
  if args.len() < 3 {
    return usage();
  }

  let dataset = match load::load_dataset(Path::new(&args[0]), Path::new(&args[1])) {
    Ok(d) => d,
    Err(e) => {
      eprintln!("stats-engine: load error: {}", e);
      return ExitCode::FAILURE;
    }
  };

  let payload = match (args[2].as_str(), args.get(3), args.get(4)) {
    ("list", _, _) => serde_json::to_value(dataset.listing()).unwrap_or_default(),
    ("team", Some(name), Some(opponent)) => match team::team_vs_team(&dataset, name, opponent) {
      Some(h2h) => serde_json::to_value(&h2h).unwrap_or_default(),
      None => serialize::message_value("Invalid team name provided."),
    },
    ("team", Some(name), None) => match team::team_report(&dataset, name) {
      Some(report) => serialize::team_report_value(&report),
      None => serialize::message_value(format!("Team '{}' not found.", name)),
    },
    ("batting", Some(name), None) => match batting::batting_report(&dataset, name) {
      Some(report) => serialize::batting_report_value(&report),
      None => serialize::message_value(format!("Batsman '{}' not found in records.", name)),
    },
    ("bowling", Some(name), None) => match bowling::bowling_report(&dataset, name) {
      Some(report) => serialize::bowling_report_value(&report),
      None => serialize::message_value(format!("Bowler '{}' not found in records.", name)),
    },
    _ => return usage(),
  };

  match serialize::to_pretty_string(&payload) {
    Ok(text) => {
      println!("{}", text);
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("stats-engine: serialize error: {}", e);
      ExitCode::FAILURE
    }
  }
}
