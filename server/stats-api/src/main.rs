//! Binary entrypoint for the stats API.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use stats_api::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let matches_csv = std::env::var("MATCHES_CSV").unwrap_or_else(|_| "ipl_matches.csv".into());
  let deliveries_csv = std::env::var("DELIVERIES_CSV").unwrap_or_else(|_| "ipl_ball.csv".into());
  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "5006".into())
    .parse()
    .expect("PORT must be a valid u16");

  let dataset = stats_engine::load::load_dataset(Path::new(&matches_csv), Path::new(&deliveries_csv))?;
  println!(
    "stats-api: loaded {} matches, {} deliveries, {} teams",
    dataset.matches().len(),
    dataset.deliveries().len(),
    dataset.teams().len()
  );

  let state = Arc::new(AppState { dataset });

  let app = Router::new()
    .route("/health", get(stats_api::health))
    .route("/api/list-all", get(stats_api::list_all))
    .route("/api/team-record", get(stats_api::team_record))
    .route("/api/teamvteam", get(stats_api::team_vs_team))
    .route("/api/batting-record", get(stats_api::batting_record))
    .route("/api/bowling-record", get(stats_api::bowling_record))
    .layer(CorsLayer::permissive())
    .with_state(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  println!("stats-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
