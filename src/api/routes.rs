use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    matches::{get_match_competitions, get_match_dates, get_matches},
    stats::{get_player_matches, get_stats, get_stats_filters},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/matches", get(get_matches))
        .route("/api/matches/dates", get(get_match_dates))
        .route("/api/matches/competitions", get(get_match_competitions))
        .route("/api/stats", get(get_stats))
        .route("/api/stats/filters", get(get_stats_filters))
        .route("/api/stats/players/:player_id/matches", get(get_player_matches))
        .with_state(state)
}
