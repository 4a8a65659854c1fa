use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use crate::api::models::ScheduleResponse;
use crate::domain::classify::Gender;
use crate::domain::schedule::{self, ScheduleFilter};

use super::{AppState, MatchParams};

pub async fn get_matches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MatchParams>,
) -> Json<ScheduleResponse> {
    let filter = ScheduleFilter {
        date: params.date.filter(|d| !d.is_empty()),
        competition: params.competition.filter(|c| !c.is_empty()),
        gender: params.gender.as_deref().and_then(Gender::parse),
    };

    let mut visible = schedule::filter_games(&state.data.games, &filter);
    schedule::sort_by_start_time(&mut visible);

    let items: Vec<_> = visible.into_iter().cloned().collect();
    Json(ScheduleResponse {
        total: items.len(),
        items,
    })
}

pub async fn get_match_dates(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(schedule::match_dates(&state.data.games))
}

pub async fn get_match_competitions(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(schedule::competitions(&state.data.games))
}
