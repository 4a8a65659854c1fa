use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{
    PlayerMatchesResponse, StatsFiltersResponse, StatsPageResponse, StatsRow,
};
use crate::domain::{Gender, Phase};
use crate::stats::{run_query, AggregateKey, FilterState, SortColumn, SortOrder, StatMode};

use super::{AppState, StatsParams};

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> Json<StatsPageResponse> {
    let filter = filter_from_params(&state, params);
    let view = run_query(&state.data.stats, &filter);

    let start_rank = view.start_rank();
    let items = view
        .items
        .iter()
        .enumerate()
        .map(|(i, aggregate)| StatsRow::from_aggregate(start_rank + i, aggregate))
        .collect();

    Json(StatsPageResponse {
        items,
        total: view.total,
        page: view.page,
        page_size: view.page_size,
        page_count: view.page_count(),
        has_prev: view.has_prev(),
        has_next: view.has_next(),
    })
}

pub async fn get_stats_filters(State(state): State<Arc<AppState>>) -> Json<StatsFiltersResponse> {
    Json(StatsFiltersResponse {
        competitions: state.data.stats.competitions(),
        teams: state.data.stats.teams(),
    })
}

pub async fn get_player_matches(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
    Query(params): Query<StatsParams>,
) -> impl IntoResponse {
    let key = AggregateKey {
        player_id,
        team: params.team.unwrap_or_default(),
        competition: params.competition.unwrap_or_default(),
        scope: params.phase.as_deref().and_then(Phase::parse),
    };

    match state.data.stats.find(&key) {
        Some(aggregate) => Json(PlayerMatchesResponse {
            player_name: aggregate.player_name.clone(),
            team_name: aggregate.team_name.clone(),
            matches: aggregate.matches.clone(),
            maxima: aggregate.match_maxima(),
        })
        .into_response(),
        None => (StatusCode::NOT_FOUND, "No stats for this player").into_response(),
    }
}

/// Unknown parameter values fall back to the defaults instead of failing the
/// request.
fn filter_from_params(state: &AppState, params: StatsParams) -> FilterState {
    let settings = &state.config.query;
    let page_size = params
        .page_size
        .unwrap_or(settings.page_size)
        .clamp(1, settings.max_page_size);

    FilterState {
        competition: params.competition.filter(|c| !c.is_empty()),
        team: params.team.filter(|t| !t.is_empty()),
        gender: params.gender.as_deref().and_then(Gender::parse),
        phase: params.phase.as_deref().and_then(Phase::parse),
        search: params.search.filter(|s| !s.is_empty()),
        sort_column: params.sort_by.as_deref().and_then(SortColumn::parse),
        sort_order: params
            .order
            .as_deref()
            .and_then(SortOrder::parse)
            .unwrap_or_default(),
        mode: params
            .mode
            .as_deref()
            .and_then(StatMode::parse)
            .unwrap_or_default(),
        page: params.page.unwrap_or(1).max(1),
        page_size,
    }
}
