use serde::Serialize;

use crate::domain::{Gender, NormalizedGame};
use crate::stats::{MatchEntry, PlayerAggregate, StatLine};

/// One leaderboard row as the frontend table consumes it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRow {
    pub rank: usize,
    pub dorsal: String,
    pub player_photo: String,
    pub player_name: String,
    pub team_name: String,
    pub competition: String,
    /// "" for season totals, otherwise the phase label.
    pub phase_type: String,
    pub gender: Gender,
    pub games: u32,
    #[serde(flatten)]
    pub totals: StatLine,
    pub pct2: String,
    pub pct3: String,
    #[serde(rename = "pctTl")]
    pub pct_tl: String,
}

impl StatsRow {
    pub fn from_aggregate(rank: usize, aggregate: &PlayerAggregate) -> Self {
        Self {
            rank,
            dorsal: aggregate.dorsal.clone(),
            player_photo: aggregate.player_photo.clone(),
            player_name: aggregate.player_name.clone(),
            team_name: aggregate.team_name.clone(),
            competition: aggregate.competition.clone(),
            phase_type: aggregate.phase_label().to_string(),
            gender: aggregate.gender,
            games: aggregate.games,
            totals: aggregate.totals,
            pct2: aggregate.pct2(),
            pct3: aggregate.pct3(),
            pct_tl: aggregate.pct_tl(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPageResponse {
    pub items: Vec<StatsRow>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsFiltersResponse {
    pub competitions: Vec<String>,
    pub teams: Vec<String>,
}

/// Drill-down payload: one aggregate's match history plus per-column bests.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchesResponse {
    pub player_name: String,
    pub team_name: String,
    pub matches: Vec<MatchEntry>,
    pub maxima: StatLine,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub items: Vec<NormalizedGame>,
    pub total: usize,
}
