use serde::Deserialize;

use crate::config::AppConfig;
use crate::services::ingestion::LoadedData;

pub mod matches;
pub mod stats;

pub struct AppState {
    pub data: LoadedData,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct MatchParams {
    pub date: Option<String>,
    pub competition: Option<String>,
    pub gender: Option<String>,
}

#[derive(Deserialize)]
pub struct StatsParams {
    pub competition: Option<String>,
    pub team: Option<String>,
    pub gender: Option<String>,
    pub phase: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub mode: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}
