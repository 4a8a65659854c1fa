#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub api_base_url: &'static str,
    pub repo_owner: &'static str,
    pub repo_name: &'static str,
    /// Path inside the repository holding the match files ("" = repo root).
    pub repo_path: &'static str,
    pub file_suffix: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com",
            repo_owner: "emebullon",
            repo_name: "mini2025",
            repo_path: "",
            file_suffix: ".json",
            user_agent: "TorneoStats/0.1",
            timeout_secs: 30,
            rate_limit_ms: 100, // 10 req/sec
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuerySettings {
    pub page_size: usize,
    pub max_page_size: usize,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            page_size: 50,
            max_page_size: 200,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub source: SourceSettings,
    pub query: QuerySettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
