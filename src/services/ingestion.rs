use anyhow::Result;
use log::{error, info, warn};

use crate::config::AppConfig;
use crate::domain::{parse_file, FetchProgress, NormalizedGame};
use crate::fetchers::{RepoFile, RepoFilesClient};
use crate::stats::StatsBook;

/// Everything the two views are served from, built once per run.
pub struct LoadedData {
    pub games: Vec<NormalizedGame>,
    pub stats: StatsBook,
}

pub struct IngestionService {
    client: RepoFilesClient,
}

impl IngestionService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: RepoFilesClient::new(&config.source)?,
        })
    }

    pub async fn run(&mut self) -> Result<LoadedData> {
        info!("=== Starting Data Ingestion ===");

        // Step 1: List the available match files
        let files = self.list_files().await;

        // Step 2: Download each file and fold it into the data set
        let data = self.download_and_fold(&files).await;

        info!(
            "=== Ingestion Complete: {} games, {} player aggregates ===",
            data.games.len(),
            data.stats.len()
        );
        Ok(data)
    }

    /// A failed listing degrades to an empty data set.
    async fn list_files(&mut self) -> Vec<RepoFile> {
        match self.client.list_match_files().await {
            Ok(files) => files,
            Err(e) => {
                warn!("Could not list match files, serving an empty data set: {e:#}");
                Vec::new()
            }
        }
    }

    /// Download every listed file; a failed file is logged and skipped, the
    /// rest still contribute.
    async fn download_and_fold(&mut self, files: &[RepoFile]) -> LoadedData {
        let mut progress = FetchProgress::new(files.len());
        let mut games = Vec::new();
        let mut stats = StatsBook::new();

        for file in files {
            match self.client.download_file(file).await {
                Ok(raw) => {
                    for parsed in parse_file(&raw) {
                        stats.record_parsed(&parsed);
                        games.push(parsed.game);
                    }
                    progress.record_downloaded();
                }
                Err(e) => {
                    error!("Skipping {}: {e:#}", file.name);
                    progress.record_failed();
                }
            }
        }

        if progress.failed() > 0 {
            warn!(
                "{} of {} files could not be loaded",
                progress.failed(),
                files.len()
            );
        }

        LoadedData { games, stats }
    }
}
