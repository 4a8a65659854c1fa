use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use crate::config::SourceSettings;
use crate::domain::RawGameFile;
use crate::http::RateLimitedClient;

/// One downloadable match file from the repository listing.
#[derive(Debug, Clone)]
pub struct RepoFile {
    pub name: String,
    pub download_url: String,
}

/// Entry of the GitHub contents API response. Directories carry no
/// download URL and are filtered out.
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(default)]
    download_url: Option<String>,
}

/// Client for a GitHub repository that publishes match files as static JSON
pub struct RepoFilesClient {
    http: RateLimitedClient,
    settings: SourceSettings,
}

impl RepoFilesClient {
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        Ok(Self {
            http: RateLimitedClient::new(settings)?,
            settings: settings.clone(),
        })
    }

    /// List the repository directory, keeping entries with the recognized
    /// file suffix.
    pub async fn list_match_files(&mut self) -> Result<Vec<RepoFile>> {
        let url = contents_url(&self.settings);
        info!("Listing match files from {}", url);

        let entries: Vec<ContentEntry> = self
            .http
            .get_json(&url)
            .await
            .context("Failed to list repository contents")?;

        let files: Vec<RepoFile> = entries
            .into_iter()
            .filter(|entry| entry.name.ends_with(self.settings.file_suffix))
            .filter_map(|entry| {
                entry.download_url.map(|download_url| RepoFile {
                    name: entry.name,
                    download_url,
                })
            })
            .collect();

        info!("  → Found {} match files", files.len());
        Ok(files)
    }

    /// Download and decode one match file.
    pub async fn download_file(&mut self, file: &RepoFile) -> Result<RawGameFile> {
        self.http
            .get_json(&file.download_url)
            .await
            .with_context(|| format!("Failed to download {}", file.name))
    }
}

fn contents_url(settings: &SourceSettings) -> String {
    let mut url = format!(
        "{}/repos/{}/{}/contents/",
        settings.api_base_url, settings.repo_owner, settings.repo_name
    );

    if !settings.repo_path.is_empty() {
        let segments: Vec<String> = settings
            .repo_path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        url.push_str(&segments.join("/"));
    }

    url
}
