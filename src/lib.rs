pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod fetchers;
pub mod http;
pub mod services;
pub mod stats;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::ingestion::IngestionService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_ingest() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = IngestionService::new(&config)?;
        let data = service.run().await?;

        info!(
            "Summary: {} games, {} player aggregates, {} competitions, {} teams",
            data.games.len(),
            data.stats.len(),
            data.stats.competitions().len(),
            data.stats.teams().len()
        );
        Ok(())
    })
}
