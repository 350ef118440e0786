//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::service::MediaService;
use crate::types::{MediaItem, ServiceMode};
use serde_json::json;
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let service = self.connect().await?;

        match &self.cli.command {
            Commands::Count { format } => self.count(&service, *format).await,
            Commands::List { non_hd, format } => self.list(&service, *non_hd, *format),
        }
    }

    fn service_config(&self) -> ServiceConfig {
        ServiceConfig::builder()
            .base_url(&self.cli.base_url)
            .app_key(&self.cli.app_key)
            .per_page(self.cli.per_page)
            .timeout(Duration::from_secs(self.cli.timeout_secs))
            .failure_policy(self.cli.on_error.into())
            .build()
    }

    async fn connect(&self) -> Result<MediaService> {
        let mode = if self.cli.cached {
            ServiceMode::Cached
        } else {
            ServiceMode::Streaming
        };
        MediaService::connect(self.service_config(), mode).await
    }

    async fn count(&self, service: &MediaService, format: OutputFormat) -> Result<()> {
        let hd = service.count(true).await?;
        let non_hd = service.count(false).await?;

        match format {
            OutputFormat::Pretty => {
                // Legacy output lines, kept verbatim
                println!("HD Media Count={hd}");
                println!("Non HD Media Count={non_hd}");
            }
            OutputFormat::Json => {
                let out = json!({ "hd": hd, "non_hd": non_hd, "total": hd + non_hd });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
        }

        Ok(())
    }

    fn list(&self, service: &MediaService, non_hd: bool, format: OutputFormat) -> Result<()> {
        let items: Vec<MediaItem> = if non_hd {
            service.non_hd_media()?
        } else {
            service.hd_media()?
        };

        match format {
            OutputFormat::Pretty => {
                for item in &items {
                    println!("{}", item.id);
                }
                eprintln!("{} items", items.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&items)?);
            }
        }

        Ok(())
    }
}
