//! Export command implementation
//!
//! This module implements the `export` command: stage report data and
//! notify the analytics service that data changed.

use crate::adapters::connector::HttpConnector;
use crate::config::load_config;
use crate::core::export::{ExportDataHandler, ExportNotification, ReportExportHandler};
use clap::Args;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - collect and report, but stage nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Override the report source directory
    #[arg(long)]
    pub source_dir: Option<String>,

    /// Override the staging directory
    #[arg(long)]
    pub staging_dir: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(source_dir) = &self.source_dir {
            tracing::info!(source_dir = %source_dir, "Overriding source directory from CLI");
            config.export.source_dir = source_dir.clone();
        }

        if let Some(staging_dir) = &self.staging_dir {
            tracing::info!(staging_dir = %staging_dir, "Overriding staging directory from CLI");
            config.export.staging_dir = staging_dir.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        let dry_run = config.application.dry_run;

        if dry_run {
            println!("🔍 DRY RUN MODE - No data will be staged");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !dry_run {
            println!("Export Configuration:");
            println!("  Source: {}", config.export.source_dir);
            println!("  Staging: {}", config.export.staging_dir);
            println!("  Analytics service: {}", config.connector.base_url);
            println!();
            print!("Proceed with export? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        // Wire the pipeline: handler wrapped with change notification
        let connector = match HttpConnector::new(&config.connector) {
            Ok(c) => Arc::new(c),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create connector");
                eprintln!("Failed to create connector: {e}");
                return Ok(2);
            }
        };

        let handler = ReportExportHandler::new(&config.export, dry_run);
        let export = ExportNotification::new(handler, connector);

        match export.prepare_export_data().await {
            Ok(true) => {
                println!("✅ Export data staged and analytics service notified");
                Ok(0)
            }
            Ok(false) => {
                println!("✅ No report data to stage (analytics service notified)");
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                Ok(1) // Export failure exit code
            }
        }
    }
}
