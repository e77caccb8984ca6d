//! End-to-end tests for the export pipeline
//!
//! These tests exercise the real report handler and HTTP connector together:
//! collection from a source directory, archive staging, and the
//! notifyDataChanged dispatch.

use beacon::adapters::connector::HttpConnector;
use beacon::config::{secret_string, ConnectorConfig, ExportConfig};
use beacon::core::export::{ExportDataHandler, ExportNotification, ReportExportHandler};
use beacon::domain::{BeaconError, ExportManifest};
use sha2::{Digest, Sha256};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn export_config(source: &TempDir, staging: &TempDir) -> ExportConfig {
    ExportConfig {
        source_dir: source.path().to_string_lossy().to_string(),
        staging_dir: staging.path().to_string_lossy().to_string(),
        archive_prefix: "export".to_string(),
    }
}

fn connector_config(base_url: &str) -> ConnectorConfig {
    ConnectorConfig {
        base_url: base_url.to_string(),
        api_token: secret_string("integration-token".to_string()),
        timeout_seconds: 5,
    }
}

fn staged_files(staging: &TempDir) -> (Vec<std::path::PathBuf>, Vec<std::path::PathBuf>) {
    let mut archives = Vec::new();
    let mut manifests = Vec::new();
    for entry in fs::read_dir(staging.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        if name.ends_with(".manifest.json") {
            manifests.push(path);
        } else if name.ends_with(".ndjson") {
            archives.push(path);
        }
    }
    (archives, manifests)
}

#[tokio::test]
async fn test_export_stages_archive_and_notifies() {
    let source = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    fs::write(
        source.path().join("orders.json"),
        r#"[{"order_id": 1001, "total": 25.0}, {"order_id": 1002, "total": 9.5}]"#,
    )
    .unwrap();
    fs::write(
        source.path().join("customers.json"),
        r#"[{"customer_id": 7}]"#,
    )
    .unwrap();

    let mut server = mockito::Server::new_async().await;
    let notify = server
        .mock("POST", "/v1/commands/notifyDataChanged")
        .match_header("authorization", "Bearer integration-token")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let connector = Arc::new(HttpConnector::new(&connector_config(&server.url())).unwrap());
    let handler = ReportExportHandler::new(&export_config(&source, &staging), false);
    let export = ExportNotification::new(handler, connector);

    let staged = export.prepare_export_data().await.unwrap();
    assert!(staged);
    notify.assert_async().await;

    // Exactly one archive and one manifest were staged
    let (archives, manifests) = staged_files(&staging);
    assert_eq!(archives.len(), 1);
    assert_eq!(manifests.len(), 1);

    // Manifest checksum matches the archive bytes
    let manifest: ExportManifest =
        serde_json::from_str(&fs::read_to_string(&manifests[0]).unwrap()).unwrap();
    let archive_bytes = fs::read(&archives[0]).unwrap();
    let mut hasher = Sha256::new();
    hasher.update(&archive_bytes);
    let checksum = format!("{:x}", hasher.finalize());

    assert_eq!(manifest.checksum, checksum);
    assert_eq!(manifest.record_count, 3);
    assert_eq!(
        manifest.reports,
        vec!["customers".to_string(), "orders".to_string()]
    );

    // Archive holds one NDJSON line per record
    let line_count = String::from_utf8(archive_bytes).unwrap().lines().count();
    assert_eq!(line_count, 3);
}

#[tokio::test]
async fn test_empty_source_returns_false_but_still_notifies() {
    let source = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();

    let mut server = mockito::Server::new_async().await;
    let notify = server
        .mock("POST", "/v1/commands/notifyDataChanged")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let connector = Arc::new(HttpConnector::new(&connector_config(&server.url())).unwrap());
    let handler = ReportExportHandler::new(&export_config(&source, &staging), false);
    let export = ExportNotification::new(handler, connector);

    let staged = export.prepare_export_data().await.unwrap();

    // Nothing to stage, but dispatch still happens on non-error return
    assert!(!staged);
    notify.assert_async().await;

    let (archives, manifests) = staged_files(&staging);
    assert!(archives.is_empty());
    assert!(manifests.is_empty());
}

#[tokio::test]
async fn test_preparation_failure_suppresses_notification() {
    let staging = TempDir::new().unwrap();

    let mut server = mockito::Server::new_async().await;
    let notify = server
        .mock("POST", "/v1/commands/notifyDataChanged")
        .expect(0)
        .create_async()
        .await;

    let connector = Arc::new(HttpConnector::new(&connector_config(&server.url())).unwrap());
    let config = ExportConfig {
        source_dir: "/nonexistent/beacon/reports".to_string(),
        staging_dir: staging.path().to_string_lossy().to_string(),
        archive_prefix: "export".to_string(),
    };
    let export = ExportNotification::new(ReportExportHandler::new(&config, false), connector);

    let err = export.prepare_export_data().await.unwrap_err();

    assert!(matches!(err, BeaconError::Export(_)));
    notify.assert_async().await;
}

#[tokio::test]
async fn test_connector_failure_propagates_after_staging() {
    let source = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    fs::write(source.path().join("orders.json"), r#"[{"order_id": 1}]"#).unwrap();

    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/commands/notifyDataChanged")
        .with_status(500)
        .create_async()
        .await;

    let connector = Arc::new(HttpConnector::new(&connector_config(&server.url())).unwrap());
    let handler = ReportExportHandler::new(&export_config(&source, &staging), false);
    let export = ExportNotification::new(handler, connector);

    let err = export.prepare_export_data().await.unwrap_err();
    assert!(matches!(err, BeaconError::Connector(_)));

    // Preparation already succeeded: the archive is on disk even though the
    // notification failed
    let (archives, _) = staged_files(&staging);
    assert_eq!(archives.len(), 1);
}

#[tokio::test]
async fn test_dry_run_stages_nothing_and_notifies() {
    let source = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    fs::write(source.path().join("orders.json"), r#"[{"order_id": 1}]"#).unwrap();

    let mut server = mockito::Server::new_async().await;
    let notify = server
        .mock("POST", "/v1/commands/notifyDataChanged")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let connector = Arc::new(HttpConnector::new(&connector_config(&server.url())).unwrap());
    let handler = ReportExportHandler::new(&export_config(&source, &staging), true);
    let export = ExportNotification::new(handler, connector);

    let staged = export.prepare_export_data().await.unwrap();

    assert!(staged);
    notify.assert_async().await;

    let (archives, manifests) = staged_files(&staging);
    assert!(archives.is_empty());
    assert!(manifests.is_empty());
}
