//! HTTP connector implementation
//!
//! Dispatches commands to the analytics service as authenticated POST
//! requests. Each command maps to `POST {base_url}/v1/commands/{name}` with
//! a bearer token.

use crate::adapters::connector::traits::Connector;
use crate::config::ConnectorConfig;
use crate::domain::{BeaconError, CommandName, ConnectorError, Result};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::time::Duration;
use url::Url;

/// Connector that dispatches commands over HTTP
pub struct HttpConnector {
    client: reqwest::Client,
    base_url: Url,
    api_token: String,
}

impl HttpConnector {
    /// Create a connector from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &ConnectorConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            BeaconError::Configuration(format!(
                "Invalid connector base URL {}: {}",
                config.base_url, e
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                BeaconError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.expose_secret().as_ref().to_string(),
        })
    }

    /// Build the endpoint URL for a command
    fn command_url(&self, command: CommandName) -> Result<Url> {
        self.base_url
            .join(&format!("v1/commands/{}", command.as_str()))
            .map_err(|e| {
                BeaconError::Configuration(format!(
                    "Failed to build command URL for {}: {}",
                    command, e
                ))
            })
    }

    /// Map an HTTP status to a connector error
    fn status_error(status: reqwest::StatusCode, body: String) -> ConnectorError {
        match status.as_u16() {
            401 | 403 => ConnectorError::AuthenticationFailed(body),
            429 => ConnectorError::RateLimited(body),
            s if status.is_client_error() => ConnectorError::ClientError {
                status: s,
                message: body,
            },
            s => ConnectorError::ServerError {
                status: s,
                message: body,
            },
        }
    }
}

#[async_trait]
impl Connector for HttpConnector {
    async fn execute(&self, command: CommandName) -> Result<()> {
        // Refuse unknown commands before touching the wire
        if !CommandName::KNOWN.contains(&command) {
            return Err(ConnectorError::UnknownCommand(command.as_str().to_string()).into());
        }

        let url = self.command_url(command)?;

        tracing::debug!(command = %command, url = %url, "Dispatching command");

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_token)
            .json(&serde_json::json!({ "command": command.as_str() }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ConnectorError::Timeout(e.to_string())
                } else {
                    ConnectorError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(command = %command, status = status.as_u16(), "Command executed");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            command = %command,
            status = status.as_u16(),
            "Command dispatch failed"
        );

        Err(Self::status_error(status, body).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn connector_config(base_url: &str) -> ConnectorConfig {
        ConnectorConfig {
            base_url: base_url.to_string(),
            api_token: secret_string("test-token".to_string()),
            timeout_seconds: 5,
        }
    }

    #[tokio::test]
    async fn test_execute_posts_to_command_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/commands/notifyDataChanged")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .create_async()
            .await;

        let connector = HttpConnector::new(&connector_config(&server.url())).unwrap();
        let result = connector.execute(CommandName::NOTIFY_DATA_CHANGED).await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_execute_maps_auth_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/commands/notifyDataChanged")
            .with_status(401)
            .with_body("bad token")
            .create_async()
            .await;

        let connector = HttpConnector::new(&connector_config(&server.url())).unwrap();
        let err = connector
            .execute(CommandName::NOTIFY_DATA_CHANGED)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BeaconError::Connector(ConnectorError::AuthenticationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_execute_maps_rate_limit() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/commands/update")
            .with_status(429)
            .create_async()
            .await;

        let connector = HttpConnector::new(&connector_config(&server.url())).unwrap();
        let err = connector.execute(CommandName::UPDATE).await.unwrap_err();

        assert!(matches!(
            err,
            BeaconError::Connector(ConnectorError::RateLimited(_))
        ));
    }

    #[tokio::test]
    async fn test_execute_maps_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/commands/signUp")
            .with_status(503)
            .create_async()
            .await;

        let connector = HttpConnector::new(&connector_config(&server.url())).unwrap();
        let err = connector.execute(CommandName::SIGN_UP).await.unwrap_err();

        assert!(matches!(
            err,
            BeaconError::Connector(ConnectorError::ServerError { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_execute_rejects_unknown_command_without_request() {
        // Unroutable port - any request attempt would fail loudly
        let connector =
            HttpConnector::new(&connector_config("http://127.0.0.1:1")).unwrap();
        let err = connector
            .execute(CommandName::new("flushCache"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BeaconError::Connector(ConnectorError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = HttpConnector::new(&connector_config("not a url"));
        assert!(result.is_err());
    }

    #[test]
    fn test_command_url_includes_name() {
        let connector =
            HttpConnector::new(&connector_config("https://analytics.example.com/")).unwrap();
        let url = connector.command_url(CommandName::NOTIFY_DATA_CHANGED).unwrap();
        assert_eq!(
            url.as_str(),
            "https://analytics.example.com/v1/commands/notifyDataChanged"
        );
    }
}
