//! Export notification decorator
//!
//! Wraps an [`ExportDataHandler`] so that every successful preparation is
//! followed by a `notifyDataChanged` dispatch through the connector. The
//! analytics service polls nothing; it learns about fresh data only through
//! this notification.

use crate::adapters::connector::traits::Connector;
use crate::core::export::handler::ExportDataHandler;
use crate::domain::{CommandName, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Decorator that notifies the analytics service after data preparation
///
/// Behavior contract:
/// - A preparation error propagates immediately; no notification is sent.
/// - On non-error preparation the notification is dispatched exactly once,
///   regardless of whether any data was staged.
/// - A connector error propagates after preparation already succeeded; this
///   is fire-after-success, not guaranteed delivery.
/// - The preparation result is returned to the caller unchanged.
pub struct ExportNotification<H> {
    inner: H,
    connector: Arc<dyn Connector>,
}

impl<H> ExportNotification<H>
where
    H: ExportDataHandler,
{
    /// Wrap a preparation handler with change notification
    pub fn new(inner: H, connector: Arc<dyn Connector>) -> Self {
        Self { inner, connector }
    }
}

#[async_trait]
impl<H> ExportDataHandler for ExportNotification<H>
where
    H: ExportDataHandler,
{
    async fn prepare_export_data(&self) -> Result<bool> {
        let prepared = self.inner.prepare_export_data().await?;

        tracing::debug!(
            command = %CommandName::NOTIFY_DATA_CHANGED,
            data_staged = prepared,
            "Dispatching data-change notification"
        );
        self.connector
            .execute(CommandName::NOTIFY_DATA_CHANGED)
            .await?;

        Ok(prepared)
    }
}
