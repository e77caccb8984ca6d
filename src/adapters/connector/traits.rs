//! Connector abstraction
//!
//! This module defines the trait that connector implementations must
//! implement to dispatch named commands to the analytics service.

use crate::domain::{CommandName, Result};
use async_trait::async_trait;

/// Capability for executing named commands against the analytics service
///
/// Implementations own the transport; callers only name the command. The
/// connector carries no export state and makes no delivery guarantee beyond
/// the outcome of the single dispatch.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Execute a named command against the analytics service
    ///
    /// # Arguments
    ///
    /// * `command` - Command to dispatch
    ///
    /// # Errors
    ///
    /// Returns an error if the command is not part of the known command set
    /// or if the transport fails.
    async fn execute(&self, command: CommandName) -> Result<()>;
}
