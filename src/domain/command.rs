//! Command name identifiers
//!
//! The analytics service accepts a small fixed set of named commands. Names
//! are defined at compile time; the connector refuses anything outside the
//! known set, so typos fail fast instead of producing opaque HTTP errors.

use std::fmt;

/// Name of a remote command understood by the analytics service
///
/// Command names are opaque string tokens. The set is closed: new commands
/// are added as associated constants, not constructed from runtime input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandName(&'static str);

impl CommandName {
    /// Notify the analytics service that exported data has changed
    pub const NOTIFY_DATA_CHANGED: CommandName = CommandName("notifyDataChanged");

    /// Register this installation with the analytics service
    pub const SIGN_UP: CommandName = CommandName("signUp");

    /// Refresh the subscription details held by the analytics service
    pub const UPDATE: CommandName = CommandName("update");

    /// All commands the connector is allowed to dispatch
    pub const KNOWN: [CommandName; 3] = [Self::NOTIFY_DATA_CHANGED, Self::SIGN_UP, Self::UPDATE];

    /// Define a command name outside the built-in set
    ///
    /// Connectors reject names that are not in [`CommandName::KNOWN`], so
    /// this exists for wiring up commands the service has not shipped yet.
    pub const fn new(name: &'static str) -> Self {
        CommandName(name)
    }

    /// Returns the wire-format name of the command
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
