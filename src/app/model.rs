// Defines the core data structures for the application.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One row of the `brew services list` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub name: String,
    pub status: String, // e.g., "started", "stopped", "error", "none"
    #[serde(rename = "user")]
    pub owner: String,
    #[serde(rename = "file")]
    pub definition_file: String, // e.g., "~/Library/LaunchAgents/homebrew.mxcl.redis.plist"
}

/// Verdict returned to the client for a lifecycle action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub ok: bool,
    pub output: String,
}

impl ActionResult {
    pub fn rejected(err: &InvalidAction) -> Self {
        Self {
            ok: false,
            output: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
}

impl ServiceAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
            ServiceAction::Restart => "restart",
        }
    }
}

impl fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid action: {0}")]
pub struct InvalidAction(pub String);

impl FromStr for ServiceAction {
    type Err = InvalidAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact match only, no case folding or aliases.
        match s {
            "start" => Ok(ServiceAction::Start),
            "stop" => Ok(ServiceAction::Stop),
            "restart" => Ok(ServiceAction::Restart),
            other => Err(InvalidAction(other.to_string())),
        }
    }
}
