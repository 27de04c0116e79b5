//! Error taxonomy shared by every crate in the workspace.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("unknown domain agent: {0}")]
    UnknownDomainAgent(String),

    #[error("upstream model timed out after {0:?}")]
    UpstreamTimeout(std::time::Duration),

    #[error("upstream model error: {provider} - {message}")]
    UpstreamModel { provider: String, message: String },

    #[error("tool error: {name} - {message}")]
    ToolError { name: String, message: String },

    #[error("tool loop timed out at step {step}")]
    ToolLoopTimeout {
        step: String,
        tools_used: Vec<String>,
        tool_results: HashMap<String, serde_json::Value>,
    },

    #[error("failed to parse model output: {0}")]
    Parse(String),

    #[error("turn cancelled")]
    Cancelled,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream_model(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamModel {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn tool_error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolError {
            name: name.into(),
            message: message.into(),
        }
    }
}
