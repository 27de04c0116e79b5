//! The `ModelAdapter` trait: the narrow seam every stage that talks to a
//! model goes through, so a scripted adapter can stand in during tests.

use crate::types::{GenerateReply, GenerateRequest, StreamDelta};
use futures::{Stream, StreamExt};
use std::pin::Pin;

pub type AdapterResult<T> = Result<T, AdapterError>;

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("rate limited: retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("stream error: {0}")]
    StreamError(String),

    #[error("cancelled")]
    Cancelled,

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

pub type ModelStream = Pin<Box<dyn Stream<Item = AdapterResult<StreamDelta>> + Send>>;

#[async_trait::async_trait]
pub trait ModelAdapter: Send + Sync {
    fn name(&self) -> &str;

    /// Stream a completion. Implementors only need to provide this one
    /// method; `generate` drains it by default.
    async fn stream(&self, request: GenerateRequest) -> AdapterResult<ModelStream>;

    /// One-shot, non-streaming call used by the tool-call loop, which needs
    /// a complete reply (content plus any tool calls) before deciding
    /// whether to invoke a tool and loop again.
    async fn generate(&self, request: GenerateRequest) -> AdapterResult<GenerateReply> {
        let mut stream = self.stream(request).await?;
        let mut content = String::new();
        let mut tool_calls = Vec::new();
        let mut current: Option<(String, String, String)> = None; // id, name, args

        while let Some(delta) = stream.next().await {
            match delta? {
                StreamDelta::Text(t) => content.push_str(&t),
                StreamDelta::ToolCallStart { id, name } => {
                    current = Some((id, name, String::new()));
                }
                StreamDelta::ToolCallDelta { id, arguments } => {
                    if let Some((cur_id, _, args)) = current.as_mut() {
                        if *cur_id == id {
                            args.push_str(&arguments);
                        }
                    }
                }
                StreamDelta::ToolCallEnd { id } => {
                    if let Some((cur_id, name, args)) = current.take() {
                        if cur_id == id {
                            tool_calls.push(explore_core::ToolCall {
                                id: cur_id,
                                name,
                                arguments: args,
                            });
                        }
                    }
                }
                StreamDelta::Done => break,
                StreamDelta::Error(e) => return Err(AdapterError::StreamError(e)),
            }
        }

        Ok(GenerateReply {
            content,
            tool_calls,
        })
    }
}
