//! Request/response shapes for the model adapter seam.

use explore_core::{Message, ToolDefinition};
use serde::{Deserialize, Serialize};

/// What a domain agent or supervisor sub-agent asks a model to do.
#[derive(Clone, Debug, Default)]
pub struct GenerateRequest {
    pub messages: Vec<Message>,
    pub tools: Vec<ToolDefinition>,
    pub system: Option<String>,
}

impl GenerateRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            tools: Vec::new(),
            system: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }
}

/// The result of one non-streaming `generate` call: either prose, or a
/// batch of tool calls the caller must resolve before calling again.
#[derive(Clone, Debug, Default)]
pub struct GenerateReply {
    pub content: String,
    pub tool_calls: Vec<explore_core::ToolCall>,
}

/// Streaming delta re-exported from explore-core for convenience.
pub use explore_core::StreamDelta;

/// Token usage, reported by providers that track it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}
