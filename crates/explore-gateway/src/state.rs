//! Shared application state handed to every handler.

use dashmap::DashMap;
use explore_core::{MemoryRecord, SessionKey};
use explore_agent::SessionStore;
use explore_llm::ModelAdapter;
use explore_tools::ToolRegistry;
use std::sync::Arc;

pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub tools: Arc<ToolRegistry>,
    pub adapter: Arc<dyn ModelAdapter>,
    pub use_ai_model: bool,
    /// `MemoryRecord` has no session id of its own, so the gateway keys
    /// one per session here rather than inside the record.
    pub memories: DashMap<SessionKey, MemoryRecord>,
}

impl AppState {
    pub fn new(
        sessions: Arc<SessionStore>,
        tools: Arc<ToolRegistry>,
        adapter: Arc<dyn ModelAdapter>,
        use_ai_model: bool,
    ) -> Self {
        Self {
            sessions,
            tools,
            adapter,
            use_ai_model,
            memories: DashMap::new(),
        }
    }
}
