//! Scripted adapter used in tests and whenever `use_ai_model` is false.

use crate::adapter::{AdapterResult, ModelAdapter, ModelStream};
use crate::types::{GenerateReply, GenerateRequest};
use explore_core::StreamDelta;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Replays a fixed list of replies, one per call, then repeats the last one.
pub struct MockAdapter {
    script: Mutex<Vec<GenerateReply>>,
    calls: AtomicUsize,
}

impl MockAdapter {
    pub fn new(script: Vec<GenerateReply>) -> Self {
        Self {
            script: Mutex::new(script),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn echo() -> Self {
        Self::new(vec![GenerateReply {
            content: "(mock) acknowledged".to_string(),
            tool_calls: Vec::new(),
        }])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ModelAdapter for MockAdapter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn stream(&self, request: GenerateRequest) -> AdapterResult<ModelStream> {
        let reply = self.generate(request).await?;
        let mut deltas = vec![StreamDelta::Text(reply.content)];
        for tc in reply.tool_calls {
            deltas.push(StreamDelta::ToolCallStart {
                id: tc.id.clone(),
                name: tc.name,
            });
            deltas.push(StreamDelta::ToolCallDelta {
                id: tc.id.clone(),
                arguments: tc.arguments,
            });
            deltas.push(StreamDelta::ToolCallEnd { id: tc.id });
        }
        deltas.push(StreamDelta::Done);
        Ok(Box::pin(futures::stream::iter(deltas.into_iter().map(Ok))))
    }

    async fn generate(&self, _request: GenerateRequest) -> AdapterResult<GenerateReply> {
        let idx = self.calls.fetch_add(1, Ordering::SeqCst);
        let script = self.script.lock().unwrap();
        let reply = script
            .get(idx)
            .or_else(|| script.last())
            .cloned()
            .unwrap_or_default();
        Ok(reply)
    }
}
