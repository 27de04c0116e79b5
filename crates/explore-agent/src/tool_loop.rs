//! The bounded tool-call loop every domain agent runs its turn through.
//!
//! Ported from the reference system's `ExecuteToolChain`: call the model,
//! inspect any tool calls it asked for, resolve the ones this agent is
//! allowed to use, and feed the results back — up to `max_depth` rounds,
//! followed by exactly one integration call with tool execution disabled.

use explore_core::{Error, Message, Modality, Result, Role, ToolDefinition};
use explore_llm::{GenerateRequest, ModelAdapter};
use explore_tools::ToolRegistry;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::warn;

pub struct ToolLoopConfig {
    pub max_depth: usize,
    pub deadline: Duration,
}

impl Default for ToolLoopConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            deadline: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Default)]
pub struct ToolLoopOutcome {
    pub content: String,
    pub tools_used: Vec<String>,
    pub tool_results: HashMap<String, serde_json::Value>,
    pub generate_calls: usize,
}

/// Run the bounded tool-call loop. `allowed` is the agent's static
/// allow-list; `recommended` is what the planner additionally suggested for
/// this turn — only their union is ever bound to the model.
pub async fn run(
    adapter: &dyn ModelAdapter,
    tools: &ToolRegistry,
    system: &str,
    history: &[Message],
    allowed: &[&str],
    recommended: &[String],
    config: &ToolLoopConfig,
    cancel: &CancellationToken,
) -> Result<ToolLoopOutcome> {
    let deadline = Instant::now() + config.deadline;
    let mut bindable: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
    for name in recommended {
        if !bindable.contains(name) {
            bindable.push(name.clone());
        }
    }
    let definitions: Vec<ToolDefinition> = tools.definitions_for(&bindable);

    let mut messages: Vec<Message> = history.to_vec();
    let mut outcome = ToolLoopOutcome::default();

    for depth in 0..config.max_depth {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let request = GenerateRequest::new(messages.clone())
            .with_system(system)
            .with_tools(definitions.clone());

        let reply = match call_with_deadline(adapter, request, remaining, cancel).await {
            Ok(r) => r,
            Err(e) => return Err(timeout_error(&format!("generate@{depth}"), &outcome, e)),
        };
        outcome.generate_calls += 1;

        if reply.tool_calls.is_empty() {
            outcome.content = reply.content;
            return Ok(outcome);
        }

        messages.push(Message {
            id: uuid::Uuid::new_v4(),
            role: Role::Assistant,
            modality: Modality::Text,
            content: reply.content.clone(),
            created_at: chrono::Utc::now(),
            markdown: None,
        });

        for call in &reply.tool_calls {
            if !bindable.iter().any(|n| n == &call.name) {
                warn!(tool = %call.name, "model requested a tool outside its allow list, skipping");
                continue;
            }
            let args: serde_json::Value = match serde_json::from_str(&call.arguments) {
                Ok(v) => v,
                Err(e) => {
                    warn!(tool = %call.name, error = %e, "failed to decode tool arguments, skipping");
                    continue;
                }
            };

            let tool_deadline = tools
                .get(&call.name)
                .map(|t| t.deadline())
                .unwrap_or(Duration::from_secs(2))
                .min(deadline.saturating_duration_since(Instant::now()));

            let result = tokio::select! {
                r = tokio::time::timeout(tool_deadline, tools.execute(&call.name, args)) => {
                    match r {
                        Ok(result) => result,
                        Err(_) => explore_tools::ToolResult::error(format!("{} timed out", call.name)),
                    }
                }
                _ = cancel.cancelled() => return Err(Error::Cancelled),
            };

            if let explore_tools::ToolResult::Json(v) = &result {
                outcome.tools_used.push(call.name.clone());
                outcome.tool_results.insert(call.name.clone(), v.clone());
            }

            messages.push(Message {
                id: uuid::Uuid::new_v4(),
                role: Role::User,
                modality: Modality::Text,
                content: format!("[{}] {}", call.name, result.to_content_string()),
                created_at: chrono::Utc::now(),
                markdown: None,
            });
        }
    }

    // Depth cap reached: one final integration call with no further tools.
    let remaining = deadline.saturating_duration_since(Instant::now());
    let request = GenerateRequest::new(messages).with_system(system);
    let reply = match call_with_deadline(adapter, request, remaining, cancel).await {
        Ok(r) => r,
        Err(e) => return Err(timeout_error("generate@final", &outcome, e)),
    };
    outcome.generate_calls += 1;
    outcome.content = reply.content;
    Ok(outcome)
}

async fn call_with_deadline(
    adapter: &dyn ModelAdapter,
    request: GenerateRequest,
    remaining: Duration,
    cancel: &CancellationToken,
) -> std::result::Result<explore_llm::GenerateReply, ()> {
    tokio::select! {
        res = tokio::time::timeout(remaining, adapter.generate(request)) => {
            match res {
                Ok(Ok(reply)) => Ok(reply),
                _ => Err(()),
            }
        }
        _ = cancel.cancelled() => Err(()),
    }
}

fn timeout_error(step: &str, outcome: &ToolLoopOutcome, _e: ()) -> Error {
    Error::ToolLoopTimeout {
        step: step.to_string(),
        tools_used: outcome.tools_used.clone(),
        tool_results: outcome.tool_results.clone(),
    }
}
