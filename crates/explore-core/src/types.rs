//! Core data model: sessions, messages, and the supervisor's intermediate results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Session identifier - cheaply cloneable.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct SessionKey(Arc<str>);

impl SessionKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(Arc::from(s.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SessionKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Voice,
    Image,
}

/// One turn of conversation, persisted in a session's bounded log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub modality: Modality,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<bool>,
}

impl Message {
    pub fn user(content: impl Into<String>, modality: Modality) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            modality,
            content: content.into(),
            created_at: Utc::now(),
            markdown: None,
        }
    }

    pub fn assistant(content: impl Into<String>, markdown: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            modality: Modality::Text,
            content: content.into(),
            created_at: Utc::now(),
            markdown: Some(markdown),
        }
    }
}

/// A tool call emitted by a model during the tool-call loop.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Streaming delta from a model adapter.
#[derive(Clone, Debug)]
pub enum StreamDelta {
    Text(String),
    ToolCallStart { id: String, name: String },
    ToolCallDelta { id: String, arguments: String },
    ToolCallEnd { id: String },
    Done,
    Error(String),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
    #[serde(rename = "自然类")]
    Natural,
    #[serde(rename = "生活类")]
    Life,
    #[serde(rename = "人文类")]
    Humanities,
}

/// What the client believes it is looking at, resolved once per turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentificationContext {
    pub object_name: String,
    pub object_category: ObjectCategory,
    pub confidence: f32,
    pub age: Option<u8>,
}

/// Transient per-turn scratch state handed through the supervisor pipeline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SupervisorState {
    pub object_name: String,
    pub object_category: String,
    pub user_age: u8,
    pub conversation_rounds: u32,
    pub recent_output_len: usize,
    pub agent_results: HashMap<String, serde_json::Value>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Intent {
    #[serde(rename = "认知型")]
    Cognitive,
    #[serde(rename = "探因型")]
    Causal,
    #[serde(rename = "表达型")]
    Expressive,
    #[serde(rename = "游戏型")]
    Playful,
    #[serde(rename = "情绪型")]
    Emotional,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntentResult {
    pub intent: Intent,
    pub confidence: f32,
    pub reason: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Strategy {
    #[serde(rename = "简短讲解")]
    Brief,
    #[serde(rename = "类比讲解")]
    Analogy,
    #[serde(rename = "深入讲解")]
    Deep,
    #[serde(rename = "反问引导")]
    Socratic,
    #[serde(rename = "暂停探索")]
    Pause,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CognitiveLoadAdvice {
    pub strategy: Strategy,
    pub reason: String,
    pub max_sentences: u8,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DomainAgent {
    Science,
    Language,
    Humanities,
}

impl std::fmt::Display for DomainAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainAgent::Science => write!(f, "Science"),
            DomainAgent::Language => write!(f, "Language"),
            DomainAgent::Humanities => write!(f, "Humanities"),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    #[serde(rename = "讲一点")]
    TellSomething,
    #[serde(rename = "问一个问题")]
    AskQuestion,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToolStrategy {
    Direct,
    Enhance,
    None,
    Multiple,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerDecision {
    #[serde(rename = "continue")]
    pub continue_: bool,
    pub domain_agent: DomainAgent,
    pub action: Action,
    pub tools: Vec<String>,
    pub tool_strategy: ToolStrategy,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DomainResponse {
    pub domain: DomainAgent,
    pub content: String,
    pub tools_used: Vec<String>,
    pub tool_results: HashMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub interested_topics: Vec<String>,
    pub understood_points: Vec<String>,
    pub not_understood_points: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
