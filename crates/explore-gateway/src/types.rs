//! Wire shapes for the gateway's HTTP endpoints.

use explore_core::IdentificationContext;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Voice,
    Image,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRequest {
    pub message_type: MessageType,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub user_age: Option<u8>,
    #[serde(default)]
    pub max_context_rounds: Option<i64>,
    #[serde(default)]
    pub identification_context: Option<IdentificationContext>,
}

#[derive(Debug, Deserialize)]
pub struct StreamQuery {
    #[serde(default)]
    pub stream: bool,
}
