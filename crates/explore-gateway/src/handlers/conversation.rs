//! `POST /v1/conversation/stream` — the conversational SSE endpoint.

use crate::collaborators::{ImageUploader, MockImageUploader, MockVoiceTranscriber, VoiceTranscriber};
use crate::markdown;
use crate::sse;
use crate::state::AppState;
use crate::types::{ConversationRequest, MessageType};
use async_stream::stream;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use explore_agent::{append_ending, memory, reflection, run_domain_agent, RandomEndingPicker, TurnContext};
use explore_core::{
    CognitiveLoadAdvice, IdentificationContext, Message, Modality, ObjectCategory, SessionKey,
    StreamDelta, SupervisorState,
};
use explore_llm::GenerateRequest;
use explore_supervisor::Supervisor;
use futures::StreamExt;
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

const MULTI_AGENT_CADENCE_MS: u64 = 30;
const SINGLE_AGENT_CADENCE_MS: u64 = 50;

fn category_label(category: ObjectCategory) -> String {
    match serde_json::to_value(category) {
        Ok(serde_json::Value::String(s)) => s,
        _ => "人文类".to_string(),
    }
}

pub async fn stream_conversation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConversationRequest>,
) -> Sse<impl futures::Stream<Item = Result<Event, Infallible>>> {
    let session_id = req
        .session_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let session_key = SessionKey::new(session_id.clone());

    let body = stream! {
        let cancel = CancellationToken::new();
        let _cancel_guard = cancel.clone().drop_guard();

        yield Ok(sse::event("connected", json!({"sessionId": session_id})));

        let session = state.sessions.touch_or_create(&session_key);

        let mut effective_age = req.user_age;
        let mut object_name = None;
        let mut object_category = None;
        if let Some(ctx) = &req.identification_context {
            effective_age = effective_age.or(ctx.age);
            object_name = Some(ctx.object_name.clone());
            object_category = Some(ctx.object_category);
            if let Ok(value) = serde_json::to_value(ctx) {
                session.set_scratch("identification_context", value).await;
            }
        } else if let Some(value) = session.get_scratch("identification_context").await {
            if let Ok(ctx) = serde_json::from_value::<IdentificationContext>(value) {
                effective_age = effective_age.or(ctx.age);
                object_name = Some(ctx.object_name);
                object_category = Some(ctx.object_category);
            }
        }
        let age = effective_age.unwrap_or(8);
        let object_name = object_name.unwrap_or_else(|| "这个东西".to_string());
        let object_category = object_category.unwrap_or(ObjectCategory::Humanities);

        let user_content = match req.message_type {
            MessageType::Text => match req.message.as_deref() {
                Some(text) if !text.trim().is_empty() => text.to_string(),
                _ => {
                    yield Ok(sse::event("error", json!({"message": "message is required for text input"})));
                    return;
                }
            },
            MessageType::Voice => match req.audio.as_deref() {
                Some(audio) if !audio.trim().is_empty() => {
                    let transcript = MockVoiceTranscriber.transcribe(audio).await;
                    yield Ok(sse::event("voice_recognized", json!({"text": transcript})));
                    transcript
                }
                _ => {
                    yield Ok(sse::event("error", json!({"message": "audio is required for voice input"})));
                    return;
                }
            },
            MessageType::Image => match req.image.as_deref() {
                Some(image) if !image.trim().is_empty() => {
                    let url = MockImageUploader.upload(image).await;
                    yield Ok(sse::event("image_uploaded", json!({"url": url})));
                    match req.message.as_deref() {
                        Some(text) if !text.trim().is_empty() => format!("{text} {url}"),
                        _ => url,
                    }
                }
                _ => {
                    yield Ok(sse::event("error", json!({"message": "image is required for image input"})));
                    return;
                }
            },
        };

        let modality = match req.message_type {
            MessageType::Text => Modality::Text,
            MessageType::Voice => Modality::Voice,
            MessageType::Image => Modality::Image,
        };
        session.append(Message::user(user_content.clone(), modality)).await;

        let history = session.recent(req.max_context_rounds.unwrap_or(20)).await;

        let multi_agent_result = run_multi_agent(
            &state,
            &session,
            &history,
            &user_content,
            age,
            &object_name,
            object_category,
            &cancel,
        )
        .await;

        let message_id = Uuid::new_v4().to_string();
        let (content, cadence_ms) = match multi_agent_result {
            Ok(content) => (content, MULTI_AGENT_CADENCE_MS),
            Err(e) => {
                tracing::warn!(error = %e, "multi-agent pipeline failed, degrading to single-agent path");
                match single_agent_fallback(&state, &history, &user_content).await {
                    Ok(content) => (content, SINGLE_AGENT_CADENCE_MS),
                    Err(e) => {
                        yield Ok(sse::event("error", json!({"message": e.to_string()})));
                        return;
                    }
                }
            }
        };

        let mut index = 0i64;
        for ch in content.chars() {
            tokio::time::sleep(Duration::from_millis(cadence_ms)).await;
            yield Ok(sse::event(
                "message",
                json!({
                    "type": "message",
                    "content": ch.to_string(),
                    "index": index,
                    "sessionId": session_id,
                    "messageId": message_id,
                }),
            ));
            index += 1;
        }

        let is_markdown = markdown::looks_like_markdown(&content);
        session
            .append(Message::assistant(content, is_markdown))
            .await;

        yield Ok(sse::event("done", json!({"sessionId": session_id, "messageId": message_id})));
    };

    Sse::new(body).keep_alive(KeepAlive::default())
}

#[allow(clippy::too_many_arguments)]
async fn run_multi_agent(
    state: &AppState,
    session: &explore_agent::Session,
    history: &[Message],
    message: &str,
    age: u8,
    object_name: &str,
    object_category: ObjectCategory,
    cancel: &CancellationToken,
) -> explore_core::Result<String> {
    let recent_output_len = history
        .iter()
        .rev()
        .find(|m| matches!(m.role, explore_core::Role::Assistant))
        .map(|m| m.content.chars().count())
        .unwrap_or(0);

    let mut supervisor_state = SupervisorState {
        object_name: object_name.to_string(),
        object_category: category_label(object_category),
        user_age: age,
        conversation_rounds: (history.len() / 2) as u32,
        recent_output_len,
        ..Default::default()
    };

    let supervisor = Supervisor::new(Some(state.adapter.as_ref()), state.use_ai_model);
    let decision = supervisor.run(&mut supervisor_state, message).await;

    let max_sentences = supervisor_state
        .agent_results
        .get("cognitiveLoad")
        .cloned()
        .and_then(|v| serde_json::from_value::<CognitiveLoadAdvice>(v).ok())
        .map(|advice| advice.max_sentences)
        .unwrap_or(5);

    let turn_ctx = TurnContext {
        history,
        recommended_tools: &decision.tools,
        use_ai_model: state.use_ai_model,
        age,
    };

    let domain_turn = run_domain_agent(
        decision.domain_agent,
        state.adapter.as_ref(),
        &state.tools,
        turn_ctx,
        max_sentences,
        cancel,
    )
    .await?;

    let optimization = append_ending(
        state.adapter.as_ref(),
        &domain_turn.content,
        &RandomEndingPicker,
    )
    .await;

    let signal = reflection::detect(message);
    let mut record = state
        .memories
        .get(&session.key)
        .map(|entry| entry.clone())
        .unwrap_or_default();
    memory::apply(&mut record, object_name, signal);
    state.memories.insert(session.key.clone(), record);

    Ok(optimization.optimized_content)
}

/// Single-agent degradation path: a direct model call with no tool loop
/// and no supervisor routing, used whenever the multi-agent pipeline fails.
async fn single_agent_fallback(
    state: &AppState,
    history: &[Message],
    message: &str,
) -> explore_core::Result<String> {
    let mut messages = history.to_vec();
    messages.push(Message::user(message.to_string(), Modality::Text));
    let request = GenerateRequest::new(messages)
        .with_system("你是一位友善的助教，请用简短的中文口语回答孩子的问题。");

    if state.use_ai_model {
        let mut deltas = state
            .adapter
            .stream(request)
            .await
            .map_err(|e| explore_core::Error::upstream_model(state.adapter.name(), e.to_string()))?;
        let mut content = String::new();
        while let Some(delta) = deltas.next().await {
            match delta.map_err(|e| explore_core::Error::upstream_model(state.adapter.name(), e.to_string()))? {
                StreamDelta::Text(t) => content.push_str(&t),
                StreamDelta::Done => break,
                StreamDelta::Error(e) => {
                    return Err(explore_core::Error::upstream_model(state.adapter.name(), e))
                }
                _ => {}
            }
        }
        Ok(content)
    } else {
        let reply = state
            .adapter
            .generate(request)
            .await
            .map_err(|e| explore_core::Error::upstream_model(state.adapter.name(), e.to_string()))?;
        Ok(reply.content)
    }
}
