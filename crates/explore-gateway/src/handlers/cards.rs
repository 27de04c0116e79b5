//! `POST /v1/cards` — the three-card generator endpoint, plain JSON by
//! default or an SSE stream when `?stream=true`.

use crate::sse;
use crate::state::AppState;
use crate::types::StreamQuery;
use async_stream::stream;
use axum::extract::{Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use explore_cards::{generate, generate_stream, CardRequest, CardsResponse};
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;

pub enum CardsReply {
    Json(Json<CardsResponse>),
    Stream(Sse<std::pin::Pin<Box<dyn futures::Stream<Item = Result<Event, Infallible>> + Send>>>),
}

impl axum::response::IntoResponse for CardsReply {
    fn into_response(self) -> axum::response::Response {
        match self {
            CardsReply::Json(j) => j.into_response(),
            CardsReply::Stream(s) => s.into_response(),
        }
    }
}

pub async fn generate_cards(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StreamQuery>,
    Json(req): Json<CardRequest>,
) -> Result<CardsReply, (axum::http::StatusCode, String)> {
    if query.stream {
        let body = stream! {
            let mut events = generate_stream(state.adapter.as_ref(), &req, state.use_ai_model);
            use futures::StreamExt;
            while let Some(event) = events.next().await {
                let payload = json!({
                    "type": "card",
                    "content": event.card,
                    "index": event.index,
                });
                yield Ok(sse::event("card", payload));
            }
            yield Ok(sse::event("done", json!({})));
        };
        let boxed: std::pin::Pin<Box<dyn futures::Stream<Item = Result<Event, Infallible>> + Send>> =
            Box::pin(body);
        Ok(CardsReply::Stream(Sse::new(boxed).keep_alive(KeepAlive::default())))
    } else {
        let resp = generate(state.adapter.as_ref(), &req, state.use_ai_model)
            .await
            .map_err(|e| (axum::http::StatusCode::BAD_REQUEST, e.to_string()))?;
        Ok(CardsReply::Json(Json(resp)))
    }
}
