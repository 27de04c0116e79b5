//! Small helper around axum's SSE event builder so handlers don't repeat
//! the `event().json_data()` boilerplate for every emission.

use axum::response::sse::Event;
use serde_json::Value;

pub fn event(name: &str, payload: Value) -> Event {
    Event::default().event(name).data(payload.to_string())
}
