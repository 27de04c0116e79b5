//! Streaming card generation: each card is emitted as soon as it's ready,
//! tagged with its original index, instead of waiting for all three.

use crate::generator::build_card_public;
use crate::types::{Card, CardRequest, CardType};
use explore_llm::ModelAdapter;
use futures::stream::FuturesUnordered;
use futures::StreamExt;

/// One card's worth of streamed output: its original position in the
/// fixed `[science, poetry, english]` ordering and the finished card.
pub struct CardEvent {
    pub index: usize,
    pub card: Card,
}

/// Returns the three card futures as a stream, yielding each `CardEvent`
/// in completion order rather than index order — callers that need the
/// fixed order should use `generator::generate` instead.
pub fn generate_stream<'a>(
    adapter: &'a dyn ModelAdapter,
    req: &'a CardRequest,
    use_ai_model: bool,
) -> FuturesUnordered<impl std::future::Future<Output = CardEvent> + 'a> {
    let kinds = [CardType::Science, CardType::Poetry, CardType::English];
    let futures = FuturesUnordered::new();
    for (index, card_type) in kinds.into_iter().enumerate() {
        futures.push(async move {
            let card = build_card_public(adapter, card_type, req, use_ai_model).await;
            CardEvent { index, card }
        });
    }
    futures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardRequest;
    use explore_llm::MockAdapter;
    use std::collections::HashSet;

    #[tokio::test]
    async fn yields_all_three_indices_exactly_once() {
        let adapter = MockAdapter::echo();
        let req = CardRequest {
            object_name: "月亮".to_string(),
            object_category: "自然类".to_string(),
            age: 9,
            keywords: vec![],
        };
        let mut stream = generate_stream(&adapter, &req, false);
        let mut seen = HashSet::new();
        while let Some(event) = stream.next().await {
            seen.insert(event.index);
        }
        assert_eq!(seen, HashSet::from([0, 1, 2]));
    }
}
