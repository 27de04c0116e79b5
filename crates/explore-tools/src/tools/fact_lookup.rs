//! simple_fact_lookup — a deterministic canned-fact table, since real
//! knowledge retrieval is out of scope; the table mirrors the object-name
//! keying convention the card generator uses for its own fallbacks.

use crate::registry::{Tool, ToolResult};
use serde_json::{json, Value};
use std::time::Duration;

const FACTS: &[(&str, &str, &str)] = &[
    ("银杏", "银杏是地球上现存最古老的树种之一，有“活化石”之称。", "植物学常识"),
    ("苹果", "苹果富含膳食纤维和维生素C，是世界上种植最广泛的水果之一。", "营养学常识"),
    ("蝴蝶", "蝴蝶要经历卵、幼虫、蛹、成虫四个阶段才能完成蜕变。", "昆虫学常识"),
    ("月亮", "月亮是地球唯一的天然卫星，它的引力引发了地球上的潮汐。", "天文学常识"),
];

pub struct FactLookupTool;

#[async_trait::async_trait]
impl Tool for FactLookupTool {
    fn name(&self) -> &str {
        "simple_fact_lookup"
    }

    fn description(&self) -> &str {
        "Looks up a short factual description for a natural object or phenomenon."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": { "query": { "type": "string" } },
            "required": ["query"]
        })
    }

    fn deadline(&self) -> Duration {
        Duration::from_secs(2)
    }

    async fn execute(&self, args: Value) -> ToolResult {
        let query = match args.get("query").and_then(Value::as_str) {
            Some(q) => q,
            None => return ToolResult::error("missing 'query' argument"),
        };

        let (fact, source) = FACTS
            .iter()
            .find(|(name, _, _)| query.contains(name))
            .map(|(_, fact, source)| (fact.to_string(), source.to_string()))
            .unwrap_or_else(|| {
                (
                    format!("关于{}，目前还没有收录详细的知识条目。", query),
                    "通用知识库".to_string(),
                )
            });

        ToolResult::Json(json!({ "query": query, "fact": fact, "source": source }))
    }
}
