//! pronunciation_hint — a lightweight companion to simple_dictionary.

use crate::registry::{Tool, ToolResult};
use serde_json::{json, Value};
use std::time::Duration;

const HINTS: &[(&str, &str, &str)] = &[
    ("butterfly", "BUH-ter-fly", "重音在第一个音节"),
    ("apple", "AP-uhl", "重音在第一个音节，结尾的 e 不发音"),
    ("moon", "moon", "双元音 oo 发长音"),
];

pub struct PronunciationTool;

#[async_trait::async_trait]
impl Tool for PronunciationTool {
    fn name(&self) -> &str {
        "pronunciation_hint"
    }

    fn description(&self) -> &str {
        "Gives a simplified phonetic spelling and a pronunciation tip for an English word."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": { "word": { "type": "string" } },
            "required": ["word"]
        })
    }

    fn deadline(&self) -> Duration {
        Duration::from_secs(2)
    }

    async fn execute(&self, args: Value) -> ToolResult {
        let word = match args.get("word").and_then(Value::as_str) {
            Some(w) => w,
            None => return ToolResult::error("missing 'word' argument"),
        };

        let (phonetic, tip) = HINTS
            .iter()
            .find(|(w, _, _)| w.eq_ignore_ascii_case(word))
            .map(|(_, phonetic, tip)| (phonetic.to_string(), tip.to_string()))
            .unwrap_or_else(|| (word.to_string(), "跟读时放慢速度，逐个音节练习".to_string()));

        ToolResult::Json(json!({ "word": word, "phonetic": phonetic, "hint": tip, "tip": tip }))
    }
}
