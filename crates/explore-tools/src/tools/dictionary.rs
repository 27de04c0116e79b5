//! simple_dictionary — canned English word lookups for the Language agent.

use crate::registry::{Tool, ToolResult};
use serde_json::{json, Value};
use std::time::Duration;

struct Entry {
    word: &'static str,
    pronunciation: &'static str,
    meaning: &'static str,
    example: &'static str,
    example_cn: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        word: "butterfly",
        pronunciation: "/ˈbʌtərflaɪ/",
        meaning: "蝴蝶",
        example: "A butterfly landed on the flower.",
        example_cn: "一只蝴蝶停在了花朵上。",
    },
    Entry {
        word: "apple",
        pronunciation: "/ˈæpəl/",
        meaning: "苹果",
        example: "She ate a red apple.",
        example_cn: "她吃了一个红苹果。",
    },
    Entry {
        word: "moon",
        pronunciation: "/muːn/",
        meaning: "月亮",
        example: "The moon is bright tonight.",
        example_cn: "今晚的月亮很亮。",
    },
];

pub struct DictionaryTool;

#[async_trait::async_trait]
impl Tool for DictionaryTool {
    fn name(&self) -> &str {
        "simple_dictionary"
    }

    fn description(&self) -> &str {
        "Looks up the pronunciation, meaning, and an example sentence for an English word."
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

        let entry = ENTRIES
            .iter()
            .find(|e| e.word.eq_ignore_ascii_case(word));

        match entry {
            Some(e) => ToolResult::Json(json!({
                "word": e.word,
                "pronunciation": e.pronunciation,
                "meaning": e.meaning,
                "example": e.example,
                "example_cn": e.example_cn,
            })),
            None => ToolResult::Json(json!({
                "word": word,
                "pronunciation": "",
                "meaning": format!("{}的释义暂未收录", word),
                "example": "",
                "example_cn": "",
            })),
        }
    }
}
