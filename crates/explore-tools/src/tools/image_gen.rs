//! image_generate_simple — placeholder image generation; real image
//! synthesis is out of scope, so this returns a deterministic placeholder
//! URL the client can treat as "not yet available".

use crate::registry::{Tool, ToolResult};
use serde_json::{json, Value};
use std::time::Duration;

pub struct ImageGenTool;

#[async_trait::async_trait]
impl Tool for ImageGenTool {
    fn name(&self) -> &str {
        "image_generate_simple"
    }

    fn description(&self) -> &str {
        "Requests a simple illustrative image for a description."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": { "description": { "type": "string" } },
            "required": ["description"]
        })
    }

    fn deadline(&self) -> Duration {
        Duration::from_secs(5)
    }

    async fn execute(&self, args: Value) -> ToolResult {
        let description = match args.get("description").and_then(Value::as_str) {
            Some(d) => d,
            None => return ToolResult::error("missing 'description' argument"),
        };

        ToolResult::Json(json!({
            "description": description,
            "image_url": "https://images.invalid/placeholder.png",
            "status": "unavailable",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_placeholder_status() {
        let tool = ImageGenTool;
        let result = tool.execute(json!({"description": "a cat"})).await;
        match result {
            ToolResult::Json(v) => assert_eq!(v["status"], "unavailable"),
            _ => panic!("expected json"),
        }
    }
}
