//! get_current_time — the only tool every intent's tool list starts with.

use crate::registry::{Tool, ToolResult};
use chrono::{Datelike, Timelike, Utc};
use serde_json::{json, Value};
use std::time::Duration;

/// Seam for freezing time in tests instead of calling `Utc::now()` directly.
pub trait Clock: Send + Sync {
    fn now(&self) -> chrono::DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> chrono::DateTime<Utc> {
        Utc::now()
    }
}

pub struct ClockTool {
    clock: Box<dyn Clock>,
}

impl ClockTool {
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }
}

impl Default for ClockTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Tool for ClockTool {
    fn name(&self) -> &str {
        "get_current_time"
    }

    fn description(&self) -> &str {
        "Returns the current date and time."
    }

    fn input_schema(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    fn deadline(&self) -> Duration {
        Duration::from_secs(1)
    }

    async fn execute(&self, _args: Value) -> ToolResult {
        let now = self.clock.now();
        ToolResult::Json(json!({
            "datetime": now.to_rfc3339(),
            "date": now.format("%Y-%m-%d").to_string(),
            "time": now.format("%H:%M:%S").to_string(),
            "weekday": now.weekday().to_string(),
            "year": now.year(),
            "month": now.month(),
            "day": now.day(),
            "hour": now.hour(),
            "minute": now.minute(),
            "second": now.second(),
            "timestamp": now.timestamp(),
        }))
    }
}
