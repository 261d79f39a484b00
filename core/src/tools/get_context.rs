use crate::store::TrackStore;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct GetContextTool {
    store: Arc<TrackStore>,
}

impl GetContextTool {
    pub fn new(store: Arc<TrackStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetContextTool {
    fn name(&self) -> &str {
        "conductor_get_context"
    }

    fn description(&self) -> &str {
        "Read all Conductor context files"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: serde_json::Value) -> anyhow::Result<ToolResult> {
        Ok(ToolResult::success(self.store.get_context()?))
    }
}
