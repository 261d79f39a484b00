use crate::store::TrackStore;
use crate::tools::extract_string_arg;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct CreateTrackTool {
    store: Arc<TrackStore>,
}

impl CreateTrackTool {
    pub fn new(store: Arc<TrackStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for CreateTrackTool {
    fn name(&self) -> &str {
        "conductor_create_track"
    }

    fn description(&self) -> &str {
        "Create a new development track"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Unique ID for the track (e.g., feat-login)"
                },
                "title": {
                    "type": "string",
                    "description": "Title of the track"
                }
            },
            "required": ["id", "title"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let id = extract_string_arg(&args, "id")?;
        let title = extract_string_arg(&args, "title")?;

        let path = self.store.create_track(&id, &title)?;
        Ok(ToolResult::success(format!(
            "Track {} created at {}",
            id,
            path.display()
        )))
    }
}
