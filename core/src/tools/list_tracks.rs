use crate::store::TrackStore;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct ListTracksTool {
    store: Arc<TrackStore>,
}

impl ListTracksTool {
    pub fn new(store: Arc<TrackStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ListTracksTool {
    fn name(&self) -> &str {
        "conductor_list_tracks"
    }

    fn description(&self) -> &str {
        "List all tracks with their id, title, status and creation time"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let tracks = self.store.list_tracks()?;
        if tracks.is_empty() {
            return Ok(ToolResult::success("No tracks found."));
        }

        Ok(ToolResult::success(serde_json::to_string_pretty(&tracks)?))
    }
}
