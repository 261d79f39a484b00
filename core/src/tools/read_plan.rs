use crate::store::TrackStore;
use crate::tools::extract_string_arg;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct ReadPlanTool {
    store: Arc<TrackStore>,
}

impl ReadPlanTool {
    pub fn new(store: Arc<TrackStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ReadPlanTool {
    fn name(&self) -> &str {
        "conductor_read_plan"
    }

    fn description(&self) -> &str {
        "Read the plan for a specific track"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Track ID"
                }
            },
            "required": ["id"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let id = extract_string_arg(&args, "id")?;
        Ok(ToolResult::success(self.store.read_plan(&id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn returns_raw_plan() {
        let tmp = TempDir::new().unwrap();
        let store = Arc::new(TrackStore::new(tmp.path().join("conductor")));
        store.create_track("feat-login", "Add login flow").unwrap();
        let plan_path = store.track_dir("feat-login").join("plan.md");
        std::fs::write(&plan_path, "# Plan\n\n- [ ] A\n- [x] B\n").unwrap();

        let result = ReadPlanTool::new(store)
            .execute(json!({"id": "feat-login"}))
            .await
            .unwrap();
        assert_eq!(result.output, "# Plan\n\n- [ ] A\n- [x] B\n");
    }

    #[tokio::test]
    async fn missing_plan_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let tool = ReadPlanTool::new(Arc::new(TrackStore::new(tmp.path())));
        let err = tool.execute(json!({"id": "nope"})).await.unwrap_err();
        assert_eq!(err.to_string(), "Plan for track nope not found.");
    }
}
