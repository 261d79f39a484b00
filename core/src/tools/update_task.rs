use crate::store::{TaskUpdate, TrackStore};
use crate::tools::extract_string_arg;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct UpdateTaskTool {
    store: Arc<TrackStore>,
}

impl UpdateTaskTool {
    pub fn new(store: Arc<TrackStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for UpdateTaskTool {
    fn name(&self) -> &str {
        "conductor_update_task"
    }

    fn description(&self) -> &str {
        "Mark a task as completed in a track's plan"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Track ID"
                },
                "taskName": {
                    "type": "string",
                    "description": "The exact text of the task to mark as complete"
                }
            },
            "required": ["id", "taskName"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let id = extract_string_arg(&args, "id")?;
        let task = extract_string_arg(&args, "taskName")?;

        let message = match self.store.update_task(&id, &task)? {
            TaskUpdate::Completed { .. } => {
                format!("Task \"{}\" marked as completed in track {}.", task, id)
            }
            TaskUpdate::Unchanged => format!("Task \"{}\" not found or already completed.", task),
        };

        Ok(ToolResult::success(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn unknown_task_leaves_plan_alone() {
        let tmp = TempDir::new().unwrap();
        let store = Arc::new(TrackStore::new(tmp.path().join("conductor")));
        store.create_track("t", "T").unwrap();
        let before = store.read_plan("t").unwrap();

        let result = UpdateTaskTool::new(store.clone())
            .execute(json!({"id": "t", "taskName": "Task 2"}))
            .await
            .unwrap();
        assert_eq!(result.output, "Task \"Task 2\" not found or already completed.");
        assert_eq!(store.read_plan("t").unwrap(), before);
    }

    #[tokio::test]
    async fn task_names_with_metacharacters() {
        let tmp = TempDir::new().unwrap();
        let store = Arc::new(TrackStore::new(tmp.path().join("conductor")));
        store.create_track("t", "T").unwrap();
        let plan_path = store.track_dir("t").join("plan.md");
        std::fs::write(&plan_path, "## Tasks\n- [ ] Support *.md (and .txt)\n").unwrap();

        let result = UpdateTaskTool::new(store.clone())
            .execute(json!({"id": "t", "taskName": "Support *.md (and .txt)"}))
            .await
            .unwrap();
        assert!(result.output.contains("marked as completed"));
        assert_eq!(
            store.read_plan("t").unwrap(),
            "## Tasks\n- [x] Support *.md (and .txt)\n"
        );
    }
}
