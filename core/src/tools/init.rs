use crate::store::{InitSeed, TrackStore};
use crate::tools::extract_string_arg_opt;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct InitTool {
    store: Arc<TrackStore>,
}

impl InitTool {
    pub fn new(store: Arc<TrackStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for InitTool {
    fn name(&self) -> &str {
        "conductor_init"
    }

    fn description(&self) -> &str {
        "Initialize project with Conductor context files"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "product": {
                    "type": "string",
                    "description": "Optional product mission text for product.md"
                },
                "techStack": {
                    "type": "string",
                    "description": "Optional technology list for tech-stack.md"
                },
                "workflow": {
                    "type": "string",
                    "description": "Optional process description for workflow.md"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let seed = InitSeed {
            product: extract_string_arg_opt(&args, "product"),
            tech_stack: extract_string_arg_opt(&args, "techStack"),
            workflow: extract_string_arg_opt(&args, "workflow"),
        };

        self.store.initialize(&seed)?;
        Ok(ToolResult::success("Conductor initialized successfully."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn seeds_context_files() {
        let tmp = TempDir::new().unwrap();
        let store = Arc::new(TrackStore::new(tmp.path().join("conductor")));
        let tool = InitTool::new(store.clone());

        let result = tool
            .execute(json!({"product": "A todo app for teams.", "techStack": "Rust"}))
            .await
            .unwrap();
        assert!(result.success);

        let product = std::fs::read_to_string(store.root().join("product.md")).unwrap();
        assert_eq!(product, "# Product Context\nA todo app for teams.");
        let stack = std::fs::read_to_string(store.root().join("tech-stack.md")).unwrap();
        assert_eq!(stack, "# Tech Stack\nRust");
    }

    #[tokio::test]
    async fn second_run_reports_success_without_changes() {
        let tmp = TempDir::new().unwrap();
        let store = Arc::new(TrackStore::new(tmp.path().join("conductor")));
        let tool = InitTool::new(store.clone());

        tool.execute(json!({})).await.unwrap();
        std::fs::write(store.root().join("workflow.md"), "# Workflow\nCustom").unwrap();

        let result = tool.execute(json!({"workflow": "Ignored"})).await.unwrap();
        assert_eq!(result.output, "Conductor initialized successfully.");
        let workflow = std::fs::read_to_string(store.root().join("workflow.md")).unwrap();
        assert_eq!(workflow, "# Workflow\nCustom");
    }
}
