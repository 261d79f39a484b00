use serde_json::Value;
use std::sync::Arc;

use crate::store::TrackStore;

pub mod create_track;
pub mod get_context;
pub mod init;
pub mod list_tracks;
pub mod read_plan;
pub mod registry;
pub mod update_task;

pub use create_track::CreateTrackTool;
pub use get_context::GetContextTool;
pub use init::InitTool;
pub use list_tracks::ListTracksTool;
pub use read_plan::ReadPlanTool;
pub use registry::ToolRegistry;
pub use update_task::UpdateTaskTool;

/// Registers every conductor tool against one shared store.
pub fn register_conductor_tools(registry: &ToolRegistry, store: Arc<TrackStore>) {
    registry.register(Arc::new(InitTool::new(store.clone())));
    registry.register(Arc::new(CreateTrackTool::new(store.clone())));
    registry.register(Arc::new(GetContextTool::new(store.clone())));
    registry.register(Arc::new(ReadPlanTool::new(store.clone())));
    registry.register(Arc::new(UpdateTaskTool::new(store.clone())));
    registry.register(Arc::new(ListTracksTool::new(store)));
}

pub fn extract_string_arg(args: &Value, key: &str) -> anyhow::Result<String> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing '{}' parameter", key))
        .map(|s| s.to_string())
}

pub fn extract_string_arg_opt(args: &Value, key: &str) -> Option<String> {
    args.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}
