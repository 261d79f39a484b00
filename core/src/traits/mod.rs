pub mod tool;

pub use tool::{Tool, ToolResult, ToolSpec};
