use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome handed back to the host runtime. Expected failures are reported
/// here rather than as `Err` so the host can show them to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolResult {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(error.into()),
        }
    }

    /// The output on success, the error message otherwise.
    pub fn text(&self) -> &str {
        match &self.error {
            Some(error) if !self.success => error,
            _ => &self.output,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    #[serde(rename = "parameters")]
    pub parameters_schema: serde_json::Value,
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn parameters_schema(&self) -> serde_json::Value;

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult>;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters_schema: self.parameters_schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_prefers_error_on_failure() {
        assert_eq!(ToolResult::success("ok").text(), "ok");
        assert_eq!(ToolResult::error("boom").text(), "boom");
    }

    #[test]
    fn success_omits_error_field() {
        let json = serde_json::to_value(ToolResult::success("done")).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "output": "done"}));
    }
}
