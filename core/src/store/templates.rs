//! Default document contents written by the store.

pub const PRODUCT_HEADING: &str = "# Product Context";
pub const PRODUCT_PLACEHOLDER: &str = "Describe the product mission and value proposition.";

pub const TECH_STACK_HEADING: &str = "# Tech Stack";
pub const TECH_STACK_PLACEHOLDER: &str = "List the technologies, frameworks, and tools used.";

pub const WORKFLOW_HEADING: &str = "# Workflow";
pub const WORKFLOW_PLACEHOLDER: &str = "Describe development processes and standards.";

pub const TRACKS_HEADING: &str = "# Tracks Index";
pub const TRACKS_PLACEHOLDER: &str = "List of all development tracks.";

pub fn track_spec(title: &str) -> String {
    format!("# Spec: {title}\n## Goals\n## Requirements")
}

pub fn track_plan(title: &str, initial_task: &str) -> String {
    format!("# Plan: {title}\n## Tasks\n- [ ] {initial_task}")
}

pub fn index_entry(id: &str, title: &str) -> String {
    format!("\n- [ ] {id}: {title}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_has_single_pending_task() {
        assert_eq!(
            track_plan("Add login flow", "Task 1"),
            "# Plan: Add login flow\n## Tasks\n- [ ] Task 1"
        );
    }

    #[test]
    fn spec_has_empty_sections() {
        assert_eq!(
            track_spec("Search"),
            "# Spec: Search\n## Goals\n## Requirements"
        );
    }
}
