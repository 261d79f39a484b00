use super::templates::*;

/// The four fixed documents at the workspace root, in context order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextFile {
    Product,
    TechStack,
    Workflow,
    Tracks,
}

impl ContextFile {
    pub const ALL: [ContextFile; 4] = [
        ContextFile::Product,
        ContextFile::TechStack,
        ContextFile::Workflow,
        ContextFile::Tracks,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Product => "product.md",
            Self::TechStack => "tech-stack.md",
            Self::Workflow => "workflow.md",
            Self::Tracks => "tracks.md",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Self::Product => PRODUCT_HEADING,
            Self::TechStack => TECH_STACK_HEADING,
            Self::Workflow => WORKFLOW_HEADING,
            Self::Tracks => TRACKS_HEADING,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Product => PRODUCT_PLACEHOLDER,
            Self::TechStack => TECH_STACK_PLACEHOLDER,
            Self::Workflow => WORKFLOW_PLACEHOLDER,
            Self::Tracks => TRACKS_PLACEHOLDER,
        }
    }

    /// Content written when the file is absent. Seed text replaces the
    /// placeholder line; the tracks index takes no seed.
    pub fn default_content(self, seed: Option<&str>) -> String {
        let body = match (self, seed) {
            (Self::Tracks, _) | (_, None) => self.placeholder(),
            (_, Some(seed)) => seed,
        };
        format!("{}\n{}", self.heading(), body)
    }
}

impl std::fmt::Display for ContextFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Optional seed text for the three seedable context files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitSeed {
    pub product: Option<String>,
    pub tech_stack: Option<String>,
    pub workflow: Option<String>,
}

impl InitSeed {
    pub fn for_file(&self, file: ContextFile) -> Option<&str> {
        let seed = match file {
            ContextFile::Product => &self.product,
            ContextFile::TechStack => &self.tech_stack,
            ContextFile::Workflow => &self.workflow,
            ContextFile::Tracks => return None,
        };
        seed.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_without_seed() {
        assert_eq!(
            ContextFile::Product.default_content(None),
            "# Product Context\nDescribe the product mission and value proposition."
        );
    }

    #[test]
    fn seed_replaces_placeholder() {
        assert_eq!(
            ContextFile::Workflow.default_content(Some("Trunk-based, TDD.")),
            "# Workflow\nTrunk-based, TDD."
        );
    }

    #[test]
    fn tracks_index_ignores_seed() {
        let seed = InitSeed {
            product: Some("A".into()),
            tech_stack: Some("B".into()),
            workflow: Some("C".into()),
        };
        assert_eq!(seed.for_file(ContextFile::Tracks), None);
        assert_eq!(seed.for_file(ContextFile::TechStack), Some("B"));
    }

    #[test]
    fn blank_seed_is_ignored() {
        let seed = InitSeed {
            product: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(seed.for_file(ContextFile::Product), None);
    }
}
