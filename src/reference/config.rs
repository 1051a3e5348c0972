//! Rendering configuration for the vocabulary reference

/// Default document title.
pub const DEFAULT_TITLE: &str = "Hango token vocabulary";

/// Reference rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceConfig {
    /// Top-level heading of the generated document
    pub title: String,
    /// Whether tables include the English gloss column
    pub include_glosses: bool,
    /// Whether to render the branch/call statement alias section
    pub include_aliases: bool,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            include_glosses: true,
            include_aliases: true,
        }
    }
}

impl ReferenceConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Toggle the gloss column
    pub fn with_glosses(mut self, include: bool) -> Self {
        self.include_glosses = include;
        self
    }

    /// Toggle the alias section
    pub fn with_aliases(mut self, include: bool) -> Self {
        self.include_aliases = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReferenceConfig::default();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert!(config.include_glosses);
        assert!(config.include_aliases);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ReferenceConfig::new(), ReferenceConfig::default());
    }

    #[test]
    fn test_builder_methods() {
        let config = ReferenceConfig::new().with_title("Tokens").with_glosses(false);
        assert_eq!(config.title, "Tokens");
        assert!(!config.include_glosses);
        // Other fields unchanged
        assert!(config.include_aliases);
    }
}
