//! Configuration for office composition.

use serde::{Deserialize, Serialize};

use crate::types::Result;

/// Configuration for an [`OfficeAssembler`](crate::OfficeAssembler).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeConfig {
    /// Plain-text renderer settings
    pub renderer: RendererConfig,
}

impl OfficeConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Plain-text renderer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Text placed between rendered sections
    pub section_separator: String,
    /// Print scripture citations after sentences, canticles and lessons
    pub show_citations: bool,
    /// Use the abbreviated first lesson when one is appointed
    pub prefer_abbreviated_lessons: bool,
    /// Render headings in upper case
    pub uppercase_headings: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            section_separator: "\n\n".to_string(),
            show_citations: true,
            prefer_abbreviated_lessons: false,
            uppercase_headings: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OfficeError;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "renderer:\n  prefer_abbreviated_lessons: true\n";
        let config = OfficeConfig::from_yaml(yaml).unwrap();
        assert!(config.renderer.prefer_abbreviated_lessons);
        assert!(config.renderer.show_citations);
        assert_eq!(config.renderer.section_separator, "\n\n");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = OfficeConfig::default();
        config.renderer.uppercase_headings = true;
        config.renderer.section_separator = "\n---\n".to_string();

        let yaml = config.to_yaml().unwrap();
        assert_eq!(OfficeConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = OfficeConfig::from_yaml("renderer: [1, 2]").unwrap_err();
        assert!(matches!(err, OfficeError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
