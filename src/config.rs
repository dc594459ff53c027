use crate::common::error::{NormalizerError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Column mapping and provenance label for the source table.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub date_column: String,
    pub location_column: String,
    pub product_column: String,
    pub price_column: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        // Statistics Canada table headers
        Self {
            date_column: "REF_DATE".to_string(),
            location_column: "GEO".to_string(),
            product_column: "Products".to_string(),
            price_column: "VALUE".to_string(),
            label: "Statistics Canada".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            NormalizerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Loads the given config file, or falls back to defaults when none is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_columns() {
        let config = Config::default();
        assert_eq!(config.source.date_column, "REF_DATE");
        assert_eq!(config.source.location_column, "GEO");
        assert_eq!(config.source.product_column, "Products");
        assert_eq!(config.source.price_column, "VALUE");
        assert_eq!(config.source.label, "Statistics Canada");
        assert!(config.output.pretty);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [source]
            date_column = "Date"
            location_column = "Region"
            product_column = "Item"
            price_column = "Price"
            label = "Test Source"
            "#,
        )
        .unwrap();

        assert_eq!(config.source.date_column, "Date");
        assert_eq!(config.source.label, "Test Source");
        // Output section omitted entirely
        assert!(config.output.pretty);
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = Config::load(Path::new("definitely/not/here.toml")).unwrap_err();
        match err {
            NormalizerError::Config(message) => {
                assert!(message.contains("not/here.toml"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
