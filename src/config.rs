use crate::filter::clause::is_valid_key;
use crate::filter::{DynamicFilters, ParseError, Shape};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_SEPARATOR: &str = ";";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid field declaration '{spec}'. Expected 'key=shape' format")]
    InvalidField { spec: String },
    #[error("Invalid field key '{key}'. Keys must match [A-Za-z][A-Za-z0-9_]*")]
    InvalidKey { key: String },
    #[error("Separator must not be empty")]
    EmptySeparator,
    #[error(transparent)]
    Shape(#[from] ParseError),
}

/// Schema and separator used to parse filter strings at runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub separator: String,
    pub fields: Vec<FieldSpec>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            fields: Vec::new(),
        }
    }
}

/// One schema entry: the clause key and the shape of its field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    pub shape: String,
}

impl FieldSpec {
    /// Parse an inline `key=shape` declaration
    pub fn parse_inline(spec: &str) -> Result<Self, ConfigError> {
        let Some((key, shape)) = spec.split_once('=') else {
            return Err(ConfigError::InvalidField {
                spec: spec.to_string(),
            });
        };

        Ok(FieldSpec {
            key: key.trim().to_string(),
            shape: shape.trim().to_string(),
        })
    }
}

impl FilterConfig {
    /// Check the separator and every field declaration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        for field in &self.fields {
            if !is_valid_key(&field.key) {
                return Err(ConfigError::InvalidKey {
                    key: field.key.clone(),
                });
            }
            field.shape.parse::<Shape>()?;
        }
        Ok(())
    }

    /// Build empty filter fields for every declared key
    pub fn build_filters(&self) -> Result<DynamicFilters, ConfigError> {
        self.validate()?;

        let mut filters = DynamicFilters::new();
        for field in &self.fields {
            filters.declare(field.key.clone(), field.shape.parse::<Shape>()?);
        }
        Ok(filters)
    }
}

pub fn load_config(path: Option<&Path>) -> Result<FilterConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(FilterConfig::default())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<FilterConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    let config = toml::from_str::<FilterConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        fields = config.fields.len(),
        "loaded filter config"
    );
    Ok(config)
}
