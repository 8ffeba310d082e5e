//! Error types for header navigation.

use thiserror::Error;

/// Top-level error surfaced by header operations.
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Style error: {0}")]
    Style(#[from] StyleError),
}

/// Errors that make an instance unusable. Construction fails on any of these.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required element not found: #{id}")]
    MissingElement { id: String },

    #[error("Invalid override {variable}={value}: {reason}")]
    InvalidOverride {
        variable: String,
        value: String,
        reason: String,
    },

    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Per-call errors. The call that produced one is a no-op and emits nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Invalid style index: {value} (catalog holds {catalog_len} styles)")]
    InvalidStyleIndex { value: String, catalog_len: usize },

    #[error("No sub-navigation style mapped for nav style {nav_style}")]
    UnmappedSubStyle { nav_style: usize },
}

impl ConfigError {
    /// Create a missing element error.
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    /// Create an invalid environment override error.
    pub fn invalid_override(variable: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOverride {
            variable: variable.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl StyleError {
    /// Create an invalid style index error from any displayable request value.
    pub fn invalid_index(value: impl ToString, catalog_len: usize) -> Self {
        Self::InvalidStyleIndex {
            value: value.to_string(),
            catalog_len,
        }
    }

    /// Create an unmapped sub-style error.
    pub fn unmapped(nav_style: usize) -> Self {
        Self::UnmappedSubStyle { nav_style }
    }
}
