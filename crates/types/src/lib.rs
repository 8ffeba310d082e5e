//! Shared types for the header navigation controller: options, the style
//! catalog, lifecycle events, errors, and configuration loading.

pub mod config;
mod error;
mod event;
mod options;
pub mod style;

pub use error::{ConfigError, HeaderError, StyleError};
pub use event::{HeaderEvent, HeaderEventKind};
pub use options::{
    DEFAULT_ID_SELECTOR, DEFAULT_NAV_STYLE, DEFAULT_SUB_NAV_STYLE, HeaderConfig, HeaderOptions, NAV_BAR_SUFFIX,
    SUB_NAV_BAR_SUFFIX,
};
pub use style::{HEADER_BASE_CLASS, STYLE_DEFINITIONS, StyleCatalog, StyleDefinition, SubStyleMap};
