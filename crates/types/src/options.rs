//! Header options: the user-supplied configuration and its resolved form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Default id of the header element.
pub const DEFAULT_ID_SELECTOR: &str = "ha-header";
/// Default primary style (`ha-header-rotateBack`).
pub const DEFAULT_NAV_STYLE: usize = 7;
/// Default sub-navigation style (`ha-header-rotate`).
pub const DEFAULT_SUB_NAV_STYLE: usize = 6;

/// Suffix appended to the header id to find the navigation bar.
pub const NAV_BAR_SUFFIX: &str = "-nav-id";
/// Suffix appended to the header id to find the sub-navigation bar.
pub const SUB_NAV_BAR_SUFFIX: &str = "-subnav-id";

/// Options as supplied by the host. Every field is optional; missing fields
/// fall back to the defaults when resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_style: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_nav_style: Option<usize>,
    /// Unrecognized keys. Carried along untouched and otherwise ignored.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HeaderConfig {
    pub fn with_id_selector(mut self, id_selector: impl Into<String>) -> Self {
        self.id_selector = Some(id_selector.into());
        self
    }

    pub fn with_nav_style(mut self, nav_style: usize) -> Self {
        self.nav_style = Some(nav_style);
        self
    }

    pub fn with_sub_nav_style(mut self, sub_nav_style: usize) -> Self {
        self.sub_nav_style = Some(sub_nav_style);
        self
    }

    /// Layers `overlay` on top of `self`; fields set in `overlay` win.
    pub fn merge(mut self, overlay: HeaderConfig) -> Self {
        if overlay.id_selector.is_some() {
            self.id_selector = overlay.id_selector;
        }
        if overlay.nav_style.is_some() {
            self.nav_style = overlay.nav_style;
        }
        if overlay.sub_nav_style.is_some() {
            self.sub_nav_style = overlay.sub_nav_style;
        }
        self.extra.extend(overlay.extra);
        self
    }
}

/// Fully resolved options. Also serves as the by-value snapshot returned by
/// the header and attached to every notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderOptions {
    pub id_selector: String,
    pub nav_style: usize,
    pub sub_nav_style: usize,
    /// Id of the resolved header element.
    pub element: String,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self::resolve(&HeaderConfig::default())
    }
}

impl HeaderOptions {
    /// Merges `config` over the built-in defaults.
    pub fn resolve(config: &HeaderConfig) -> Self {
        for key in config.extra.keys() {
            debug!(option = %key, "ignoring unrecognized header option");
        }

        let id_selector = config
            .id_selector
            .as_deref()
            .map(normalize_id_selector)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_ID_SELECTOR.to_string());

        Self {
            element: id_selector.clone(),
            id_selector,
            nav_style: config.nav_style.unwrap_or(DEFAULT_NAV_STYLE),
            sub_nav_style: config.sub_nav_style.unwrap_or(DEFAULT_SUB_NAV_STYLE),
        }
    }

    /// Id of the header element; also the base class of every rendered class attribute.
    pub fn header_id(&self) -> &str {
        &self.element
    }

    pub fn nav_bar_id(&self) -> String {
        format!("{}{NAV_BAR_SUFFIX}", self.id_selector)
    }

    pub fn sub_nav_bar_id(&self) -> String {
        format!("{}{SUB_NAV_BAR_SUFFIX}", self.id_selector)
    }
}

/// Accepts both `ha-header` and `#ha-header`.
fn normalize_id_selector(raw: &str) -> String {
    raw.trim().trim_start_matches('#').to_string()
}
