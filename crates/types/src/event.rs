use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::HeaderOptions;

/// Lifecycle notifications emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderEventKind {
    Initialized,
    NavShown,
    SubNavShown,
    SubNavHidden,
    Disposed,
}

impl HeaderEventKind {
    pub const ALL: [HeaderEventKind; 5] = [
        HeaderEventKind::Initialized,
        HeaderEventKind::NavShown,
        HeaderEventKind::SubNavShown,
        HeaderEventKind::SubNavHidden,
        HeaderEventKind::Disposed,
    ];

    /// Event name as subscribers know it.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderEventKind::Initialized => "initialized",
            HeaderEventKind::NavShown => "navShown",
            HeaderEventKind::SubNavShown => "subNavShown",
            HeaderEventKind::SubNavHidden => "subNavHidden",
            HeaderEventKind::Disposed => "disposed",
        }
    }
}

impl fmt::Display for HeaderEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderEventKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown header event: {value}"))
    }
}

/// A notification plus the options snapshot taken right after the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEvent {
    pub kind: HeaderEventKind,
    pub options: HeaderOptions,
    /// Sub-panel made visible; only set for `subNavShown`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,
}

impl HeaderEvent {
    pub fn new(kind: HeaderEventKind, options: HeaderOptions) -> Self {
        Self {
            kind,
            options,
            panel: None,
        }
    }

    pub fn with_panel(mut self, panel: impl Into<String>) -> Self {
        self.panel = Some(panel.into());
        self
    }
}
