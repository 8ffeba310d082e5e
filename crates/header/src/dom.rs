//! Element abstraction consumed by the header.
//!
//! The header never reaches for a global document. Hosts implement
//! [`Element`] over their own node handles (a `web_sys::Element`, an
//! in-memory tree, a test double) and hand the header an
//! [`ElementResolver`] once, at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker class carried by navigation items that open a sub-panel.
pub const HAS_SUB_NAV_CLASS: &str = "has-sub-nav";
/// Attribute on a trigger item naming the sub-panel it opens.
pub const NAV_TARGET_ATTR: &str = "data-navitr";
/// Attribute on a sub-panel holding its identifier.
pub const PANEL_ID_ATTR: &str = "data-itr";
/// Tag of sub-panel entries inside the sub-navigation bar.
pub const PANEL_TAG: &str = "nav";

/// CSS `visibility` of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A handle to a host element.
///
/// Handles are cheap to clone and share the underlying node, so every
/// mutation goes through `&self`.
pub trait Element: Clone {
    fn id(&self) -> Option<String>;

    fn tag_name(&self) -> String;

    /// Full class attribute.
    fn class_name(&self) -> String;

    /// Replaces the class attribute wholesale.
    fn set_class_name(&self, value: &str);

    fn attribute(&self, name: &str) -> Option<String>;

    fn visibility(&self) -> Visibility;

    fn set_visibility(&self, visibility: Visibility);

    fn has_class(&self, class: &str) -> bool {
        self.class_name().split_whitespace().any(|candidate| candidate == class)
    }
}

/// Resolves the elements the header needs.
pub trait ElementResolver {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Sub-panel entries (`nav` elements) below `container`, in document order.
    fn sub_panels(&self, container: &Self::Element) -> Vec<Self::Element>;
}
