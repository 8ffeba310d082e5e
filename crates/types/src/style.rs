//! Header style catalog and the primary-to-sub style mapping.
//!
//! Every visual state the header can take is a CSS class from
//! [`STYLE_DEFINITIONS`]. Indices into that list are the public currency of
//! the controller: options, snapshots, and events all carry indices, and the
//! class attribute is rendered from them on demand.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Describes one selectable header style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleDefinition {
    /// CSS class assigned to the header element.
    pub class_name: &'static str,
    /// Human-friendly name.
    pub label: &'static str,
    /// Short description of the intended effect (the stylesheet owns the visuals).
    pub description: &'static str,
}

/// Ordered list of header styles. Positions are stable; append only.
pub const STYLE_DEFINITIONS: &[StyleDefinition] = &[
    StyleDefinition {
        class_name: "ha-header-large",
        label: "Large",
        description: "Full-height header.",
    },
    StyleDefinition {
        class_name: "ha-header-small",
        label: "Small",
        description: "Compact header.",
    },
    StyleDefinition {
        class_name: "ha-header-hide",
        label: "Hide",
        description: "Header slid out of view.",
    },
    StyleDefinition {
        class_name: "ha-header-show",
        label: "Show",
        description: "Header slid into view.",
    },
    StyleDefinition {
        class_name: "ha-header-subshow",
        label: "Sub show",
        description: "Header revealing the sub-navigation bar.",
    },
    StyleDefinition {
        class_name: "ha-header-shrink",
        label: "Shrink",
        description: "Header scaled down.",
    },
    StyleDefinition {
        class_name: "ha-header-rotate",
        label: "Rotate",
        description: "Navigation bar flipped to expose the sub-navigation face.",
    },
    StyleDefinition {
        class_name: "ha-header-rotateBack",
        label: "Rotate back",
        description: "Navigation bar flipped back to its front face.",
    },
    StyleDefinition {
        class_name: "ha-header-color",
        label: "Color",
        description: "Header recolored.",
    },
    StyleDefinition {
        class_name: "ha-header-box",
        label: "Box",
        description: "Header drawn as a boxed panel.",
    },
    StyleDefinition {
        class_name: "ha-header-fullscreen",
        label: "Fullscreen",
        description: "Header covering the viewport.",
    },
    StyleDefinition {
        class_name: "ha-header-subfullscreen",
        label: "Sub fullscreen",
        description: "Fullscreen header with the sub-navigation bar expanded.",
    },
];

/// Class every rendered header carries ahead of its style class.
pub const HEADER_BASE_CLASS: &str = "ha-header";

/// Primary style index -> style index shown while a sub-panel is open.
const SUB_STYLE_ENTRIES: &[(usize, usize)] = &[(0, 4), (1, 4), (2, 4), (5, 6), (7, 6), (8, 11), (9, 11), (10, 11)];

static STANDARD_SUB_STYLES: Lazy<SubStyleMap> = Lazy::new(|| SubStyleMap::from_pairs(SUB_STYLE_ENTRIES.iter().copied()));

/// Immutable, ordered view over the style definitions.
#[derive(Clone, Copy, Debug)]
pub struct StyleCatalog {
    definitions: &'static [StyleDefinition],
}

impl StyleCatalog {
    /// The catalog every header uses.
    pub fn standard() -> Self {
        Self {
            definitions: STYLE_DEFINITIONS,
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static StyleDefinition> {
        self.definitions.get(index)
    }

    /// CSS class for `index`, if it lies inside the catalog.
    pub fn class_name(&self, index: usize) -> Option<&'static str> {
        self.get(index).map(|definition| definition.class_name)
    }

    /// Locate a style by class name or label (case-insensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        let needle = name.trim();
        self.definitions.iter().position(|definition| {
            definition.class_name.eq_ignore_ascii_case(needle) || definition.label.eq_ignore_ascii_case(needle)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static StyleDefinition)> + '_ {
        self.definitions.iter().enumerate()
    }

    /// Renders the full class attribute: `"<base> <style class>"`.
    pub fn class_for(&self, base: &str, index: usize) -> Option<String> {
        self.class_name(index).map(|class_name| format!("{base} {class_name}"))
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Mapping from a primary style index to its sub-navigation style index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubStyleMap {
    entries: IndexMap<usize, usize>,
}

impl SubStyleMap {
    /// The mapping every header uses.
    pub fn standard() -> &'static SubStyleMap {
        &STANDARD_SUB_STYLES
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, nav_style: usize) -> Option<usize> {
        self.entries.get(&nav_style).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().map(|(nav, sub)| (*nav, *sub))
    }
}
