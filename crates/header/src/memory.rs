//! In-memory element tree.
//!
//! Implements [`Element`] and [`ElementResolver`] without a browser. Used by
//! the replay binary and by tests to observe every class and visibility
//! change the header makes.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::dom::{Element, ElementResolver, HAS_SUB_NAV_CLASS, NAV_TARGET_ATTR, PANEL_ID_ATTR, PANEL_TAG, Visibility};
use headnav_types::{NAV_BAR_SUFFIX, SUB_NAV_BAR_SUFFIX};

#[derive(Debug, Default)]
struct ElementData {
    id: Option<String>,
    tag: String,
    class_name: String,
    attributes: IndexMap<String, String>,
    visibility: Visibility,
    children: Vec<MemoryElement>,
}

/// Shared handle to an in-memory element. Clones refer to the same node.
#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoryElement {}

impl MemoryElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.into(),
            ..ElementData::default()
        })))
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.0.borrow_mut().id = Some(id.into());
        self
    }

    pub fn with_class(self, class_name: impl Into<String>) -> Self {
        self.0.borrow_mut().class_name = class_name.into();
        self
    }

    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(self, child: MemoryElement) -> Self {
        self.append_child(child);
        self
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.0.borrow_mut().attributes.insert(name.into(), value.into());
    }

    pub fn append_child(&self, child: MemoryElement) {
        self.0.borrow_mut().children.push(child);
    }

    pub fn children(&self) -> Vec<MemoryElement> {
        self.0.borrow().children.clone()
    }

    /// Self and every descendant, depth-first in document order.
    pub fn descendants_and_self(&self) -> Vec<MemoryElement> {
        let mut out = vec![self.clone()];
        for child in self.children() {
            out.extend(child.descendants_and_self());
        }
        out
    }
}

impl Element for MemoryElement {
    fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    fn tag_name(&self) -> String {
        self.0.borrow().tag.clone()
    }

    fn class_name(&self) -> String {
        self.0.borrow().class_name.clone()
    }

    fn set_class_name(&self, value: &str) {
        self.0.borrow_mut().class_name = value.to_string();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn visibility(&self) -> Visibility {
        self.0.borrow().visibility
    }

    fn set_visibility(&self, visibility: Visibility) {
        self.0.borrow_mut().visibility = visibility;
    }
}

/// A document rooted at a `body` element.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    body: MemoryElement,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            body: MemoryElement::new("body"),
        }
    }

    pub fn body(&self) -> &MemoryElement {
        &self.body
    }

    pub fn append(&self, element: MemoryElement) {
        self.body.append_child(element);
    }

    /// First element (document order) with `name` set to `value`.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<MemoryElement> {
        self.body
            .descendants_and_self()
            .into_iter()
            .find(|element| element.attribute(name).as_deref() == Some(value))
    }

    /// Navigation item that opens sub-panel `panel`.
    pub fn nav_trigger(&self, panel: &str) -> Option<MemoryElement> {
        self.find_by_attribute(NAV_TARGET_ATTR, panel)
    }

    /// Sub-panel entry identified by `panel`.
    pub fn sub_panel(&self, panel: &str) -> Option<MemoryElement> {
        self.find_by_attribute(PANEL_ID_ATTR, panel)
    }

    /// Builds the markup a header with `id_selector` expects: the header
    /// element, a navigation bar with one trigger per panel plus a plain
    /// link, and a sub-navigation bar with one `nav` entry per panel.
    pub fn standard_page(id_selector: &str, panels: &[&str]) -> Self {
        let document = Self::new();

        let nav_bar = MemoryElement::new("nav").with_id(format!("{id_selector}{NAV_BAR_SUFFIX}"));
        for panel in panels {
            let item = MemoryElement::new("a")
                .with_class(HAS_SUB_NAV_CLASS)
                .with_attribute(NAV_TARGET_ATTR, *panel)
                .with_attribute("href", "#")
                .with_child(MemoryElement::new("span"));
            nav_bar.append_child(item);
        }
        nav_bar.append_child(MemoryElement::new("a").with_class("plain").with_attribute("href", "#"));

        let sub_nav_bar = MemoryElement::new("div")
            .with_id(format!("{id_selector}{SUB_NAV_BAR_SUFFIX}"))
            .with_class(format!("{id_selector}-bottom"));
        for panel in panels {
            let entry = MemoryElement::new(PANEL_TAG)
                .with_attribute(PANEL_ID_ATTR, *panel)
                .with_child(MemoryElement::new("a").with_attribute("href", "#"));
            sub_nav_bar.append_child(entry);
        }

        let header = MemoryElement::new("header")
            .with_id(id_selector)
            .with_class(id_selector)
            .with_child(
                MemoryElement::new("div")
                    .with_class(format!("{id_selector}-perspective"))
                    .with_child(MemoryElement::new("div").with_class(format!("{id_selector}-front")).with_child(nav_bar))
                    .with_child(sub_nav_bar),
            );
        document.append(header);
        document
    }
}

impl ElementResolver for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.body
            .descendants_and_self()
            .into_iter()
            .find(|element| element.id().as_deref() == Some(id))
    }

    fn sub_panels(&self, container: &MemoryElement) -> Vec<MemoryElement> {
        container
            .descendants_and_self()
            .into_iter()
            .skip(1)
            .filter(|element| element.tag_name() == PANEL_TAG)
            .collect()
    }
}
