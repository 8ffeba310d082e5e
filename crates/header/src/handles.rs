use tracing::debug;

use crate::dom::{Element, ElementResolver};
use headnav_types::{ConfigError, HeaderOptions};

/// Element handles the header operates on. Resolved once; never re-resolved.
#[derive(Debug, Clone)]
pub struct HeaderHandles<E: Element> {
    /// Element whose class attribute reflects the current style.
    pub header: E,
    /// Bar watched for moves over sub-nav triggers.
    pub nav_bar: E,
    /// Bar watched for the pointer leaving.
    pub sub_nav_bar: E,
    /// Sub-panel entries inside `sub_nav_bar`, in document order.
    pub panels: Vec<E>,
}

impl<E: Element> HeaderHandles<E> {
    /// Looks up every element `options` names. Fails on the first missing one.
    pub fn resolve<R>(resolver: &R, options: &HeaderOptions) -> Result<Self, ConfigError>
    where
        R: ElementResolver<Element = E>,
    {
        let header = require(resolver, options.header_id())?;
        let nav_bar = require(resolver, &options.nav_bar_id())?;
        let sub_nav_bar = require(resolver, &options.sub_nav_bar_id())?;
        let panels = resolver.sub_panels(&sub_nav_bar);
        if panels.is_empty() {
            debug!(id = %options.sub_nav_bar_id(), "sub-navigation bar holds no panels");
        }

        Ok(Self {
            header,
            nav_bar,
            sub_nav_bar,
            panels,
        })
    }
}

fn require<R: ElementResolver>(resolver: &R, id: &str) -> Result<R::Element, ConfigError> {
    resolver.element_by_id(id).ok_or_else(|| ConfigError::missing_element(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, MemoryElement};
    use headnav_types::HeaderConfig;

    #[test]
    fn resolves_all_handles_from_the_standard_page() {
        let document = MemoryDocument::standard_page("ha-header", &["1", "2"]);
        let handles = HeaderHandles::resolve(&document, &HeaderOptions::default()).expect("resolves");
        assert_eq!(handles.header.id().as_deref(), Some("ha-header"));
        assert_eq!(handles.panels.len(), 2);
    }

    #[test]
    fn missing_header_names_its_id() {
        let document = MemoryDocument::standard_page("other", &["1"]);
        let options = HeaderOptions::resolve(&HeaderConfig::default().with_id_selector("ha-header"));
        let err = HeaderHandles::resolve(&document, &options).expect_err("header is missing");
        assert!(matches!(err, ConfigError::MissingElement { ref id } if id == "ha-header"));
    }

    #[test]
    fn missing_nav_bar_names_its_id() {
        let document = MemoryDocument::new();
        document.append(MemoryElement::new("header").with_id("ha-header"));
        let err = HeaderHandles::resolve(&document, &HeaderOptions::default()).expect_err("nav bar is missing");
        assert_eq!(err.to_string(), "Required element not found: #ha-header-nav-id");
    }
}
