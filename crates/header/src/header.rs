//! The navigation header controller.
//!
//! Every visual transition is a wholesale replacement of the header's class
//! attribute with `"ha-header <style class>"`, whatever the header's id. The rendered class is a pure
//! function of the stored nav style and the [`DisplayState`]:
//!
//! - `Primary` renders `catalog[nav_style]`
//! - `SubShown` renders `catalog[sub_styles[nav_style]]` with exactly one
//!   sub-panel visible
//!
//! Pointer events from the host are routed through [`NavigationHeader::handle_pointer`].
//! The move listener is one-shot: it detaches after opening a sub-panel and is
//! re-armed when the pointer leaves the sub-navigation bar.

use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::dom::{Element, ElementResolver, HAS_SUB_NAV_CLASS, NAV_TARGET_ATTR, PANEL_ID_ATTR, Visibility};
use crate::handles::HeaderHandles;
use crate::notifier::{Notifier, SubscriptionId};
use crate::state::{DisplayState, Listener, Listeners};
use headnav_types::{
    HEADER_BASE_CLASS, HeaderConfig, HeaderError, HeaderEvent, HeaderEventKind, HeaderOptions, StyleCatalog,
    StyleError, SubStyleMap,
};

/// Pointer input routed to the header by the host's event dispatch.
#[derive(Debug, Clone)]
pub enum PointerEvent<E> {
    /// The pointer moved over the navigation bar. `target` is the innermost
    /// element under the pointer.
    NavMove { target: E },
    /// The pointer left the sub-navigation bar.
    SubNavLeave,
}

/// What a routed pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// No armed listener reacted.
    Ignored,
    SubNavShown,
    SubNavHidden,
}

/// Collects subscribers before construction so they observe `initialized`.
pub struct NavigationHeaderBuilder {
    config: HeaderConfig,
    notifier: Notifier,
}

impl NavigationHeaderBuilder {
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            config,
            notifier: Notifier::new(),
        }
    }

    pub fn on(mut self, kind: HeaderEventKind, handler: impl FnMut(&HeaderEvent) + 'static) -> Self {
        self.notifier.subscribe(kind, handler);
        self
    }

    pub fn on_any(mut self, handler: impl FnMut(&HeaderEvent) + 'static) -> Self {
        self.notifier.subscribe_all(handler);
        self
    }

    /// Resolves every element through `resolver` and wires the listeners.
    /// Fails without producing a header when any element is missing.
    pub fn build<R: ElementResolver>(self, resolver: &R) -> Result<NavigationHeader<R::Element>, HeaderError> {
        let options = HeaderOptions::resolve(&self.config);
        let handles = HeaderHandles::resolve(resolver, &options)?;
        Ok(NavigationHeader::assemble(options, handles, self.notifier))
    }

    /// Uses handles the caller already resolved.
    pub fn build_with_handles<E: Element>(self, handles: HeaderHandles<E>) -> NavigationHeader<E> {
        let options = HeaderOptions::resolve(&self.config);
        NavigationHeader::assemble(options, handles, self.notifier)
    }
}

impl fmt::Debug for NavigationHeaderBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationHeaderBuilder")
            .field("config", &self.config)
            .field("notifier", &self.notifier)
            .finish()
    }
}

/// Header style controller bound to one set of element handles.
#[derive(Debug)]
pub struct NavigationHeader<E: Element> {
    options: HeaderOptions,
    catalog: StyleCatalog,
    sub_styles: &'static SubStyleMap,
    handles: HeaderHandles<E>,
    display: DisplayState,
    listeners: Listeners,
    notifier: Notifier,
}

impl<E: Element> NavigationHeader<E> {
    /// Builds a header with no subscribers.
    pub fn new<R>(config: HeaderConfig, resolver: &R) -> Result<Self, HeaderError>
    where
        R: ElementResolver<Element = E>,
    {
        NavigationHeaderBuilder::new(config).build(resolver)
    }

    fn assemble(options: HeaderOptions, handles: HeaderHandles<E>, notifier: Notifier) -> Self {
        if StyleCatalog::standard().get(options.nav_style).is_none() {
            debug!(nav_style = options.nav_style, "configured nav style is outside the catalog");
        }

        let mut header = Self {
            options,
            catalog: StyleCatalog::standard(),
            sub_styles: SubStyleMap::standard(),
            handles,
            display: DisplayState::Primary,
            listeners: Listeners::armed(),
            notifier,
        };
        header.emit(HeaderEventKind::Initialized, None);
        header
    }

    /// Re-merges `config` over the defaults, re-resolves the handles, resets
    /// to `Primary` with both listeners armed, and emits `initialized`.
    ///
    /// On error the header keeps its previous options and handles.
    pub fn init<R>(&mut self, config: HeaderConfig, resolver: &R) -> Result<(), HeaderError>
    where
        R: ElementResolver<Element = E>,
    {
        let options = HeaderOptions::resolve(&config);
        let handles = HeaderHandles::resolve(resolver, &options)?;

        self.options = options;
        self.handles = handles;
        self.display = DisplayState::Primary;
        self.listeners = Listeners::armed();
        self.emit(HeaderEventKind::Initialized, None);
        Ok(())
    }

    /// Snapshot of the options including the current style indices.
    pub fn get_options(&self) -> HeaderOptions {
        self.options.clone()
    }

    pub fn display_state(&self) -> &DisplayState {
        &self.display
    }

    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    pub fn handles(&self) -> &HeaderHandles<E> {
        &self.handles
    }

    /// Current class attribute of the header element.
    pub fn header_class(&self) -> String {
        self.handles.header.class_name()
    }

    pub fn subscribe(&mut self, kind: HeaderEventKind, handler: impl FnMut(&HeaderEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(kind, handler)
    }

    pub fn subscribe_all(&mut self, handler: impl FnMut(&HeaderEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe_all(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Applies primary style `index` and emits `navShown`.
    ///
    /// An index outside the catalog is a no-op reported as `InvalidStyleIndex`.
    pub fn show_nav(&mut self, index: usize) -> Result<(), StyleError> {
        let Some(class_name) = self.catalog.class_for(HEADER_BASE_CLASS, index) else {
            debug!(index, "ignoring nav style outside the catalog");
            return Err(StyleError::invalid_index(index, self.catalog.len()));
        };

        self.handles.header.set_class_name(&class_name);
        self.options.nav_style = index;
        self.display = DisplayState::Primary;
        self.emit(HeaderEventKind::NavShown, None);
        Ok(())
    }

    /// [`show_nav`](Self::show_nav) for loosely typed host input. Anything
    /// other than a non-negative integral number is rejected untouched.
    pub fn show_nav_value(&mut self, value: &Value) -> Result<(), StyleError> {
        match style_index_from_value(value) {
            Some(index) => self.show_nav(index),
            None => {
                debug!(%value, "ignoring non-integer nav style");
                Err(StyleError::invalid_index(value, self.catalog.len()))
            }
        }
    }

    /// Shows sub-panel `panel`, hides every other one, applies the sub style
    /// mapped from the current nav style, and emits `subNavShown`.
    ///
    /// Panel ids compare as strings, so `2` and `"2"` name the same panel.
    /// When the nav style has no mapping nothing changes and
    /// `UnmappedSubStyle` is returned.
    pub fn show_sub_nav(&mut self, panel: impl fmt::Display) -> Result<(), StyleError> {
        let nav_style = self.options.nav_style;
        let Some(sub_style) = self.sub_styles.get(nav_style) else {
            warn!(nav_style, "no sub-navigation style mapped; header left unchanged");
            return Err(StyleError::unmapped(nav_style));
        };
        let Some(class_name) = self.catalog.class_for(HEADER_BASE_CLASS, sub_style) else {
            warn!(nav_style, sub_style, "mapped sub-navigation style is outside the catalog");
            return Err(StyleError::invalid_index(sub_style, self.catalog.len()));
        };

        let panel = panel.to_string().trim().to_string();
        let mut matched = 0usize;
        for item in &self.handles.panels {
            let is_target = item.attribute(PANEL_ID_ATTR).is_some_and(|id| id.trim() == panel);
            if is_target {
                matched += 1;
                item.set_visibility(Visibility::Visible);
            } else {
                item.set_visibility(Visibility::Hidden);
            }
        }
        if matched == 0 {
            debug!(panel = %panel, "no sub-panel matches; all panels hidden");
        }

        self.handles.header.set_class_name(&class_name);
        self.options.sub_nav_style = sub_style;
        self.display = DisplayState::SubShown { panel: panel.clone() };
        self.emit(HeaderEventKind::SubNavShown, Some(panel));
        Ok(())
    }

    /// Restores the class for the stored nav style and emits `subNavHidden`.
    /// Panel visibility is left alone; the stylesheet hides the bar.
    pub fn hide_sub_nav(&mut self) -> Result<(), StyleError> {
        let nav_style = self.options.nav_style;
        let Some(class_name) = self.catalog.class_for(HEADER_BASE_CLASS, nav_style) else {
            warn!(nav_style, "stored nav style is outside the catalog; header left unchanged");
            return Err(StyleError::invalid_index(nav_style, self.catalog.len()));
        };

        self.handles.header.set_class_name(&class_name);
        self.display = DisplayState::Primary;
        self.emit(HeaderEventKind::SubNavHidden, None);
        Ok(())
    }

    /// Routes one pointer event through whichever listener is armed for it.
    pub fn handle_pointer(&mut self, event: PointerEvent<E>) -> Result<PointerOutcome, StyleError> {
        match event {
            PointerEvent::NavMove { target } => self.on_nav_move(&target),
            PointerEvent::SubNavLeave => self.on_sub_nav_leave(),
        }
    }

    /// Detaches both listeners, emits `disposed`, and hands back the element
    /// handles. The header class is left as is.
    pub fn dispose(mut self) -> HeaderHandles<E> {
        self.listeners.detach_all();
        self.emit(HeaderEventKind::Disposed, None);
        self.handles
    }

    fn on_nav_move(&mut self, target: &E) -> Result<PointerOutcome, StyleError> {
        if !self.listeners.nav_move.is_armed() || !target.has_class(HAS_SUB_NAV_CLASS) {
            return Ok(PointerOutcome::Ignored);
        }
        let Some(panel) = target.attribute(NAV_TARGET_ATTR) else {
            debug!("sub-nav trigger has no {NAV_TARGET_ATTR} attribute");
            return Ok(PointerOutcome::Ignored);
        };

        let result = self.show_sub_nav(&panel);
        self.listeners.nav_move = Listener::Detached;
        result.map(|()| PointerOutcome::SubNavShown)
    }

    fn on_sub_nav_leave(&mut self) -> Result<PointerOutcome, StyleError> {
        if !self.listeners.sub_nav_leave.is_armed() {
            return Ok(PointerOutcome::Ignored);
        }

        let result = self.hide_sub_nav();
        self.listeners.nav_move = Listener::Armed;
        result.map(|()| PointerOutcome::SubNavHidden)
    }

    fn emit(&mut self, kind: HeaderEventKind, panel: Option<String>) {
        debug!(event = %kind, nav_style = self.options.nav_style, sub_nav_style = self.options.sub_nav_style, "header event");
        let event = HeaderEvent::new(kind, self.options.clone());
        let event = match panel {
            Some(panel) => event.with_panel(panel),
            None => event,
        };
        self.notifier.emit(&event);
    }
}

/// Accepts non-negative integral JSON numbers, including `7.0`.
fn style_index_from_value(value: &Value) -> Option<usize> {
    let number = value.as_number()?;
    if let Some(index) = number.as_u64() {
        return usize::try_from(index).ok();
    }
    let float = number.as_f64()?;
    if float >= 0.0 && float.fract() == 0.0 && float <= usize::MAX as f64 {
        Some(float as usize)
    } else {
        None
    }
}
