//! # Header navigation controller
//!
//! Drives the presentation state of a page header by assigning CSS classes
//! from a fixed style catalog, and opens a sub-navigation panel when the
//! pointer moves over a navigation item carrying the `has-sub-nav` marker.
//!
//! ## Architecture
//!
//! - [`dom`]: the element and resolver traits hosts implement
//! - [`memory`]: an in-memory implementation of those traits
//! - [`NavigationHeader`]: the style controller and pointer wiring
//! - [`Notifier`]: observer list for lifecycle notifications
//!
//! The header is single-threaded: handles are `Rc`-style shared nodes and
//! every operation runs to completion inside the host's event callback.

pub mod dom;
mod handles;
mod header;
pub mod memory;
mod notifier;
mod state;

pub use handles::HeaderHandles;
pub use header::{NavigationHeader, NavigationHeaderBuilder, PointerEvent, PointerOutcome};
pub use headnav_types::{
    ConfigError, HEADER_BASE_CLASS, HeaderConfig, HeaderError, HeaderEvent, HeaderEventKind, HeaderOptions,
    StyleCatalog, StyleError, SubStyleMap,
};
pub use notifier::{Handler, Notifier, SubscriptionId};
pub use state::{DisplayState, Listener, Listeners};
