//! Observer list keyed by event name.

use std::fmt;

use indexmap::IndexMap;

use headnav_types::{HeaderEvent, HeaderEventKind};

/// Callback invoked with each matching notification.
pub type Handler = Box<dyn FnMut(&HeaderEvent)>;

/// Token returned by `subscribe`; pass it back to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the header's subscribers. Handlers run synchronously, in
/// subscription order, before the emitting operation returns.
#[derive(Default)]
pub struct Notifier {
    next_id: u64,
    handlers: IndexMap<HeaderEventKind, Vec<(SubscriptionId, Handler)>>,
    wildcard: Vec<(SubscriptionId, Handler)>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: IndexMap<_, _> = self.handlers.iter().map(|(kind, list)| (kind.as_str(), list.len())).collect();
        f.debug_struct("Notifier")
            .field("handlers", &counts)
            .field("wildcard", &self.wildcard.len())
            .finish()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one event kind.
    pub fn subscribe(&mut self, kind: HeaderEventKind, handler: impl FnMut(&HeaderEvent) + 'static) -> SubscriptionId {
        let id = self.allocate_id();
        self.handlers.entry(kind).or_default().push((id, Box::new(handler)));
        id
    }

    /// Subscribe to every event kind.
    pub fn subscribe_all(&mut self, handler: impl FnMut(&HeaderEvent) + 'static) -> SubscriptionId {
        let id = self.allocate_id();
        self.wildcard.push((id, Box::new(handler)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.len();
        for list in self.handlers.values_mut() {
            list.retain(|(candidate, _)| *candidate != id);
        }
        self.wildcard.retain(|(candidate, _)| *candidate != id);
        self.len() != before
    }

    /// Number of handlers that would receive an event of `kind`.
    pub fn listener_count(&self, kind: HeaderEventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len) + self.wildcard.len()
    }

    pub fn emit(&mut self, event: &HeaderEvent) {
        if let Some(list) = self.handlers.get_mut(&event.kind) {
            for (_, handler) in list.iter_mut() {
                handler(event);
            }
        }
        for (_, handler) in self.wildcard.iter_mut() {
            handler(event);
        }
    }

    fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum::<usize>() + self.wildcard.len()
    }

    fn allocate_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }
}
