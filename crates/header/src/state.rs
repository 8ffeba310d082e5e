use serde::Serialize;

/// What the header class currently reflects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DisplayState {
    /// Class reflects the stored nav style.
    #[default]
    Primary,
    /// Class reflects the mapped sub style; `panel` is the visible sub-panel.
    SubShown { panel: String },
}

impl DisplayState {
    pub fn is_sub_shown(&self) -> bool {
        matches!(self, DisplayState::SubShown { .. })
    }
}

/// Whether a listener currently reacts to the events routed to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Listener {
    Armed,
    #[default]
    Detached,
}

impl Listener {
    pub fn is_armed(&self) -> bool {
        matches!(self, Listener::Armed)
    }
}

/// The two pointer listeners the header owns. Each slot holds a single
/// listener, so re-arming never stacks a second move listener.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listeners {
    /// One-shot: detaches after opening a sub-panel, re-armed on leave.
    pub nav_move: Listener,
    pub sub_nav_leave: Listener,
}

impl Listeners {
    pub fn armed() -> Self {
        Self {
            nav_move: Listener::Armed,
            sub_nav_leave: Listener::Armed,
        }
    }

    pub fn detach_all(&mut self) {
        self.nav_move = Listener::Detached;
        self.sub_nav_leave = Listener::Detached;
    }
}
