//! Declarative input listener subscriptions.
//!
//! The gallery declares which listeners it needs for its current state; the
//! host keeps a [`SubscriptionTracker`] and applies the attach/detach diff
//! after every update. Listeners for the open viewer therefore exist exactly
//! while an item is open, whichever way it was closed.

/// An input listener the host attaches on the gallery's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Listener {
    /// Key presses, window-wide
    Keyboard,
    /// Wheel events over the open viewport
    ViewportWheel,
    /// Pointer presses over the open viewport
    ViewportPointerDown,
    /// Pointer moves, window-wide
    WindowPointerMove,
    /// Pointer releases, window-wide
    WindowPointerUp,
}

impl Listener {
    /// Listeners needed while an item is open.
    pub const VIEWER: [Listener; 4] = [
        Listener::ViewportWheel,
        Listener::ViewportPointerDown,
        Listener::WindowPointerMove,
        Listener::WindowPointerUp,
    ];
}

/// The set of listeners required at one moment, kept sorted and unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Subscriptions {
    listeners: Vec<Listener>,
}

impl Subscriptions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, listener: Listener) -> Self {
        if let Err(pos) = self.listeners.binary_search(&listener) {
            self.listeners.insert(pos, listener);
        }
        self
    }

    pub fn with_all(self, listeners: impl IntoIterator<Item = Listener>) -> Self {
        listeners.into_iter().fold(self, Subscriptions::with)
    }

    pub fn contains(&self, listener: Listener) -> bool {
        self.listeners.binary_search(&listener).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Listener> + '_ {
        self.listeners.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Changes the host must apply to match the wanted subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubscriptionDiff {
    pub attach: Vec<Listener>,
    pub detach: Vec<Listener>,
}

impl SubscriptionDiff {
    pub fn is_empty(&self) -> bool {
        self.attach.is_empty() && self.detach.is_empty()
    }
}

/// Tracks which listeners are attached on the host side.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionTracker {
    active: Subscriptions,
}

impl SubscriptionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &Subscriptions {
        &self.active
    }

    /// Diff `wanted` against the attached set and adopt it.
    pub fn sync(&mut self, wanted: &Subscriptions) -> SubscriptionDiff {
        let diff = SubscriptionDiff {
            attach: wanted.iter().filter(|l| !self.active.contains(*l)).collect(),
            detach: self.active.iter().filter(|l| !wanted.contains(*l)).collect(),
        };
        if !diff.is_empty() {
            log::debug!("Listeners: attach {:?}, detach {:?}", diff.attach, diff.detach);
        }
        self.active = wanted.clone();
        diff
    }

    /// Detach everything, e.g. when the gallery is torn down.
    pub fn teardown(&mut self) -> Vec<Listener> {
        std::mem::take(&mut self.active).listeners
    }
}
