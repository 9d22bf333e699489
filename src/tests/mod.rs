//! End-to-end sessions driving the gallery the way a host would.

mod session_tests;

use crate::geometry::ViewportRect;
use crate::subscription::{Listener, SubscriptionTracker};
use crate::{EventStatus, Gallery, InputEvent, Message};

/// Minimal host: re-measures the viewport per event and keeps listeners in sync.
pub(crate) struct TestHost {
    pub gallery: Gallery,
    pub tracker: SubscriptionTracker,
    pub rect: ViewportRect,
    pub attached: Vec<Listener>,
    pub prevented_defaults: usize,
}

impl TestHost {
    pub fn new(gallery: Gallery, rect: ViewportRect) -> Self {
        let mut host = Self {
            gallery,
            tracker: SubscriptionTracker::new(),
            rect,
            attached: Vec::new(),
            prevented_defaults: 0,
        };
        host.sync_listeners();
        host
    }

    pub fn send(&mut self, message: Message) {
        self.gallery.update(message).unwrap();
        self.sync_listeners();
    }

    /// Deliver an event if a listener for it is attached, as a real host would.
    pub fn input(&mut self, event: InputEvent) -> EventStatus {
        if !self.attached.contains(&listener_for(&event)) {
            return EventStatus::Ignored;
        }
        let status = self.gallery.on_event(&event, self.rect);
        if status.is_captured() {
            self.prevented_defaults += 1;
        }
        self.sync_listeners();
        status
    }

    fn sync_listeners(&mut self) {
        let diff = self.tracker.sync(&self.gallery.subscriptions());
        for listener in diff.attach {
            assert!(!self.attached.contains(&listener), "{listener:?} attached twice");
            self.attached.push(listener);
        }
        for listener in diff.detach {
            let pos = self
                .attached
                .iter()
                .position(|l| *l == listener)
                .expect("detaching a listener that was never attached");
            self.attached.remove(pos);
        }
    }
}

fn listener_for(event: &InputEvent) -> Listener {
    match event {
        InputEvent::Wheel { .. } => Listener::ViewportWheel,
        InputEvent::PointerPressed { .. } => Listener::ViewportPointerDown,
        InputEvent::PointerMoved { .. } => Listener::WindowPointerMove,
        InputEvent::PointerReleased { .. } => Listener::WindowPointerUp,
        InputEvent::KeyPressed { .. } => Listener::Keyboard,
    }
}
