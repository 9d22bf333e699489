//! Gallery controller tying the collection to the viewport engine.
//!
//! The gallery applies presentation [`Message`]s and raw [`InputEvent`]s and
//! keeps one invariant between its two parts: the viewport is open exactly
//! when an item is selected, and it restarts from the identity transform
//! every time the open item changes.

use crate::collection::{CollectionStore, Draft, ModalMode};
use crate::error::GalleryError;
use crate::event::{EventStatus, InputEvent, Key, MouseButton};
use crate::geometry::ViewportRect;
use crate::keybindings::{KeyAction, KeyBindings};
use crate::message::Message;
use crate::model::{GalleryItem, ItemId, ResourceLocator};
use crate::resource::ResourceProvider;
use crate::subscription::{Listener, Subscriptions};
use crate::viewport::{ViewportEngine, ZoomSettings};
use crate::zoom_math::Transform;

/// Image gallery state: items, the open item and its zoom/pan.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    store: CollectionStore,
    viewport: ViewportEngine,
    keybindings: KeyBindings,
}

impl Gallery {
    /// Create an empty gallery with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gallery seeded with `items`.
    pub fn with_items(items: impl IntoIterator<Item = GalleryItem>) -> Self {
        Self {
            store: CollectionStore::with_items(items),
            ..Self::default()
        }
    }

    /// Use custom zoom settings. The viewer is closed afterwards.
    pub fn with_zoom_settings(mut self, settings: ZoomSettings) -> Self {
        self.store.deselect();
        self.viewport = ViewportEngine::with_settings(settings);
        self
    }

    /// Use custom keybindings.
    pub fn with_keybindings(mut self, keybindings: KeyBindings) -> Self {
        self.keybindings = keybindings;
        self
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn viewport(&self) -> &ViewportEngine {
        &self.viewport
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    pub fn items(&self) -> &[GalleryItem] {
        self.store.items()
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.store.selected()
    }

    pub fn selected_item(&self) -> Option<&GalleryItem> {
        self.store.selected_item()
    }

    /// Zoom and pan of the open item, `None` while the viewer is closed.
    pub fn transform(&self) -> Option<Transform> {
        self.viewport.transform()
    }

    pub fn modal(&self) -> ModalMode {
        self.store.modal()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.store.draft()
    }

    /// Drain locators that no item or draft references anymore.
    pub fn take_orphaned(&mut self) -> Vec<ResourceLocator> {
        self.store.take_orphaned()
    }

    /// Release every orphaned locator into `provider`. Returns how many.
    pub fn release_orphaned(&mut self, provider: &mut impl ResourceProvider) -> usize {
        let orphaned = self.store.take_orphaned();
        for locator in &orphaned {
            provider.release(locator);
        }
        orphaned.len()
    }

    /// Listeners the host must have attached for the current state.
    pub fn subscriptions(&self) -> Subscriptions {
        let subscriptions = Subscriptions::none().with(Listener::Keyboard);
        if self.viewport.is_open() {
            subscriptions.with_all(Listener::VIEWER)
        } else {
            subscriptions
        }
    }

    /// Apply a presentation command.
    ///
    /// Uploads that are not images are rejected without any state change;
    /// the error's message is meant to be shown to the user.
    pub fn update(&mut self, message: Message) -> Result<(), GalleryError> {
        match message {
            Message::Select(id) => self.select(id),
            Message::BeginAdd(upload) => {
                let locator = upload.validate()?;
                self.store.open_add_modal(locator);
                self.viewport.drag_end();
            }
            Message::Deselect => self.close_viewer(),
            Message::Remove(id) => self.remove(id),
            Message::RemoveSelected => {
                if let Some(id) = self.store.selected() {
                    self.remove(id);
                }
            }
            Message::ReplaceImage(upload) => {
                let locator = upload.validate()?;
                match self.store.selected() {
                    Some(id) => {
                        self.store.replace_image(id, locator);
                    }
                    None => {
                        log::debug!("Replace image ignored: viewer is closed");
                        self.store.discard_resource(locator);
                    }
                }
            }
            Message::OpenEditModal => {
                self.open_edit_modal();
            }
            Message::DraftTitleChanged(title) => {
                self.store.set_draft_title(title);
            }
            Message::DraftCategoryChanged(category) => {
                self.store.set_draft_category(category);
            }
            Message::SaveModal => {
                self.store.save_modal();
            }
            Message::CloseModal => {
                self.store.close_modal();
            }
        }
        Ok(())
    }

    /// Handle raw input. `rect` is the viewport rectangle measured for this event.
    pub fn on_event(&mut self, event: &InputEvent, rect: ViewportRect) -> EventStatus {
        match *event {
            InputEvent::KeyPressed { key } => self.on_key(key),
            InputEvent::Wheel { delta_y, position } => {
                if !self.accepts_viewer_input() || !rect.contains(position) {
                    return EventStatus::Ignored;
                }
                let cursor = rect.relative_to_center(position);
                EventStatus::from_handled(self.viewport.wheel_zoom(delta_y, cursor, rect))
            }
            InputEvent::PointerPressed {
                button: MouseButton::Left,
                position,
            } => {
                if !self.accepts_viewer_input() || !rect.contains(position) {
                    return EventStatus::Ignored;
                }
                EventStatus::from_handled(self.viewport.drag_start(position))
            }
            InputEvent::PointerPressed { .. } => EventStatus::Ignored,
            InputEvent::PointerMoved { position } => {
                EventStatus::from_handled(self.viewport.drag_move(position, rect))
            }
            InputEvent::PointerReleased { .. } => {
                if self.viewport.drag_end() {
                    log::trace!("Drag ended");
                }
                EventStatus::Ignored
            }
        }
    }

    fn on_key(&mut self, key: Key) -> EventStatus {
        let Some(action) = self.keybindings.action_for_key(key) else {
            return EventStatus::Ignored;
        };
        let modal_open = self.store.modal().is_open();

        let handled = match action {
            KeyAction::Close if modal_open => self.store.close_modal(),
            KeyAction::Close if self.viewport.is_open() => {
                self.close_viewer();
                true
            }
            KeyAction::Delete if !modal_open => match self.store.selected() {
                Some(id) => {
                    self.remove(id);
                    true
                }
                None => false,
            },
            KeyAction::EditInfo if !modal_open && self.viewport.is_open() => {
                self.open_edit_modal()
            }
            KeyAction::Save if modal_open => {
                self.store.save_modal();
                true
            }
            _ => false,
        };
        EventStatus::from_handled(handled)
    }

    /// Wheel and press only reach the viewer while it is open and uncovered.
    fn accepts_viewer_input(&self) -> bool {
        self.viewport.is_open() && !self.store.modal().is_open()
    }

    /// A modal covering the viewer ends any pan in progress.
    fn open_edit_modal(&mut self) -> bool {
        let opened = self.store.open_edit_modal();
        if opened {
            self.viewport.drag_end();
        }
        opened
    }

    fn select(&mut self, id: ItemId) {
        if self.store.select(id) {
            log::debug!("Opened item {}", id);
            self.viewport.open();
        } else {
            self.viewport.close();
        }
    }

    fn close_viewer(&mut self) {
        self.store.deselect();
        self.viewport.close();
    }

    fn remove(&mut self, id: ItemId) {
        let was_open = self.store.selected() == Some(id);
        if self.store.remove(id) && was_open {
            self.viewport.close();
        }
    }
}
