//! Collection store: gallery items, selection and the add/edit modal draft.
//!
//! All mutations are total. Operations that reference an unknown item leave
//! the state untouched and report `false`; the presentation layer may hold a
//! stale id after a delete, so this is not treated as an error.
//!
//! Locators that stop being referenced (removed items, replaced images,
//! discarded add drafts) are queued as orphans for the host to release.

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_TITLE};
use crate::model::{GalleryItem, ItemId, ResourceLocator};

/// What saving the modal does with the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    /// Modal hidden; saving is a no-op
    #[default]
    Closed,
    /// Saving appends a new item built from the draft
    Add,
    /// Saving overwrites title and category of the selected item
    Edit,
}

impl ModalMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalMode::Closed)
    }
}

/// Scratch record edited while the modal is open. Has no identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub resource: ResourceLocator,
    pub title: String,
    pub category: String,
}

/// Ordered set of gallery items plus selection and modal state.
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    items: Vec<GalleryItem>,
    selected: Option<ItemId>,
    draft: Option<Draft>,
    modal: ModalMode,
    orphaned: Vec<ResourceLocator>,
}

impl CollectionStore {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection seeded with `items`.
    ///
    /// Items with a zero id or an id already seen are dropped.
    pub fn with_items(items: impl IntoIterator<Item = GalleryItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            if item.id == 0 {
                log::warn!("Dropping seed item '{}' with id 0", item.title);
                continue;
            }
            if store.contains(item.id) {
                log::warn!("Dropping seed item '{}' with duplicate id {}", item.title, item.id);
                continue;
            }
            store.items.push(item);
        }
        store
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&GalleryItem> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn modal(&self) -> ModalMode {
        self.modal
    }

    /// The draft being edited, while the modal is open.
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// The id the next added item will receive.
    ///
    /// One past the largest id in use. If that would overflow, the lowest
    /// unused positive id is handed out instead.
    pub fn next_id(&self) -> ItemId {
        match self.items.iter().map(|item| item.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).unwrap_or_else(|| self.lowest_free_id()),
        }
    }

    fn lowest_free_id(&self) -> ItemId {
        let mut used: Vec<ItemId> = self.items.iter().map(|item| item.id).collect();
        used.sort_unstable();
        let mut candidate = 1;
        for id in used {
            if id == candidate {
                candidate += 1;
            } else if id > candidate {
                break;
            }
        }
        candidate
    }

    /// Locators no longer referenced by any item or draft, oldest first.
    pub fn orphaned(&self) -> &[ResourceLocator] {
        &self.orphaned
    }

    /// Drain the orphaned locators.
    pub fn take_orphaned(&mut self) -> Vec<ResourceLocator> {
        std::mem::take(&mut self.orphaned)
    }

    /// Queue `locator` for release unless something still shows it.
    pub(crate) fn discard_resource(&mut self, locator: ResourceLocator) {
        let in_items = self.items.iter().any(|item| item.resource == locator);
        let in_draft = self.draft.as_ref().is_some_and(|d| d.resource == locator);
        if in_items || in_draft || self.orphaned.contains(&locator) {
            return;
        }
        log::debug!("Orphaned {}", locator);
        self.orphaned.push(locator);
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut GalleryItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Append a new item and return its id.
    ///
    /// Empty or missing title and category fall back to placeholders.
    pub fn add(
        &mut self,
        resource: ResourceLocator,
        title: Option<&str>,
        category: Option<&str>,
    ) -> ItemId {
        let id = self.next_id();
        let title = title.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TITLE);
        let category = category.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_CATEGORY);

        self.items.push(GalleryItem::new(id, resource, title, category));
        log::info!("Added item {} '{}' ({})", id, title, category);
        id
    }

    /// Select `id`. An unknown id clears the selection instead.
    ///
    /// Returns `true` if an item is selected afterwards.
    pub fn select(&mut self, id: ItemId) -> bool {
        if self.contains(id) {
            self.selected = Some(id);
            true
        } else {
            log::debug!("Select ignored: no item {}", id);
            self.selected = None;
            false
        }
    }

    /// Clear the selection. Returns `true` if something was selected.
    pub fn deselect(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Swap the image of the selected item.
    ///
    /// Only the currently selected item can have its image replaced. The
    /// previous image is orphaned; a rejected `resource` is orphaned itself.
    pub fn replace_image(&mut self, id: ItemId, resource: ResourceLocator) -> bool {
        if self.selected != Some(id) {
            log::debug!("Replace image ignored: item {} is not open", id);
            self.discard_resource(resource);
            return false;
        }
        let Some(item) = self.get_mut(id) else {
            self.discard_resource(resource);
            return false;
        };
        let previous = std::mem::replace(&mut item.resource, resource);
        log::info!("Replaced image of item {}", id);
        self.discard_resource(previous);
        true
    }

    /// Overwrite title and category of `id`, leaving its resource untouched.
    pub fn update_metadata(&mut self, id: ItemId, title: &str, category: &str) -> bool {
        let Some(item) = self.get_mut(id) else {
            log::debug!("Metadata update ignored: no item {}", id);
            return false;
        };
        item.title = title.to_string();
        item.category = category.to_string();
        log::info!("Updated metadata of item {}", id);
        true
    }

    /// Remove `id`, clearing the selection if it pointed there.
    ///
    /// Returns `true` if an item was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            log::debug!("Remove ignored: no item {}", id);
            return false;
        };
        let removed = self.items.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        log::info!("Removed item {}", id);
        self.discard_resource(removed.resource);
        true
    }

    /// Open the modal to add a new item showing `prefill` as its image.
    ///
    /// A draft already open is discarded.
    pub fn open_add_modal(&mut self, prefill: ResourceLocator) {
        let previous = self.draft.replace(Draft {
            resource: prefill,
            title: String::new(),
            category: String::new(),
        });
        self.modal = ModalMode::Add;
        if let Some(previous) = previous {
            self.discard_resource(previous.resource);
        }
    }

    /// Open the modal to edit the selected item. No-op without a selection.
    pub fn open_edit_modal(&mut self) -> bool {
        let Some(item) = self.selected_item() else {
            log::debug!("Edit modal ignored: nothing selected");
            return false;
        };
        self.draft = Some(Draft {
            resource: item.resource.clone(),
            title: item.title.clone(),
            category: item.category.clone(),
        });
        self.modal = ModalMode::Edit;
        true
    }

    /// Set the draft title. No-op while the modal is closed.
    pub fn set_draft_title(&mut self, title: impl Into<String>) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Set the draft category. No-op while the modal is closed.
    pub fn set_draft_category(&mut self, category: impl Into<String>) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.category = category.into();
                true
            }
            None => false,
        }
    }

    /// Hide the modal and discard the draft. Returns `true` if it was open.
    pub fn close_modal(&mut self) -> bool {
        let was_open = self.modal.is_open();
        self.modal = ModalMode::Closed;
        if let Some(draft) = self.draft.take() {
            self.discard_resource(draft.resource);
        }
        was_open
    }

    /// Apply the draft according to the modal mode, then close the modal.
    ///
    /// An edit save only writes title and category; the draft's resource is
    /// never written back, image replacement has its own operation.
    ///
    /// Returns the id of the item that was added or updated.
    pub fn save_modal(&mut self) -> Option<ItemId> {
        let mode = self.modal;
        let draft = self.draft.take().unwrap_or_default();

        let saved = match mode {
            ModalMode::Closed => return None,
            ModalMode::Add => Some(self.add(
                draft.resource,
                Some(draft.title.as_str()),
                Some(draft.category.as_str()),
            )),
            ModalMode::Edit => {
                let selected = self.selected;
                selected.filter(|&id| self.update_metadata(id, &draft.title, &draft.category))
            }
        };

        self.close_modal();
        saved
    }
}
