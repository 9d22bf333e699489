//! Commands issued by the presentation layer.
//!
//! All gallery actions are represented as messages in the Elm architecture style.

use crate::model::ItemId;
use crate::resource::Upload;

/// Messages that can be sent to update gallery state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Grid
    /// Open an item in the viewer
    Select(ItemId),
    /// An upload for a new item was picked; opens the add modal
    BeginAdd(Upload),

    // Viewer
    /// Close the viewer (close button, backdrop click)
    Deselect,
    /// Delete an item
    Remove(ItemId),
    /// Delete the open item
    RemoveSelected,
    /// Replace the image of the open item
    ReplaceImage(Upload),
    /// Open the metadata editor for the open item
    OpenEditModal,

    // Modal
    /// Draft title edited
    DraftTitleChanged(String),
    /// Draft category edited
    DraftCategoryChanged(String),
    /// Save the draft
    SaveModal,
    /// Discard the draft
    CloseModal,
}
