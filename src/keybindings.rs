//! Customizable keybindings for the open viewer.
//!
//! This module maps key presses to viewer actions. Bindings are loaded from the
//! `keybindings` section of the configuration file.

use serde::{Deserialize, Serialize};

use crate::event::Key;

/// Actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Close the modal if one is open, otherwise close the viewer
    Close,
    /// Delete the open item
    Delete,
    /// Open the metadata editor for the open item
    EditInfo,
    /// Save the open modal
    Save,
}

/// Keybinding configuration for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Hotkey that closes the modal or the viewer
    #[serde(default = "default_close_viewer")]
    pub close_viewer: Key,
    /// Hotkey that deletes the open item (None = unbound)
    #[serde(default = "default_delete_item")]
    pub delete_item: Option<Key>,
    /// Hotkey that opens the metadata editor (None = unbound)
    #[serde(default = "default_edit_info")]
    pub edit_info: Option<Key>,
    /// Hotkey that saves the open modal (None = unbound)
    #[serde(default = "default_save_modal")]
    pub save_modal: Option<Key>,
}

fn default_close_viewer() -> Key {
    Key::Escape
}

fn default_delete_item() -> Option<Key> {
    Some(Key::Delete)
}

fn default_edit_info() -> Option<Key> {
    Some(Key::Char('i'))
}

fn default_save_modal() -> Option<Key> {
    Some(Key::Enter)
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            close_viewer: default_close_viewer(),
            delete_item: default_delete_item(),
            edit_info: default_edit_info(),
            save_modal: default_save_modal(),
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the action that corresponds to a key press, if any.
    /// Character keys match case-insensitively.
    pub fn action_for_key(&self, key: Key) -> Option<KeyAction> {
        let key = normalize(key);
        if key == normalize(self.close_viewer) {
            Some(KeyAction::Close)
        } else if self.delete_item.map(normalize) == Some(key) {
            Some(KeyAction::Delete)
        } else if self.edit_info.map(normalize) == Some(key) {
            Some(KeyAction::EditInfo)
        } else if self.save_modal.map(normalize) == Some(key) {
            Some(KeyAction::Save)
        } else {
            None
        }
    }
}

fn normalize(key: Key) -> Key {
    match key {
        Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Convert a Key to a display string.
pub fn key_to_string(key: Key) -> String {
    match key {
        Key::Char(c) => c.to_ascii_uppercase().to_string(),
        Key::Escape => "Esc".to_string(),
        Key::Enter => "Enter".to_string(),
        Key::Delete => "Del".to_string(),
        Key::Backspace => "Backspace".to_string(),
        Key::Tab => "Tab".to_string(),
        Key::Space => "Space".to_string(),
    }
}

/// Convert an optional Key to a display string.
pub fn optional_key_to_string(key: Option<Key>) -> String {
    match key {
        Some(k) => key_to_string(k),
        None => "-".to_string(),
    }
}
