//! Data models for the gallery.

mod item;

pub use item::{GalleryItem, ItemId, ResourceLocator, sample_items};
