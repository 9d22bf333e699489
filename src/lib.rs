//! Vitrine - image gallery viewer core
//!
//! Framework-independent state for an image gallery: an ordered collection of
//! items with selection and an add/edit modal, and a full-screen viewer with
//! cursor-anchored wheel zoom and clamped drag panning. The host renders and
//! feeds input events; everything here is synchronous and in memory.

pub mod collection;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod gallery;
pub mod geometry;
pub mod keybindings;
pub mod message;
pub mod model;
pub mod resource;
pub mod subscription;
pub mod viewport;
pub mod zoom_math;

#[cfg(test)]
mod tests;

pub use collection::{CollectionStore, Draft, ModalMode};
pub use config::{ConfigError, LogLevel, ViewerConfig};
pub use error::GalleryError;
pub use event::{EventStatus, InputEvent, Key, MouseButton};
pub use gallery::Gallery;
pub use geometry::{Point, ViewportRect};
pub use message::Message;
pub use model::{GalleryItem, ItemId, ResourceLocator};
pub use resource::{MemoryResources, ResourceProvider, Upload};
pub use subscription::{Listener, SubscriptionDiff, SubscriptionTracker, Subscriptions};
pub use viewport::{ViewportEngine, ViewportState, ZoomSettings};
pub use zoom_math::Transform;
