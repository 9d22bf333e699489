//! Gallery item data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a gallery item. Always strictly positive.
pub type ItemId = u64;

/// Opaque locator of image bytes (URI, object URL, handle).
///
/// The gallery never looks inside it; the presentation layer resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceLocator(String);

impl ResourceLocator {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceLocator {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<String> for ResourceLocator {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

/// An image in the gallery with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Unique identifier, assigned by the collection
    pub id: ItemId,
    /// Where the image bytes live
    pub resource: ResourceLocator,
    /// Free-text grouping label
    pub category: String,
    /// Display title
    pub title: String,
}

impl GalleryItem {
    /// Create a new item with the given ID, resource, title and category.
    pub fn new(
        id: ItemId,
        resource: impl Into<ResourceLocator>,
        title: &str,
        category: &str,
    ) -> Self {
        Self {
            id,
            resource: resource.into(),
            category: category.to_string(),
            title: title.to_string(),
        }
    }
}

/// Sample items shown before the user has added anything.
pub fn sample_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem::new(
            1,
            "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?w=1600&q=90",
            "Mountain Peak",
            "Nature",
        ),
        GalleryItem::new(
            2,
            "https://images.unsplash.com/photo-1506744038136-46273834b3fb?w=1600&q=90",
            "Valley Fog",
            "Landscape",
        ),
        GalleryItem::new(
            3,
            "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=1600&q=90",
            "Urban Style",
            "Portrait",
        ),
        GalleryItem::new(
            4,
            "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?w=1600&q=90",
            "Forest Mist",
            "Nature",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_items_have_unique_positive_ids() {
        let items = sample_items();
        let mut ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), items.len());
        assert!(ids.iter().all(|&id| id > 0));
    }

    #[test]
    fn test_locator_is_transparent_in_json() {
        let item = GalleryItem::new(7, "mem://1/cat.png", "Cat", "Pets");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["resource"], "mem://1/cat.png");
        assert_eq!(json["title"], "Cat");
    }
}
