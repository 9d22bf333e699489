//! Uploads and the resource provider seam.
//!
//! The gallery only ever stores [`ResourceLocator`]s. Turning uploaded bytes
//! into a locator, and rejecting anything that is not an image, happens here
//! before an add or replace reaches the collection.

use std::collections::HashMap;

use crate::error::GalleryError;
use crate::model::ResourceLocator;

/// MIME prefix shared by every accepted upload.
const IMAGE_MIME_PREFIX: &str = "image/";

/// Check if a MIME type belongs to the image family.
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with(IMAGE_MIME_PREFIX)
}

/// An uploaded file after the provider has registered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Locator the presentation layer can display
    pub locator: ResourceLocator,
    /// Declared or detected content type
    pub mime: String,
}

impl Upload {
    pub fn new(locator: impl Into<ResourceLocator>, mime: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            mime: mime.into(),
        }
    }

    /// Accept the upload if its content type is an image type.
    pub fn validate(self) -> Result<ResourceLocator, GalleryError> {
        if is_image_mime(&self.mime) {
            Ok(self.locator)
        } else {
            log::warn!("Rejected upload {} with type '{}'", self.locator, self.mime);
            Err(GalleryError::invalid_input(self.mime))
        }
    }
}

/// Turns raw uploaded bytes into a locator plus content type.
pub trait ResourceProvider {
    /// Register `bytes` uploaded under `name`.
    fn provide(&mut self, name: &str, bytes: Vec<u8>) -> Result<Upload, GalleryError>;

    /// Drop a previously provided resource. Unknown locators are ignored.
    fn release(&mut self, locator: &ResourceLocator);
}

#[derive(Debug, Clone)]
struct StoredResource {
    mime: &'static str,
    bytes: Vec<u8>,
}

/// Volatile provider keeping upload bytes in memory under `mem://` locators.
///
/// The content type is detected from the bytes, not taken from the file name.
#[derive(Debug, Default)]
pub struct MemoryResources {
    resources: HashMap<ResourceLocator, StoredResource>,
    next_handle: u64,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes behind a locator, if it was provided here and not released.
    pub fn bytes(&self, locator: &ResourceLocator) -> Option<&[u8]> {
        self.resources.get(locator).map(|r| r.bytes.as_slice())
    }

    /// Detected content type of a locator.
    pub fn mime(&self, locator: &ResourceLocator) -> Option<&'static str> {
        self.resources.get(locator).map(|r| r.mime)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceProvider for MemoryResources {
    fn provide(&mut self, name: &str, bytes: Vec<u8>) -> Result<Upload, GalleryError> {
        let format = image::guess_format(&bytes).map_err(|e| {
            log::warn!("Upload '{}' is not a recognized image: {}", name, e);
            GalleryError::unrecognized_image(name)
        })?;
        let mime = format.to_mime_type();

        self.next_handle += 1;
        let locator = ResourceLocator::new(format!("mem://{}/{}", self.next_handle, name));
        log::debug!(
            "Stored upload '{}' as {} ({}, {} bytes)",
            name,
            locator,
            mime,
            bytes.len()
        );
        self.resources
            .insert(locator.clone(), StoredResource { mime, bytes });

        Ok(Upload::new(locator, mime))
    }

    fn release(&mut self, locator: &ResourceLocator) {
        if self.resources.remove(locator).is_some() {
            log::debug!("Released {}", locator);
        }
    }
}
