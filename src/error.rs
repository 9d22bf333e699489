//! Error types for gallery operations.
//!
//! Only uploads can fail. Operations that name a missing item are silent
//! no-ops and never produce an error.

use thiserror::Error;

use crate::constants::INVALID_IMAGE_MESSAGE;

/// Errors surfaced to the user as a blocking message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// Upload declared a content type outside the image family
    #[error("{}", INVALID_IMAGE_MESSAGE)]
    InvalidInput {
        /// The rejected content type
        mime: String,
    },

    /// Upload bytes are not a recognizable image
    #[error("{}", INVALID_IMAGE_MESSAGE)]
    UnrecognizedImage {
        /// Name of the uploaded file
        name: String,
    },
}

impl GalleryError {
    /// Create an invalid input error for a content type.
    pub fn invalid_input(mime: impl Into<String>) -> Self {
        Self::InvalidInput { mime: mime.into() }
    }

    /// Create an unrecognized image error for an upload name.
    pub fn unrecognized_image(name: impl Into<String>) -> Self {
        Self::UnrecognizedImage { name: name.into() }
    }

    /// Message to show to the user.
    pub fn user_message(&self) -> &'static str {
        INVALID_IMAGE_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_facing() {
        let err = GalleryError::invalid_input("text/plain");
        assert_eq!(err.to_string(), INVALID_IMAGE_MESSAGE);

        let err = GalleryError::unrecognized_image("notes.txt");
        assert_eq!(err.to_string(), err.user_message());
    }
}
