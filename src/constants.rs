//! Global constants for the gallery viewer

/// Scale of the identity transform (fit to viewport, no magnification).
pub const MIN_SCALE: f32 = 1.0;

/// Default maximum magnification reachable with the wheel.
pub const DEFAULT_MAX_SCALE: f32 = 4.0;

/// Default zoom change per wheel delta unit.
pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 0.001;

/// Scales at or below this value snap back to the centered view after a wheel zoom.
/// Absorbs floating point residue left by repeated zoom out steps.
pub const DEFAULT_SNAP_THRESHOLD: f32 = 1.01;

/// Title given to an added item when none was entered.
pub const DEFAULT_TITLE: &str = "New Capture";

/// Category given to an added item when none was entered.
pub const DEFAULT_CATEGORY: &str = "Upload";

/// Message shown to the user when an upload is not an image.
pub const INVALID_IMAGE_MESSAGE: &str = "Please select a valid image file (PNG, JPG, JPEG, WEBP)";
