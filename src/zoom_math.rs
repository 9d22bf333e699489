//! Zoom-to-cursor and pan clamping mathematics.
//!
//! This module contains the pure functions behind the viewport engine,
//! extracted for testability. Offsets are measured in viewport pixels and
//! describe how far the scaled content is translated from the centered view.

use crate::constants::MIN_SCALE;
use crate::geometry::{Point, ViewportRect};

/// Scale and pan offset applied to the content of the open viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub offset: Point,
}

impl Transform {
    /// Create a new transform with the given scale and offset.
    pub fn new(scale: f32, offset: Point) -> Self {
        Self { scale, offset }
    }

    /// Create an identity transform (scale=1, centered).
    pub fn identity() -> Self {
        Self::new(MIN_SCALE, Point::zero())
    }

    /// Check if this is the un-zoomed, centered view.
    pub fn is_identity(&self) -> bool {
        self.scale == MIN_SCALE && self.offset.is_zero()
    }

    /// Calculate the zoom-to-cursor transformation.
    ///
    /// The content point under the cursor stays under the cursor:
    /// before scaling it sits at `(cursor - offset) / scale` in content space,
    /// after scaling it must map back to `cursor`, which gives
    /// `new_offset = cursor - (cursor - offset) * (new_scale / scale)`.
    ///
    /// # Arguments
    /// * `new_scale` - The new scale, already clamped by the caller
    /// * `cursor` - Cursor position relative to the viewport center
    ///
    /// # Returns
    /// A new Transform with the unclamped anchored offset.
    pub fn zoom_to_cursor(&self, new_scale: f32, cursor: Point) -> Transform {
        let ratio = new_scale / self.scale;

        Transform {
            scale: new_scale,
            offset: Point::new(
                cursor.x - (cursor.x - self.offset.x) * ratio,
                cursor.y - (cursor.y - self.offset.y) * ratio,
            ),
        }
    }

    /// Replace the offset, keeping the scale.
    pub fn with_offset(&self, offset: Point) -> Transform {
        Transform {
            scale: self.scale,
            offset,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Maximum pan displacement along each axis at `scale` inside `rect`.
///
/// Content grows symmetrically from its center, so it may be shifted by half
/// of the overflow in either direction before an edge comes into view.
pub fn max_offset(scale: f32, rect: ViewportRect) -> Point {
    if !rect.has_area() || !scale.is_finite() || scale <= MIN_SCALE {
        return Point::zero();
    }
    Point::new(
        (rect.width * scale - rect.width) / 2.0,
        (rect.height * scale - rect.height) / 2.0,
    )
}

/// Clamp an offset so the scaled content never reveals empty space.
///
/// Returns `(0, 0)` for a degenerate rectangle or a non-finite offset.
pub fn clamp_offset(offset: Point, scale: f32, rect: ViewportRect) -> Point {
    if !offset.x.is_finite() || !offset.y.is_finite() {
        return Point::zero();
    }
    let max = max_offset(scale, rect);
    Point::new(offset.x.clamp(-max.x, max.x), offset.y.clamp(-max.y, max.y))
}

/// Clamp a scale into `[MIN_SCALE, max_scale]`.
pub fn clamp_scale(scale: f32, max_scale: f32) -> f32 {
    scale.clamp(MIN_SCALE, max_scale.max(MIN_SCALE))
}
