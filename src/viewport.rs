//! Viewport engine: zoom and pan state for the open gallery item.
//!
//! The engine is either `Closed` or `Open` with a [`Transform`]. Wheel events
//! zoom around the cursor, drag gestures pan, and every resulting offset is
//! clamped against the viewport rectangle measured for that event.

use crate::constants::{
    DEFAULT_MAX_SCALE, DEFAULT_SNAP_THRESHOLD, DEFAULT_WHEEL_SENSITIVITY, MIN_SCALE,
};
use crate::geometry::{Point, ViewportRect};
use crate::zoom_math::{Transform, clamp_offset, clamp_scale};

/// Tunables for wheel zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    /// Scale change per wheel delta unit
    pub wheel_sensitivity: f32,
    /// Upper bound of the scale domain (lower bound is always 1)
    pub max_scale: f32,
    /// Wheel zooms landing at or below this scale recenter the view
    pub snap_threshold: f32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            max_scale: DEFAULT_MAX_SCALE,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

/// An armed click-drag pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Pointer position when the gesture started
    pub pointer_down: Point,
    /// Offset snapshot taken when the gesture started
    pub offset_at_start: Point,
}

/// State of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewportState {
    /// No item is open; input is ignored.
    #[default]
    Closed,
    /// An item is open.
    Open {
        transform: Transform,
        drag: Option<DragGesture>,
    },
}

/// Owns the zoom level and pan offset of the open item.
#[derive(Debug, Clone, Default)]
pub struct ViewportEngine {
    state: ViewportState,
    settings: ZoomSettings,
}

impl ViewportEngine {
    /// Create a closed engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a closed engine with custom zoom settings.
    pub fn with_settings(settings: ZoomSettings) -> Self {
        Self {
            state: ViewportState::Closed,
            settings,
        }
    }

    pub fn settings(&self) -> ZoomSettings {
        self.settings
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewportState::Open { .. })
    }

    /// Current transform, or `None` while closed.
    pub fn transform(&self) -> Option<Transform> {
        match self.state {
            ViewportState::Open { transform, .. } => Some(transform),
            ViewportState::Closed => None,
        }
    }

    /// Current scale; identity while closed.
    pub fn scale(&self) -> f32 {
        self.transform().map_or(MIN_SCALE, |t| t.scale)
    }

    /// Current offset; centered while closed.
    pub fn offset(&self) -> Point {
        self.transform().map_or(Point::zero(), |t| t.offset)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ViewportState::Open { drag: Some(_), .. })
    }

    /// Open (or re-open) the viewport at the identity transform.
    pub fn open(&mut self) {
        log::debug!("Viewport opened");
        self.state = ViewportState::Open {
            transform: Transform::identity(),
            drag: None,
        };
    }

    /// Close the viewport, discarding any in-progress drag gesture.
    pub fn close(&mut self) {
        if self.is_open() {
            log::debug!("Viewport closed");
        }
        self.state = ViewportState::Closed;
    }

    /// Reset to the identity transform and drop the drag gesture.
    /// Has no effect while closed.
    pub fn reset(&mut self) {
        if let ViewportState::Open { transform, drag } = &mut self.state {
            *transform = Transform::identity();
            *drag = None;
        }
    }

    /// Apply a wheel zoom anchored at `cursor` (relative to the viewport center).
    ///
    /// Returns `true` if the event was consumed, which is the case for every
    /// finite delta while open; the host must then suppress default scrolling.
    pub fn wheel_zoom(&mut self, delta_y: f32, cursor: Point, rect: ViewportRect) -> bool {
        let settings = self.settings;
        let ViewportState::Open { transform, .. } = &mut self.state else {
            return false;
        };
        if !delta_y.is_finite() {
            log::debug!("Ignoring non-finite wheel delta");
            return false;
        }

        let new_scale = clamp_scale(
            transform.scale - delta_y * settings.wheel_sensitivity,
            settings.max_scale,
        );
        let anchored = transform.zoom_to_cursor(new_scale, cursor);

        let offset = if new_scale <= settings.snap_threshold {
            Point::zero()
        } else {
            clamp_offset(anchored.offset, new_scale, rect)
        };

        *transform = Transform::new(new_scale, offset);
        log::trace!(
            "Wheel zoom: scale={:.3} offset=({:.1}, {:.1})",
            new_scale,
            offset.x,
            offset.y
        );
        true
    }

    /// Arm a drag gesture at `pointer`. Only possible while zoomed in.
    ///
    /// Returns `true` if a gesture was armed.
    pub fn drag_start(&mut self, pointer: Point) -> bool {
        let ViewportState::Open { transform, drag } = &mut self.state else {
            return false;
        };
        if transform.scale <= MIN_SCALE {
            return false;
        }
        *drag = Some(DragGesture {
            pointer_down: pointer,
            offset_at_start: transform.offset,
        });
        log::trace!("Drag started at ({:.1}, {:.1})", pointer.x, pointer.y);
        true
    }

    /// Continue the armed drag gesture with the pointer now at `pointer`.
    ///
    /// Returns `true` if the offset was recomputed.
    pub fn drag_move(&mut self, pointer: Point, rect: ViewportRect) -> bool {
        let ViewportState::Open {
            transform,
            drag: Some(gesture),
        } = &mut self.state
        else {
            return false;
        };
        if transform.scale <= MIN_SCALE {
            return false;
        }

        let target = gesture.offset_at_start + (pointer - gesture.pointer_down);
        transform.offset = clamp_offset(target, transform.scale, rect);
        log::trace!(
            "Drag pan: offset=({:.1}, {:.1})",
            transform.offset.x,
            transform.offset.y
        );
        true
    }

    /// End the drag gesture, if any. Returns `true` if one was active.
    pub fn drag_end(&mut self) -> bool {
        match &mut self.state {
            ViewportState::Open { drag, .. } => drag.take().is_some(),
            ViewportState::Closed => false,
        }
    }
}
