use crate::events::ScreenEvent;
use crate::points::Point;
use serde::{Deserialize, Serialize};

/// Multiplier applied to the visible span when zooming in.
pub const ZOOM_IN_FACTOR: f64 = 2.0 / 3.0;

/// Multiplier applied to the visible span when zooming out.
pub const ZOOM_OUT_FACTOR: f64 = 3.0 / 2.0;

/// The rectangular region of the logical plane currently on screen.
///
/// Defined by its top-left and bottom-right corners in logical
/// coordinates. Invariants, preserved by construction:
/// - `top_left.x < bottom_right.x` (positive width)
/// - `top_left.y > bottom_right.y` (positive height; y decreases downward
///   across the rectangle)
/// - width equals height, since the display surface is square
///
/// Exactly one viewport exists per display surface; it is the source of
/// truth for what is visible and is mutated in place by the zoom
/// operations for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Viewport {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        debug_assert!(top_left.x < bottom_right.x, "viewport width must be positive");
        debug_assert!(top_left.y > bottom_right.y, "viewport height must be positive");
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Visible span along the x axis. Strictly positive.
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    /// Visible span along the y axis. Strictly positive and numerically
    /// equal to `width()` at every observable instant.
    pub fn height(&self) -> f64 {
        self.top_left.y - self.bottom_right.y
    }

    /// Geometric center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            (self.top_left.x + self.bottom_right.x) / 2.0,
            (self.top_left.y + self.bottom_right.y) / 2.0,
        )
    }

    /// Maps a pixel offset within the display surface to a logical
    /// coordinate.
    ///
    /// The mapping is linear: pixel (0, 0) is exactly `top_left`, pixel
    /// (`image_size`, `image_size`) is exactly `bottom_right`. Offsets
    /// outside `[0, image_size)` are not rejected — the mapping
    /// extrapolates, and supplying in-bounds offsets is the caller's
    /// responsibility.
    pub fn point_at(&self, event: &ScreenEvent, image_size: u32) -> Point {
        let x_delta = event.offset_x / image_size as f64 * self.width();
        let y_delta = event.offset_y / image_size as f64 * self.height();
        Point::new(self.top_left.x + x_delta, self.top_left.y - y_delta)
    }

    /// Shrinks the visible span to two-thirds of its current size,
    /// recentered on `center`.
    pub fn zoom_in(&mut self, center: Point) {
        self.update_center(center, ZOOM_IN_FACTOR);
    }

    /// Grows the visible span to one-and-a-half times its current size,
    /// recentered on `center`.
    pub fn zoom_out(&mut self, center: Point) {
        self.update_center(center, ZOOM_OUT_FACTOR);
    }

    /// Replaces the rectangle with one of `width() * zoom_factor` span,
    /// centered on `center`.
    ///
    /// Both corners are replaced under the same exclusive borrow, so no
    /// observer can see a half-updated rectangle. A non-positive
    /// `zoom_factor` is a caller bug, never produced by the public zoom
    /// operations.
    fn update_center(&mut self, center: Point, zoom_factor: f64) {
        debug_assert!(zoom_factor > 0.0, "zoom factor must be positive");
        let half_width = self.width() / 2.0 * zoom_factor;
        self.top_left = Point::new(center.x - half_width, center.y + half_width);
        self.bottom_right = Point::new(center.x + half_width, center.y - half_width);
    }
}
