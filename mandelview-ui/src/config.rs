//! Viewer configuration.
//!
//! Constants the core math is parameterized by: the pixel edge of the
//! square display surface and the address of the rendering service.

use mandelview_core::{Point, Viewport};

/// Configuration for a viewing session.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Pixel edge length of the square display surface. Must match the
    /// resolution the rendering service actually produces, or pointer
    /// offsets map to the wrong logical coordinates.
    pub image_size: u32,
    /// Base URL of the rendering service.
    pub server_url: String,
    /// Center of the initial view of the plane.
    pub default_center: (f64, f64),
    /// Logical span of the initial view.
    pub default_width: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_size: 1000,
            server_url: "http://localhost:9000".to_string(),
            default_center: (0.0, 0.0),
            default_width: 4.0,
        }
    }
}

impl ViewerConfig {
    /// Create the viewport shown before any interaction.
    pub fn default_viewport(&self) -> Viewport {
        let (cx, cy) = self.default_center;
        let half = self.default_width / 2.0;
        Viewport::new(
            Point::new(cx - half, cy + half),
            Point::new(cx + half, cy - half),
        )
    }
}
