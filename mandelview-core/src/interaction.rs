use crate::events::{ScreenEvent, ZoomDirection};
use crate::points::Point;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// Parameters for one re-render of the visible region.
///
/// A structured value at the core boundary; the transport adapter decides
/// how to encode it for the rendering service. The rendered image is
/// square, so the logical height is implied equal to `width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Logical coordinate to center the render on.
    pub center: Point,
    /// Logical span the rendered image should cover.
    pub width: f64,
}

/// Applies one wheel interaction to the viewport and derives the
/// re-render request for the region now visible.
///
/// The pixel offset is converted to a logical anchor, the viewport zooms
/// in or out around that anchor per the event's direction, and the
/// returned request carries the anchor plus the post-zoom width. The
/// viewport mutation is committed before the caller dispatches anything;
/// a failed dispatch never rolls it back.
pub fn handle_interaction(
    viewport: &mut Viewport,
    event: &ScreenEvent,
    image_size: u32,
) -> RenderRequest {
    let anchor = viewport.point_at(event, image_size);
    match event.zoom_direction() {
        ZoomDirection::In => viewport.zoom_in(anchor),
        ZoomDirection::Out => viewport.zoom_out(anchor),
    }
    RenderRequest {
        center: anchor,
        width: viewport.width(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_SIZE: u32 = 1000;
    const EPSILON: f64 = 1e-12;

    fn initial_viewport() -> Viewport {
        Viewport::new(Point::new(-2.0, 2.0), Point::new(2.0, -2.0))
    }

    #[test]
    fn zoom_in_event_shrinks_viewport_and_reports_anchor() {
        let mut viewport = initial_viewport();
        let event = ScreenEvent::new(500.0, 500.0, 120.0);

        let request = handle_interaction(&mut viewport, &event, IMAGE_SIZE);

        assert_eq!(request.center, Point::new(0.0, 0.0));
        assert!((request.width - 8.0 / 3.0).abs() < EPSILON);
        assert!((viewport.width() - 8.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn zoom_out_event_grows_viewport() {
        let mut viewport = initial_viewport();
        let event = ScreenEvent::new(500.0, 500.0, -120.0);

        let request = handle_interaction(&mut viewport, &event, IMAGE_SIZE);

        assert!((request.width - 6.0).abs() < EPSILON);
        assert!((viewport.width() - 6.0).abs() < EPSILON);
    }

    #[test]
    fn anchor_is_the_pointed_at_coordinate() {
        let mut viewport = initial_viewport();
        let event = ScreenEvent::new(750.0, 250.0, 120.0);
        let expected = viewport.point_at(&event, IMAGE_SIZE);

        let request = handle_interaction(&mut viewport, &event, IMAGE_SIZE);

        assert_eq!(request.center, expected);
        assert_eq!(request.center, Point::new(1.0, 1.0));
    }

    #[test]
    fn request_width_matches_post_zoom_viewport() {
        let mut viewport = initial_viewport();
        let event = ScreenEvent::new(100.0, 900.0, 53.0);

        let request = handle_interaction(&mut viewport, &event, IMAGE_SIZE);

        assert_eq!(request.width, viewport.width());
    }

    #[test]
    fn viewport_commits_even_if_request_is_dropped() {
        let mut viewport = initial_viewport();
        let event = ScreenEvent::new(500.0, 500.0, 120.0);

        drop(handle_interaction(&mut viewport, &event, IMAGE_SIZE));

        assert!((viewport.width() - 8.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn new_viewport_is_centered_on_anchor() {
        let mut viewport = initial_viewport();
        let event = ScreenEvent::new(250.0, 250.0, -120.0);

        let request = handle_interaction(&mut viewport, &event, IMAGE_SIZE);

        let center = viewport.center();
        assert!((center.x - request.center.x).abs() < EPSILON);
        assert!((center.y - request.center.y).abs() < EPSILON);
    }
}
