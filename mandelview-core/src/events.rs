use serde::{Deserialize, Serialize};

/// Raw pointer input delivered by the event-binding layer.
///
/// Offsets are pixel distances from the top-left corner of the square
/// display surface. `wheel_delta` is the signed zoom signal: only its sign
/// matters, positive means zoom in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenEvent {
    pub offset_x: f64,
    pub offset_y: f64,
    pub wheel_delta: f64,
}

impl ScreenEvent {
    pub fn new(offset_x: f64, offset_y: f64, wheel_delta: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            wheel_delta,
        }
    }

    /// Direction of the zoom this event requests. A zero delta zooms out.
    pub fn zoom_direction(&self) -> ZoomDirection {
        if self.wheel_delta > 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        }
    }
}

/// Which way a wheel gesture moves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}
