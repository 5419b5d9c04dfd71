use serde::{Deserialize, Serialize};

/// A coordinate pair in the logical plane.
///
/// x increases rightward and y increases upward — the opposite of screen
/// pixel rows, which grow downward. When the plane is read as the complex
/// plane, `x` is the real part and `y` the imaginary part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
