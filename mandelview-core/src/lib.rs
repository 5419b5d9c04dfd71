pub mod events;
pub mod interaction;
pub mod points;
pub mod viewport;

pub use events::{ScreenEvent, ZoomDirection};
pub use interaction::{handle_interaction, RenderRequest};
pub use points::Point;
pub use viewport::{Viewport, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
