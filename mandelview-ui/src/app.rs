use leptos::*;
use mandelview_core::{handle_interaction, RenderRequest, ScreenEvent};

use crate::config::ViewerConfig;
use crate::transport::render_url;

/// Root component: a square image of the visible region, re-requested
/// from the rendering service on every wheel gesture.
///
/// Owns the session's single viewport in a signal; the wheel handler is
/// the only writer, so each interaction is handled to completion before
/// the next one runs.
#[component]
pub fn App() -> impl IntoView {
    let config = ViewerConfig::default();
    let image_size = config.image_size;
    let server_url = config.server_url.clone();

    let initial = config.default_viewport();
    let initial_request = RenderRequest {
        center: initial.center(),
        width: initial.width(),
    };
    let initial_url = render_url(&server_url, &initial_request);

    let viewport = create_rw_signal(initial);
    let (image_url, set_image_url) = create_signal(initial_url);

    let on_wheel = move |ev: web_sys::WheelEvent| {
        // Keep the page from scrolling under the viewer.
        ev.prevent_default();

        // Browser deltaY is positive when scrolling down; the zoom signal
        // treats positive as "in", so the sign flips here.
        let event = ScreenEvent::new(
            ev.offset_x() as f64,
            ev.offset_y() as f64,
            -ev.delta_y(),
        );

        let mut vp = viewport.get_untracked();
        let request = handle_interaction(&mut vp, &event, image_size);
        log::debug!(
            "zoom anchored at ({}, {}), viewport width now {}",
            request.center.x,
            request.center.y,
            request.width
        );
        viewport.set(vp);

        // Fire-and-forget: swapping the src dispatches the render; the
        // viewport above is already committed whether or not it loads.
        set_image_url.set(render_url(&server_url, &request));
    };

    view! {
        <img
            id="viewport"
            width=image_size
            height=image_size
            src=image_url
            on:wheel=on_wheel
        />
    }
}
