//! Request encoding for the external rendering service.
//!
//! The core hands over a structured [`RenderRequest`]; this adapter owns
//! the wire format: the center as a complex-number literal `<x>+<y>i`,
//! percent-encoded, plus the logical width, as GET query parameters.

use mandelview_core::{Point, RenderRequest};

/// Formats a logical point as the service's complex literal, `<x>+<y>i`.
fn format_center(center: Point) -> String {
    format!("{}+{}i", center.x, center.y)
}

/// Builds the GET URL for a render of the requested region.
///
/// The service responds with a square image of the region centered on
/// `center` spanning `width` logical units.
pub fn render_url(server_url: &str, request: &RenderRequest) -> String {
    let center: String = js_sys::encode_uri_component(&format_center(request.center)).into();
    format!("{}?center={}&width={}", server_url, center, request.width)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn render_url_percent_encodes_the_plus_sign() {
        let request = RenderRequest {
            center: Point::new(0.0, 0.0),
            width: 2.6666666666666665,
        };
        let url = render_url("http://localhost:9000", &request);
        assert_eq!(
            url,
            "http://localhost:9000?center=0%2B0i&width=2.6666666666666665"
        );
    }

    #[wasm_bindgen_test]
    fn render_url_keeps_minus_signs_readable() {
        let request = RenderRequest {
            center: Point::new(-0.5, 0.25),
            width: 4.0,
        };
        let url = render_url("http://localhost:9000", &request);
        assert_eq!(url, "http://localhost:9000?center=-0.5%2B0.25i&width=4");
    }
}
