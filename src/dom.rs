use crate::core::SurfaceSize;
use wasm_bindgen::JsCast;
use web_sys as web;

const DATA_PREFIX: &str = "data-particles-";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {:?}", e))
}

/// Size the canvas for the current device pixel ratio and return a 2D
/// context whose units are logical pixels. `None` if no context is available.
pub fn setup_surface(
    canvas: &web::HtmlCanvasElement,
    logical_width: f32,
    logical_height: f32,
) -> Option<(web::CanvasRenderingContext2d, SurfaceSize)> {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let size = SurfaceSize::new(logical_width, logical_height, dpr);

    canvas.set_width(size.backing_width());
    canvas.set_height(size.backing_height());
    let style = canvas.style();
    _ = style.set_property("width", &size.css_width());
    _ = style.set_property("height", &size.css_height());

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    // resizing the backing store reset the transform; set rather than scale
    ctx.set_transform(size.dpr, 0.0, 0.0, size.dpr, 0.0, 0.0)
        .ok()?;
    Some((ctx, size))
}

/// `data-particles-*` attributes on `el`, with the prefix stripped.
pub fn data_overrides(el: &web::Element) -> Vec<(String, String)> {
    let names: js_sys::Array = el.get_attribute_names();
    names
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let key = name.strip_prefix(DATA_PREFIX)?.to_string();
            let value = el.get_attribute(&name)?;
            Some((key, value))
        })
        .collect()
}

/// Offset of a client-space point from the element's top-left corner, and
/// the element's on-screen size, in CSS pixels.
#[inline]
pub fn client_offset(el: &web::Element, client_x: i32, client_y: i32) -> (f32, f32, f32, f32) {
    let rect = el.get_bounding_client_rect();
    (
        client_x as f32 - rect.left() as f32,
        client_y as f32 - rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
