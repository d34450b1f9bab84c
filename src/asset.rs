//! Reference image loading for pixel-sampled fields.

use crate::core::field::{downscaled_size, PixelBuffer};
use crate::core::SimError;
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Load `url`, downscale it off-screen to `target_width` (aspect kept) and
/// read back its RGBA pixels. Not retried on failure.
pub async fn load_pixels(url: &str, target_width: u32) -> Result<PixelBuffer, SimError> {
    fetch_downscaled(url, target_width)
        .await
        .map_err(|e| SimError::AssetLoad(format!("{url}: {e:#}")))
}

async fn fetch_downscaled(url: &str, target_width: u32) -> anyhow::Result<PixelBuffer> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("decode failed: {:?}", e))?;

    let (w, h) = downscaled_size(img.natural_width(), img.natural_height(), target_width)?;

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let scratch = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    scratch.set_width(w);
    scratch.set_height(h);
    let ctx = scratch
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context for scratch canvas"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!("draw failed: {:?}", e))?;
    // throws on a cross-origin taint
    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!("pixel readback failed: {:?}", e))?
        .data();

    Ok(PixelBuffer::new(w, h, data.0)?)
}
