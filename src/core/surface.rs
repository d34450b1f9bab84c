/// Backing-store sizing for a fixed logical drawing box.
///
/// The canvas keeps its CSS size at the logical dimensions while its pixel
/// buffer is scaled by the device pixel ratio; drawing then happens in
/// logical units after scaling the context by the same ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub logical_width: f32,
    pub logical_height: f32,
    pub dpr: f64,
}

impl SurfaceSize {
    pub fn new(logical_width: f32, logical_height: f32, dpr: f64) -> Self {
        // some embedded browsers report 0 or NaN
        let dpr = if dpr.is_finite() && dpr > 0.0 {
            dpr
        } else {
            1.0
        };
        Self {
            logical_width,
            logical_height,
            dpr,
        }
    }

    #[inline]
    pub fn backing_width(&self) -> u32 {
        ((self.logical_width as f64 * self.dpr).round() as u32).max(1)
    }

    #[inline]
    pub fn backing_height(&self) -> u32 {
        ((self.logical_height as f64 * self.dpr).round() as u32).max(1)
    }

    pub fn css_width(&self) -> String {
        format!("{}px", self.logical_width)
    }

    pub fn css_height(&self) -> String {
        format!("{}px", self.logical_height)
    }

    /// Map an offset in CSS pixels from the element's top-left corner to
    /// logical units, given the element's current on-screen size. Stylesheets
    /// may shrink the canvas on narrow screens, so the two can differ.
    pub fn to_logical(&self, x_css: f32, y_css: f32, rect_w: f32, rect_h: f32) -> (f32, f32) {
        let sx = if rect_w > 0.0 {
            self.logical_width / rect_w
        } else {
            1.0
        };
        let sy = if rect_h > 0.0 {
            self.logical_height / rect_h
        } else {
            1.0
        };
        (x_css * sx, y_css * sy)
    }
}
