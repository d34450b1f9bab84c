use super::constants::{POINTER_SENTINEL, TOUCH_MOUSE_GRACE_MS};
use glam::Vec2;

/// Last known pointer position in logical canvas units.
///
/// There is no "absent" state: a missing pointer is parked at a sentinel far
/// outside the canvas, where no configured radius can reach a particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl PointerState {
    pub const SENTINEL: Self = Self {
        pos: Vec2::new(POINTER_SENTINEL, POINTER_SENTINEL),
    };

    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pos = Vec2::new(x, y);
        } else {
            self.clear();
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::SENTINEL;
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        *self != Self::SENTINEL
    }
}

/// Drops the compatibility mouse events browsers emit after a tap.
///
/// They arrive after `touchend` and would park the pointer back on the tap
/// point; touch devices never send the `mouseleave` that would clear it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchGuard {
    last_touch_ms: Option<f64>,
}

impl TouchGuard {
    /// Note touch activity at event time `at_ms`.
    #[inline]
    pub fn touched(&mut self, at_ms: f64) {
        self.last_touch_ms = Some(at_ms);
    }

    /// Whether a mouse event at `at_ms` comes from a real mouse.
    pub fn admits_mouse(&self, at_ms: f64) -> bool {
        match self.last_touch_ms {
            None => true,
            Some(t) => at_ms - t > TOUCH_MOUSE_GRACE_MS,
        }
    }
}
