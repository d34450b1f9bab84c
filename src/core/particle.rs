use glam::Vec2;
use smallvec::SmallVec;

/// Straight (non-premultiplied) color with a float opacity, as Canvas 2D expects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: a.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` string.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

pub type Trail = SmallVec<[Vec2; 4]>;

/// A point mass with a home it springs back to.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub base: Vec2,
    pub color: Rgba,
    pub radius: f32,
    pub trail: Trail,
}

impl Particle {
    /// A particle resting at its home with no velocity.
    pub fn at_rest(base: Vec2, color: Rgba, radius: f32) -> Self {
        Self {
            pos: base,
            vel: Vec2::ZERO,
            base,
            color,
            radius,
            trail: Trail::new(),
        }
    }

    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.pos - self.base
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Record `pos` in the trail, evicting the oldest entries beyond `cap`.
    pub fn push_trail(&mut self, pos: Vec2, cap: usize) {
        if cap == 0 {
            self.trail.clear();
            return;
        }
        self.trail.push(pos);
        if self.trail.len() > cap {
            let excess = self.trail.len() - cap;
            self.trail.drain(..excess);
        }
    }
}
