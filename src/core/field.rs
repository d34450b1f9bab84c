//! Particle field construction.
//!
//! Image fields are built in two stages so the deterministic part can be
//! checked on its own: [`sample_seeds`] turns a pixel buffer into rest
//! positions and colors, then [`assemble`] scatters each particle around its
//! seed for the assembly effect.

use super::config::{FieldStrategy, SimulationConfig};
use super::constants::*;
use super::error::{SimError, SimResult};
use super::particle::{Particle, Rgba};
use glam::Vec2;
use rand::Rng;

/// Tightly packed RGBA8 pixels, row-major.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> SimResult<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(SimError::PixelBuffer {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// View the buffer as whole pixels.
    pub fn pixels(&self) -> &[[u8; 4]] {
        // length is checked in `new`, so the cast cannot fail
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels()
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// Size to downscale a `natural_w x natural_h` image to so it is
/// `target_width` wide with its aspect ratio kept.
pub fn downscaled_size(natural_w: u32, natural_h: u32, target_width: u32) -> SimResult<(u32, u32)> {
    if natural_w == 0 || natural_h == 0 {
        return Err(SimError::EmptyImage {
            width: natural_w,
            height: natural_h,
        });
    }
    let h = natural_h as f64 * target_width as f64 / natural_w as f64;
    Ok((target_width, (h.round() as u32).max(1)))
}

/// Mapping from sample-space pixel coordinates to logical canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldLayout {
    pub scale: f32,
    pub offset: Vec2,
}

impl FieldLayout {
    /// Uniform scale of `canvas_width / sample_width`, centered on the canvas.
    /// Each sample pixel maps to the middle of its cell.
    pub fn centered(sample_w: u32, sample_h: u32, canvas_w: f32, canvas_h: f32) -> Self {
        let scale = canvas_w / sample_w.max(1) as f32;
        let cell = Vec2::splat(scale * 0.5);
        let offset = Vec2::new(
            (canvas_w - sample_w as f32 * scale) * 0.5,
            (canvas_h - sample_h as f32 * scale) * 0.5,
        );
        Self {
            scale,
            offset: offset + cell,
        }
    }

    #[inline]
    pub fn map(&self, x: u32, y: u32) -> Vec2 {
        Vec2::new(x as f32, y as f32) * self.scale + self.offset
    }
}

/// Rest position and color derived from one admitted pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seed {
    pub base: Vec2,
    pub color: Rgba,
}

#[inline]
pub fn luminance(px: [u8; 4]) -> f32 {
    (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0
}

/// Opacity for a pixel of the given luminance: darker is more opaque.
#[inline]
pub fn luminance_alpha(lum: f32) -> f32 {
    (1.0 - lum / 255.0).max(MIN_ALPHA)
}

/// Extract particle seeds from a downscaled image.
///
/// Only pixels with alpha above `alpha_threshold` and luminance below
/// `brightness_threshold` are admitted; the result depends only on the
/// buffer and the configuration.
pub fn sample_seeds(pixels: &PixelBuffer, config: &SimulationConfig) -> Vec<Seed> {
    let FieldStrategy::Image {
        stride,
        alpha_threshold,
        brightness_threshold,
        ..
    } = config.field
    else {
        return Vec::new();
    };
    let stride = stride.max(1) as usize;
    let layout = FieldLayout::centered(
        pixels.width(),
        pixels.height(),
        config.width,
        config.height,
    );

    let mut seeds = Vec::new();
    for y in (0..pixels.height()).step_by(stride) {
        for x in (0..pixels.width()).step_by(stride) {
            let Some(px) = pixels.pixel(x, y) else {
                continue;
            };
            let lum = luminance(px);
            if px[3] <= alpha_threshold || lum >= brightness_threshold {
                continue;
            }
            seeds.push(Seed {
                base: layout.map(x, y),
                color: Rgba::new(config.color, luminance_alpha(lum)),
            });
        }
    }
    seeds
}

/// Turn seeds into particles displaced by up to `jitter` on each axis, at rest.
pub fn assemble<R: Rng + ?Sized>(seeds: &[Seed], jitter: f32, rng: &mut R) -> Vec<Particle> {
    seeds
        .iter()
        .map(|s| {
            let mut p = Particle::at_rest(s.base, s.color, DASH_WIDTH * 0.5);
            if jitter > 0.0 {
                p.pos += Vec2::new(
                    rng.gen_range(-jitter..=jitter),
                    rng.gen_range(-jitter..=jitter),
                );
            }
            p
        })
        .collect()
}

/// Build the full image field for `config`.
pub fn image_field<R: Rng + ?Sized>(
    pixels: &PixelBuffer,
    config: &SimulationConfig,
    rng: &mut R,
) -> Vec<Particle> {
    let jitter = match config.field {
        FieldStrategy::Image { jitter, .. } => jitter,
        FieldStrategy::Random { .. } => 0.0,
    };
    assemble(&sample_seeds(pixels, config), jitter, rng)
}

/// Scatter `count` particles uniformly across the canvas with small random
/// velocities and radii.
pub fn random_field<R: Rng + ?Sized>(
    count: usize,
    config: &SimulationConfig,
    rng: &mut R,
) -> Vec<Particle> {
    let color = Rgba::new(config.color, CONSTELLATION_ALPHA);
    (0..count)
        .map(|_| {
            let base = Vec2::new(
                rng.gen::<f32>() * config.width,
                rng.gen::<f32>() * config.height,
            );
            let radius = DOT_RADIUS_MIN + rng.gen::<f32>() * DOT_RADIUS_SPREAD;
            let mut p = Particle::at_rest(base, color, radius);
            p.vel = Vec2::new(
                (rng.gen::<f32>() - 0.5) * INITIAL_SPEED_SPREAD,
                (rng.gen::<f32>() - 0.5) * INITIAL_SPEED_SPREAD,
            );
            p
        })
        .collect()
}
