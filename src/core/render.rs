use super::config::{LinkConfig, ParticleShape, SimulationConfig};
use super::constants::TRAIL_DOT_SIZE;
use super::particle::{Particle, Rgba};
use glam::Vec2;

/// Minimal immediate-mode drawing surface in logical units.
///
/// The browser implements it over a Canvas 2D context; tests record calls.
pub trait DrawSink {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Opacity of trail entry `index` (0 = oldest) out of `len`; newer entries
/// are more opaque, all of them fainter than the particle itself.
#[inline]
pub fn trail_alpha(index: usize, len: usize, base_alpha: f32) -> f32 {
    base_alpha * (index + 1) as f32 / (len + 1) as f32
}

/// Opacity of a link between two particles `dist_sq` apart, fading linearly
/// to zero at the configured threshold.
#[inline]
pub fn link_alpha(dist_sq: f32, link: &LinkConfig) -> Option<f32> {
    if dist_sq >= link.max_distance_sq {
        return None;
    }
    Some((1.0 - dist_sq / link.max_distance_sq) * link.max_alpha)
}

/// Draw one frame: clear, then every particle (trail first), then links.
pub fn draw_frame<S: DrawSink + ?Sized>(
    sink: &mut S,
    particles: &[Particle],
    config: &SimulationConfig,
) {
    sink.clear(config.width, config.height);

    for p in particles {
        let len = p.trail.len();
        for (i, t) in p.trail.iter().enumerate() {
            let c = p.color.with_alpha(trail_alpha(i, len, p.color.a));
            sink.fill_rect(
                t.x - TRAIL_DOT_SIZE * 0.5,
                t.y - TRAIL_DOT_SIZE * 0.5,
                TRAIL_DOT_SIZE,
                TRAIL_DOT_SIZE,
                c,
            );
        }
        match config.shape {
            ParticleShape::Circle => sink.fill_circle(p.pos, p.radius, p.color),
            ParticleShape::Dash { width, height } => {
                let corner = p.pos - Vec2::new(width, height) * 0.5;
                sink.fill_rect(corner.x, corner.y, width, height, p.color);
            }
        }
    }

    if let Some(link) = config.links {
        draw_links(sink, particles, &link, config.color);
    }
}

// O(n^2); only used with small random fields
fn draw_links<S: DrawSink + ?Sized>(
    sink: &mut S,
    particles: &[Particle],
    link: &LinkConfig,
    rgb: [u8; 3],
) {
    for (a, pa) in particles.iter().enumerate() {
        for pb in &particles[a + 1..] {
            let d2 = pa.pos.distance_squared(pb.pos);
            if let Some(alpha) = link_alpha(d2, link) {
                sink.line(pa.pos, pb.pos, link.line_width, Rgba::new(rgb, alpha));
            }
        }
    }
}
