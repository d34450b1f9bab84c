//! Per-frame kinematics.
//!
//! One frame is one unit of time: velocities are in logical units per frame
//! and positions advance with a plain Euler step. The update is
//! deterministic except for the optional anti-stall kick.

use super::config::{BoundaryPolicy, ForceDirection, ForcePolicy, SimulationConfig};
use super::constants::DISTANCE_EPSILON;
use super::particle::Particle;
use super::pointer::PointerState;
use glam::Vec2;
use rand::Rng;

/// Normalized force magnitude in `[0, 1]` at `dist` from the pointer, or
/// `None` when `dist` lies outside the influence region.
pub fn force_magnitude(policy: ForcePolicy, dist: f32) -> Option<f32> {
    match policy {
        ForcePolicy::Radius { radius } => (dist < radius).then(|| (radius - dist) / radius),
        ForcePolicy::ColliderBuffer {
            collider_radius,
            radius,
            buffer,
        } => {
            let outer = radius + buffer;
            if dist >= outer {
                None
            } else if dist <= collider_radius {
                Some(1.0)
            } else {
                Some((outer - dist) / (outer - collider_radius))
            }
        }
    }
}

/// Velocity change the pointer applies to a particle at `pos`, or `None`
/// when the particle is not influenced this frame.
pub fn pointer_force(pos: Vec2, pointer: &PointerState, config: &SimulationConfig) -> Option<Vec2> {
    if !pointer.is_present() {
        return None;
    }
    let away = pos - pointer.pos;
    let raw = away.length();
    let (dist, dir) = if raw > 0.0 {
        (raw, away / raw)
    } else {
        // coincident with the pointer: push along +x
        (DISTANCE_EPSILON, Vec2::X)
    };
    let magnitude = force_magnitude(config.force, dist)?;
    let sign = match config.direction {
        ForceDirection::Repel => 1.0,
        ForceDirection::Attract => -1.0,
    };
    Some(dir * (magnitude * config.strength * sign))
}

/// Advance one particle by one frame.
pub fn step_particle<R: Rng + ?Sized>(
    p: &mut Particle,
    pointer: &PointerState,
    config: &SimulationConfig,
    rng: &mut R,
) {
    let start = p.pos;

    // pointer force and spring-back are exclusive within a frame
    match pointer_force(p.pos, pointer, config) {
        Some(force) => p.vel += force,
        None => p.vel -= p.displacement() * config.spring,
    }

    p.vel *= config.friction;

    if let Some(s) = config.stabilization {
        let speed = p.speed();
        if speed < s.min_speed {
            p.vel += Vec2::new(
                (rng.gen::<f32>() - 0.5) * s.kick,
                (rng.gen::<f32>() - 0.5) * s.kick,
            );
        } else if speed > s.max_speed {
            p.vel *= 0.5;
        }
    }

    if config.trail_len > 0 {
        p.push_trail(start, config.trail_len);
    }

    p.pos += p.vel;

    if config.boundary == BoundaryPolicy::Bounce {
        if (p.pos.x < 0.0 && p.vel.x < 0.0) || (p.pos.x > config.width && p.vel.x > 0.0) {
            p.vel.x = -p.vel.x;
        }
        if (p.pos.y < 0.0 && p.vel.y < 0.0) || (p.pos.y > config.height && p.vel.y > 0.0) {
            p.vel.y = -p.vel.y;
        }
    }
}

/// Advance every particle by one frame.
pub fn step_field<R: Rng + ?Sized>(
    particles: &mut [Particle],
    pointer: &PointerState,
    config: &SimulationConfig,
    rng: &mut R,
) {
    for p in particles.iter_mut() {
        step_particle(p, pointer, config, rng);
    }
}
