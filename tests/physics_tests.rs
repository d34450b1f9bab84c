// Host-side tests for the per-frame update rule.

use glam::Vec2;
use portrait_particles::core::physics::{force_magnitude, pointer_force, step_field, step_particle};
use portrait_particles::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn accent(a: f32) -> Rgba {
    Rgba::new(constants::ACCENT_RGB, a)
}

/// Radius policy, no stabilization, open edges: fully deterministic.
fn plain_config(radius: f32) -> SimulationConfig {
    SimulationConfig {
        force: ForcePolicy::Radius { radius },
        stabilization: None,
        boundary: BoundaryPolicy::Open,
        links: None,
        ..SimulationConfig::constellation()
    }
}

fn pointer_at(x: f32, y: f32) -> PointerState {
    let mut p = PointerState::SENTINEL;
    p.set(x, y);
    p
}

/// Force on a particle at `pos` from a pointer at (100, 100).
fn push_on(pos: Vec2, cfg: &SimulationConfig) -> Vec2 {
    let pointer = pointer_at(100.0, 100.0);
    pointer_force(pos, &pointer, cfg).expect("inside radius")
}

#[test]
fn particle_at_rest_stays_put_without_pointer() {
    let cfg = SimulationConfig::portrait();
    let mut p = Particle::at_rest(Vec2::new(200.0, 200.0), accent(1.0), 1.0);
    step_particle(&mut p, &PointerState::SENTINEL, &cfg, &mut rng());
    assert_eq!(p.pos, Vec2::new(200.0, 200.0));
    assert_eq!(p.vel, Vec2::ZERO);
    assert!(p.displacement().length() < 1e-6);
}

#[test]
fn displaced_particle_springs_back_home() {
    let cfg = SimulationConfig::portrait();
    let mut r = rng();
    let mut p = Particle::at_rest(Vec2::new(200.0, 200.0), accent(1.0), 1.0);
    p.pos = Vec2::new(230.0, 180.0);
    for _ in 0..500 {
        step_particle(&mut p, &PointerState::SENTINEL, &cfg, &mut r);
    }
    let d = p.displacement();
    assert!(d.length() < 1e-3, "still {d:?} away");
    assert!(p.speed() < 1e-3);
}

#[test]
fn speed_strictly_decreases_without_forces() {
    let mut cfg = plain_config(100.0);
    cfg.spring = 0.0;
    let mut r = rng();
    let mut p = Particle::at_rest(Vec2::new(200.0, 200.0), accent(0.5), 2.0);
    p.vel = Vec2::new(1.5, -0.7);
    let mut prev = p.speed();
    for _ in 0..50 {
        step_particle(&mut p, &PointerState::SENTINEL, &cfg, &mut r);
        assert!(p.speed() < prev);
        prev = p.speed();
    }
}

#[test]
fn repulsion_points_away_from_pointer() {
    let cfg = plain_config(30.0);
    let f = push_on(Vec2::new(110.0, 100.0), &cfg);
    assert!(f.x > 0.0);
    assert_eq!(f.y, 0.0);

    let f = push_on(Vec2::new(100.0, 80.0), &cfg);
    assert!(f.y < 0.0);
}

#[test]
fn attraction_points_toward_pointer() {
    let mut cfg = plain_config(30.0);
    cfg.direction = ForceDirection::Attract;
    let f = push_on(Vec2::new(110.0, 100.0), &cfg);
    assert!(f.x < 0.0);
    assert_eq!(f.y, 0.0);
}

#[test]
fn radius_force_falls_off_monotonically_to_zero() {
    let policy = ForcePolicy::Radius { radius: 50.0 };
    let mut prev = f32::INFINITY;
    for i in 0..500 {
        let d = i as f32 * 0.1;
        let m = force_magnitude(policy, d).unwrap();
        assert!(m < prev, "not decreasing at d={d}");
        assert!((0.0..=1.0).contains(&m));
        prev = m;
    }
    assert!(force_magnitude(policy, 49.999).unwrap() < 1e-3);
    assert_eq!(force_magnitude(policy, 50.0), None);
    assert_eq!(force_magnitude(policy, 75.0), None);
}

#[test]
fn collider_buffer_force_is_full_inside_and_fades_across_annulus() {
    let policy = ForcePolicy::ColliderBuffer {
        collider_radius: 10.0,
        radius: 40.0,
        buffer: 10.0,
    };
    assert_eq!(policy.outer_radius(), 50.0);
    assert_eq!(force_magnitude(policy, 0.0), Some(1.0));
    assert_eq!(force_magnitude(policy, 10.0), Some(1.0));
    let edge = force_magnitude(policy, 10.001).unwrap();
    assert!((edge - 1.0).abs() < 1e-3);

    let mut prev = 1.0;
    for i in 1..400 {
        let d = 10.0 + i as f32 * 0.1;
        let m = force_magnitude(policy, d).unwrap();
        assert!(m < prev, "not decreasing at d={d}");
        prev = m;
    }
    assert!(force_magnitude(policy, 49.999).unwrap() < 1e-3);
    assert_eq!(force_magnitude(policy, 50.0), None);
}

#[test]
fn sentinel_pointer_never_influences_on_canvas_particles() {
    let policies = [
        ForcePolicy::Radius { radius: 10.0 },
        ForcePolicy::Radius { radius: 100.0 },
        ForcePolicy::Radius { radius: 300.0 },
        ForcePolicy::ColliderBuffer {
            collider_radius: 20.0,
            radius: 250.0,
            buffer: 150.0,
        },
    ];
    for force in policies {
        let cfg = SimulationConfig {
            force,
            ..SimulationConfig::portrait()
        };
        for gx in 0..=8 {
            for gy in 0..=8 {
                let pos = Vec2::new(gx as f32 * 50.0, gy as f32 * 50.0);
                assert_eq!(pointer_force(pos, &PointerState::SENTINEL, &cfg), None);
            }
        }
    }
}

#[test]
fn zero_distance_stays_finite_and_bounded() {
    let cfg = plain_config(30.0);
    let mut p = Particle::at_rest(Vec2::new(100.0, 100.0), accent(0.5), 2.0);
    step_particle(&mut p, &pointer_at(100.0, 100.0), &cfg, &mut rng());
    assert!(p.vel.is_finite());
    assert!(p.pos.is_finite());
    assert!(p.speed() <= cfg.strength + 1e-3);
    assert!(p.speed() > 0.0);
}

#[test]
fn influenced_frame_skips_spring() {
    let cfg = SimulationConfig {
        spring: 0.5,
        strength: 1.0,
        friction: 0.9,
        ..plain_config(30.0)
    };
    let mut p = Particle::at_rest(Vec2::new(300.0, 300.0), accent(0.5), 2.0);
    p.pos = Vec2::new(105.0, 100.0);
    step_particle(&mut p, &pointer_at(100.0, 100.0), &cfg, &mut rng());
    assert!(p.vel.x > 0.0);
    assert_eq!(p.vel.y, 0.0);
}

#[test]
fn bounce_reflects_outgoing_velocity_only_when_enabled() {
    let mut cfg = plain_config(100.0);
    cfg.spring = 0.0;
    cfg.boundary = BoundaryPolicy::Bounce;
    let mut p = Particle::at_rest(Vec2::new(399.0, 200.0), accent(0.5), 2.0);
    p.vel = Vec2::new(3.0, 0.0);
    step_particle(&mut p, &PointerState::SENTINEL, &cfg, &mut rng());
    assert!(p.pos.x > cfg.width);
    assert!(p.vel.x < 0.0);

    cfg.boundary = BoundaryPolicy::Open;
    let mut q = Particle::at_rest(Vec2::new(399.0, 200.0), accent(0.5), 2.0);
    q.vel = Vec2::new(3.0, 0.0);
    step_particle(&mut q, &PointerState::SENTINEL, &cfg, &mut rng());
    assert!(q.vel.x > 0.0);
}

#[test]
fn stabilization_kicks_stalled_and_halves_runaway_particles() {
    let cfg = SimulationConfig {
        boundary: BoundaryPolicy::Open,
        ..SimulationConfig::constellation()
    };
    let mut r = rng();

    let mut stalled = Particle::at_rest(Vec2::new(200.0, 200.0), accent(0.5), 2.0);
    step_particle(&mut stalled, &PointerState::SENTINEL, &cfg, &mut r);
    assert!(stalled.speed() > 0.0);
    assert!(stalled.speed() <= constants::STALL_KICK);

    let mut fast = Particle::at_rest(Vec2::new(200.0, 200.0), accent(0.5), 2.0);
    fast.vel = Vec2::new(5.0, 0.0);
    step_particle(&mut fast, &PointerState::SENTINEL, &cfg, &mut r);
    assert!((fast.vel.x - 5.0 * cfg.friction * 0.5).abs() < 1e-5);
}

#[test]
fn trail_is_capped_and_lags_the_particle() {
    let cfg = SimulationConfig::portrait();
    let mut r = rng();
    let mut p = Particle::at_rest(Vec2::new(200.0, 200.0), accent(1.0), 1.0);
    p.pos = Vec2::new(240.0, 200.0);
    let mut before = p.pos;
    for _ in 0..10 {
        before = p.pos;
        step_particle(&mut p, &PointerState::SENTINEL, &cfg, &mut r);
        assert!(p.trail.len() <= cfg.trail_len);
    }
    assert_eq!(p.trail.len(), cfg.trail_len);
    assert_eq!(*p.trail.last().unwrap(), before);
}

#[test]
fn step_field_updates_every_particle() {
    let cfg = SimulationConfig::portrait();
    let mut particles: Vec<Particle> = (0..5)
        .map(|i| {
            let home = Vec2::new(100.0 + i as f32 * 20.0, 200.0);
            let mut p = Particle::at_rest(home, accent(1.0), 1.0);
            p.pos += Vec2::new(10.0, 0.0);
            p
        })
        .collect();
    step_field(&mut particles, &PointerState::SENTINEL, &cfg, &mut rng());
    for p in &particles {
        assert!(p.vel.x < 0.0, "spring should pull back toward home");
    }
}
