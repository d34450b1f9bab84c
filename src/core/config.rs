//! Simulation configuration.
//!
//! The hero canvas went through several designs (random constellation with
//! links, pixel-sampled portrait with trails, two force shapes). They are one
//! model here: every difference is a field of [`SimulationConfig`], chosen when
//! a session is built.

use super::constants::*;
use super::error::{SimError, SimResult};

/// How the particle field is generated.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldStrategy {
    /// Uniformly scattered free-roaming particles.
    Random { count: usize },
    /// Particles seeded from a downscaled reference image.
    Image {
        sample_width: u32,
        stride: u32,
        alpha_threshold: u8,
        brightness_threshold: f32,
        jitter: f32,
    },
}

/// Shape of the pointer's influence region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ForcePolicy {
    /// Linear falloff from full force at the pointer to zero at `radius`.
    Radius { radius: f32 },
    /// Full force inside `collider_radius`, linear falloff across the annulus
    /// out to `radius + buffer`, zero beyond.
    ColliderBuffer {
        collider_radius: f32,
        radius: f32,
        buffer: f32,
    },
}

impl ForcePolicy {
    /// Distance at which the force reaches zero.
    pub fn outer_radius(&self) -> f32 {
        match *self {
            ForcePolicy::Radius { radius } => radius,
            ForcePolicy::ColliderBuffer { radius, buffer, .. } => radius + buffer,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceDirection {
    Repel,
    Attract,
}

/// What happens when a particle leaves `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Particles may drift off-canvas.
    Open,
    /// The offending velocity component is inverted.
    Bounce,
}

/// Anti-stall heuristic for free-roaming fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stabilization {
    pub min_speed: f32,
    pub max_speed: f32,
    pub kick: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleShape {
    /// Filled circle using the particle's own radius.
    Circle,
    /// Short axis-aligned dash.
    Dash { width: f32, height: f32 },
}

/// Connecting lines between nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkConfig {
    pub max_distance_sq: f32,
    pub max_alpha: f32,
    pub line_width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: f32,
    pub height: f32,
    pub field: FieldStrategy,
    pub force: ForcePolicy,
    pub direction: ForceDirection,
    pub strength: f32,
    pub friction: f32,
    pub spring: f32,
    pub boundary: BoundaryPolicy,
    pub stabilization: Option<Stabilization>,
    pub trail_len: usize,
    pub shape: ParticleShape,
    pub links: Option<LinkConfig>,
    pub color: [u8; 3],
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::portrait()
    }
}

impl SimulationConfig {
    /// Pixel-sampled portrait that springs back into shape.
    pub fn portrait() -> Self {
        Self {
            width: LOGICAL_WIDTH,
            height: LOGICAL_HEIGHT,
            field: FieldStrategy::Image {
                sample_width: SAMPLE_WIDTH,
                stride: SAMPLE_STRIDE,
                alpha_threshold: ALPHA_THRESHOLD,
                brightness_threshold: BRIGHTNESS_THRESHOLD,
                jitter: ASSEMBLY_JITTER,
            },
            force: ForcePolicy::ColliderBuffer {
                collider_radius: PORTRAIT_COLLIDER_RADIUS,
                radius: PORTRAIT_RADIUS,
                buffer: PORTRAIT_BUFFER,
            },
            direction: ForceDirection::Repel,
            strength: PORTRAIT_STRENGTH,
            friction: PORTRAIT_FRICTION,
            spring: PORTRAIT_SPRING,
            boundary: BoundaryPolicy::Open,
            stabilization: None,
            trail_len: PORTRAIT_TRAIL_LEN,
            shape: ParticleShape::Dash {
                width: DASH_WIDTH,
                height: DASH_HEIGHT,
            },
            links: None,
            color: ACCENT_RGB,
        }
    }

    /// Free-roaming random dots joined by proximity lines.
    pub fn constellation() -> Self {
        Self {
            width: LOGICAL_WIDTH,
            height: LOGICAL_HEIGHT,
            field: FieldStrategy::Random {
                count: CONSTELLATION_COUNT,
            },
            force: ForcePolicy::Radius {
                radius: CONSTELLATION_RADIUS,
            },
            direction: ForceDirection::Repel,
            strength: CONSTELLATION_STRENGTH,
            friction: CONSTELLATION_FRICTION,
            spring: 0.0,
            boundary: BoundaryPolicy::Bounce,
            stabilization: Some(Stabilization {
                min_speed: STALL_SPEED,
                max_speed: RUNAWAY_SPEED,
                kick: STALL_KICK,
            }),
            trail_len: 0,
            shape: ParticleShape::Circle,
            links: Some(LinkConfig {
                max_distance_sq: LINK_MAX_DISTANCE_SQ,
                max_alpha: LINK_MAX_ALPHA,
                line_width: LINK_LINE_WIDTH,
            }),
            color: ACCENT_RGB,
        }
    }

    /// Look up a preset by name.
    pub fn variant(name: &str) -> SimResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "portrait" | "image" => Ok(Self::portrait()),
            "constellation" | "random" => Ok(Self::constellation()),
            other => Err(SimError::InvalidConfig(format!(
                "unknown variant `{other}`"
            ))),
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!(
                    "{name} must be positive, got {v}"
                )))
            }
        };
        positive("width", self.width)?;
        positive("height", self.height)?;
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "friction must be in (0, 1), got {}",
                self.friction
            )));
        }
        if !(self.spring.is_finite() && self.spring >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "spring must be non-negative, got {}",
                self.spring
            )));
        }
        if !self.strength.is_finite() {
            return Err(SimError::InvalidConfig("strength must be finite".into()));
        }
        match self.force {
            ForcePolicy::Radius { radius } => positive("radius", radius)?,
            ForcePolicy::ColliderBuffer {
                collider_radius,
                radius,
                buffer,
            } => {
                positive("radius", radius)?;
                if !(collider_radius.is_finite() && collider_radius >= 0.0) {
                    return Err(SimError::InvalidConfig(
                        "collider radius must be non-negative".into(),
                    ));
                }
                if !(buffer.is_finite() && buffer >= 0.0) {
                    return Err(SimError::InvalidConfig(
                        "buffer must be non-negative".into(),
                    ));
                }
                if collider_radius >= radius + buffer {
                    return Err(SimError::InvalidConfig(format!(
                        "collider radius {collider_radius} must be below outer radius {}",
                        radius + buffer
                    )));
                }
            }
        }
        if let FieldStrategy::Image {
            sample_width,
            stride,
            jitter,
            ..
        } = self.field
        {
            if sample_width == 0 || stride == 0 {
                return Err(SimError::InvalidConfig(
                    "sample width and stride must be non-zero".into(),
                ));
            }
            if !(jitter.is_finite() && jitter >= 0.0) {
                return Err(SimError::InvalidConfig(
                    "jitter must be non-negative".into(),
                ));
            }
        }
        if let Some(s) = self.stabilization {
            if !(s.min_speed >= 0.0 && s.max_speed > s.min_speed) {
                return Err(SimError::InvalidConfig(
                    "stabilization speeds must satisfy 0 <= min < max".into(),
                ));
            }
        }
        if self.trail_len > MAX_TRAIL_LEN {
            return Err(SimError::InvalidConfig(format!(
                "trail length {} exceeds {MAX_TRAIL_LEN}",
                self.trail_len
            )));
        }
        if let Some(l) = self.links {
            positive("link distance", l.max_distance_sq)?;
        }
        Ok(())
    }

    /// Apply a single string-keyed override such as `("radius", "80")`.
    ///
    /// The config is not re-validated here; call [`Self::validate`] once all
    /// overrides are in.
    pub fn apply_override(&mut self, key: &str, value: &str) -> SimResult<()> {
        let value = value.trim();
        match key {
            "variant" => *self = Self::variant(value)?,
            "radius" => {
                let r = parse_f32(key, value)?;
                match &mut self.force {
                    ForcePolicy::Radius { radius } => *radius = r,
                    ForcePolicy::ColliderBuffer { radius, .. } => *radius = r,
                }
            }
            "collider" => {
                let c = parse_f32(key, value)?;
                let outer = self.force.outer_radius();
                self.force = match self.force {
                    ForcePolicy::ColliderBuffer { radius, buffer, .. } => {
                        ForcePolicy::ColliderBuffer {
                            collider_radius: c,
                            radius,
                            buffer,
                        }
                    }
                    ForcePolicy::Radius { .. } => ForcePolicy::ColliderBuffer {
                        collider_radius: c,
                        radius: outer,
                        buffer: 0.0,
                    },
                };
            }
            "buffer" => {
                let b = parse_f32(key, value)?;
                match &mut self.force {
                    ForcePolicy::ColliderBuffer { buffer, .. } => *buffer = b,
                    ForcePolicy::Radius { .. } => {
                        return Err(SimError::InvalidConfig(
                            "buffer requires a collider force policy".into(),
                        ))
                    }
                }
            }
            "strength" => self.strength = parse_f32(key, value)?,
            "friction" => self.friction = parse_f32(key, value)?,
            "spring" => self.spring = parse_f32(key, value)?,
            "direction" => {
                self.direction = match value {
                    "repel" => ForceDirection::Repel,
                    "attract" => ForceDirection::Attract,
                    _ => return Err(bad_value(key, value)),
                }
            }
            "boundary" => {
                self.boundary = match value {
                    "open" => BoundaryPolicy::Open,
                    "bounce" => BoundaryPolicy::Bounce,
                    _ => return Err(bad_value(key, value)),
                }
            }
            "trail" => {
                self.trail_len = value.parse().map_err(|_| bad_value(key, value))?;
            }
            "count" => match &mut self.field {
                FieldStrategy::Random { count } => {
                    *count = value.parse().map_err(|_| bad_value(key, value))?
                }
                FieldStrategy::Image { .. } => {
                    return Err(SimError::InvalidConfig(
                        "count only applies to a random field".into(),
                    ))
                }
            },
            "stride" | "jitter" => match &mut self.field {
                FieldStrategy::Image { stride, jitter, .. } => {
                    if key == "stride" {
                        *stride = value.parse().map_err(|_| bad_value(key, value))?;
                    } else {
                        *jitter = parse_f32(key, value)?;
                    }
                }
                FieldStrategy::Random { .. } => {
                    return Err(SimError::InvalidConfig(format!(
                        "{key} only applies to an image field"
                    )))
                }
            },
            "links" => {
                self.links = match value {
                    "on" | "true" => Some(LinkConfig {
                        max_distance_sq: LINK_MAX_DISTANCE_SQ,
                        max_alpha: LINK_MAX_ALPHA,
                        line_width: LINK_LINE_WIDTH,
                    }),
                    "off" | "false" => None,
                    _ => return Err(bad_value(key, value)),
                }
            }
            _ => return Err(SimError::UnknownOverride(key.to_string())),
        }
        Ok(())
    }

    /// Build a config from a base preset plus overrides, collecting the ones
    /// that were rejected. A `variant` key is applied first regardless of its
    /// position. If the result fails validation the base preset is returned.
    pub fn with_overrides<'a, I>(base: Self, pairs: I) -> (Self, Vec<SimError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
        pairs.sort_by_key(|(k, _)| *k != "variant");

        let mut errors = Vec::new();
        let mut cfg = base.clone();
        for (k, v) in pairs {
            if let Err(e) = cfg.apply_override(k, v) {
                errors.push(e);
            }
        }
        match cfg.validate() {
            Ok(()) => (cfg, errors),
            Err(e) => {
                errors.push(e);
                (base, errors)
            }
        }
    }
}

fn parse_f32(key: &str, value: &str) -> SimResult<f32> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(bad_value(key, value)),
    }
}

fn bad_value(key: &str, value: &str) -> SimError {
    SimError::InvalidConfig(format!("bad value `{value}` for `{key}`"))
}
