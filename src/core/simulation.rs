use super::config::{FieldStrategy, SimulationConfig};
use super::error::{SimError, SimResult};
use super::field::{self, PixelBuffer};
use super::particle::Particle;
use super::physics;
use super::pointer::{PointerState, TouchGuard};
use super::render::{self, DrawSink};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Particle field, pointer and RNG for one mounted canvas.
pub struct Simulation {
    config: SimulationConfig,
    particles: Vec<Particle>,
    pointer: PointerState,
    touch_guard: TouchGuard,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimulationConfig, seed: u64) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            particles: Vec::new(),
            pointer: PointerState::SENTINEL,
            touch_guard: TouchGuard::default(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Whether the field is built from an image and must wait for one.
    pub fn needs_image(&self) -> bool {
        matches!(self.config.field, FieldStrategy::Image { .. })
    }

    /// Downscale target width for image fields.
    pub fn sample_width(&self) -> Option<u32> {
        match self.config.field {
            FieldStrategy::Image { sample_width, .. } => Some(sample_width),
            FieldStrategy::Random { .. } => None,
        }
    }

    /// Rebuild a random field. Image fields are left untouched.
    pub fn populate_random(&mut self) -> usize {
        if let FieldStrategy::Random { count } = self.config.field {
            let t0 = Instant::now();
            self.particles = field::random_field(count, &self.config, &mut self.rng);
            log::info!(
                "[field] random particles={} in {:.1}ms",
                self.particles.len(),
                t0.elapsed().as_secs_f64() * 1000.0
            );
        }
        self.particles.len()
    }

    /// Rebuild the field from downscaled reference pixels.
    pub fn populate_from_image(&mut self, pixels: &PixelBuffer) -> SimResult<usize> {
        if !self.needs_image() {
            return Err(SimError::InvalidConfig(
                "image supplied to a random field".into(),
            ));
        }
        let t0 = Instant::now();
        self.particles = field::image_field(pixels, &self.config, &mut self.rng);
        log::info!(
            "[field] sampled {}x{} -> particles={} in {:.1}ms",
            pixels.width(),
            pixels.height(),
            self.particles.len(),
            t0.elapsed().as_secs_f64() * 1000.0
        );
        Ok(self.particles.len())
    }

    /// Record a failed reference-image load. The field stays empty and
    /// frames keep running over it.
    pub fn image_failed(&mut self, err: &SimError) {
        log::error!("[field] {err}; portrait stays empty");
        self.particles.clear();
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.set(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.clear();
    }

    /// Mouse moved at event time `at_ms`; ignored right after touch input.
    pub fn mouse_moved(&mut self, x: f32, y: f32, at_ms: f64) {
        if self.touch_guard.admits_mouse(at_ms) {
            self.pointer_moved(x, y);
        }
    }

    pub fn touch_moved(&mut self, x: f32, y: f32, at_ms: f64) {
        self.touch_guard.touched(at_ms);
        self.pointer_moved(x, y);
    }

    /// Touch lifted or cancelled: the pointer goes back to the sentinel.
    pub fn touch_ended(&mut self, at_ms: f64) {
        self.touch_guard.touched(at_ms);
        self.pointer_left();
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        physics::step_field(
            &mut self.particles,
            &self.pointer,
            &self.config,
            &mut self.rng,
        );
    }

    pub fn render<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        render::draw_frame(sink, &self.particles, &self.config);
    }

    /// One animation frame: update, then draw.
    pub fn frame<S: DrawSink + ?Sized>(&mut self, sink: &mut S) {
        self.step();
        self.render(sink);
    }
}
