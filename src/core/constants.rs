/// Simulation tuning constants.
///
/// Values mirror the hero-section designs the presets reproduce. Keeping them
/// here keeps the presets and the physics free of magic numbers.

// Surface
pub const LOGICAL_WIDTH: f32 = 400.0;
pub const LOGICAL_HEIGHT: f32 = 400.0;

// Pointer
pub const POINTER_SENTINEL: f32 = -1000.0; // far outside any canvas; never influences
pub const DISTANCE_EPSILON: f32 = 1e-4; // substituted for an exact zero distance
pub const TOUCH_MOUSE_GRACE_MS: f64 = 1000.0; // compat mouse events trail a touch by up to this

// Image sampling
pub const SAMPLE_WIDTH: u32 = 100; // downscaled width before pixel inspection
pub const SAMPLE_STRIDE: u32 = 2; // inspect every 2nd pixel in each axis
pub const ALPHA_THRESHOLD: u8 = 128; // pixels at or below are treated as transparent
pub const BRIGHTNESS_THRESHOLD: f32 = 240.0; // luminance at or above is background
pub const MIN_ALPHA: f32 = 0.2; // opacity floor for admitted pixels
pub const ASSEMBLY_JITTER: f32 = 25.0; // initial offset from the rest position

// Portrait kinematics
pub const PORTRAIT_FRICTION: f32 = 0.85;
pub const PORTRAIT_SPRING: f32 = 0.06;
pub const PORTRAIT_STRENGTH: f32 = 3.0;
pub const PORTRAIT_COLLIDER_RADIUS: f32 = 12.0;
pub const PORTRAIT_RADIUS: f32 = 50.0;
pub const PORTRAIT_BUFFER: f32 = 20.0;
pub const PORTRAIT_TRAIL_LEN: usize = 3;
pub const DASH_WIDTH: f32 = 2.0;
pub const DASH_HEIGHT: f32 = 1.0;
pub const TRAIL_DOT_SIZE: f32 = 1.0;

// Constellation (random field) kinematics
pub const CONSTELLATION_COUNT: usize = 80;
pub const CONSTELLATION_RADIUS: f32 = 100.0;
pub const CONSTELLATION_STRENGTH: f32 = 2.0;
pub const CONSTELLATION_FRICTION: f32 = 0.98;
pub const CONSTELLATION_ALPHA: f32 = 0.5;
pub const INITIAL_SPEED_SPREAD: f32 = 1.0; // initial velocity in [-0.5, 0.5) per axis
pub const DOT_RADIUS_MIN: f32 = 1.0;
pub const DOT_RADIUS_SPREAD: f32 = 2.0;

// Anti-stall stabilization
pub const STALL_SPEED: f32 = 0.2; // below this a small random kick is injected
pub const RUNAWAY_SPEED: f32 = 2.0; // above this velocity is halved
pub const STALL_KICK: f32 = 0.1; // kick spread per axis

// Proximity links
pub const LINK_MAX_DISTANCE_SQ: f32 = 6000.0;
pub const LINK_MAX_ALPHA: f32 = 0.2;
pub const LINK_LINE_WIDTH: f32 = 1.0;

// Trails
pub const MAX_TRAIL_LEN: usize = 8;

// Accent color (#64ffda)
pub const ACCENT_RGB: [u8; 3] = [100, 255, 218];
