use crate::color::Rgb;

// Shared simulation/visual tuning constants used by the core and its hosts.

// Pool
pub const TARGET_STARS: usize = 5000; // particles allocated at startup
pub const DEFAULT_SEED: u64 = 42;

// Per-particle random traits
pub const SPEED_MIN: f32 = 0.2;
pub const SPEED_MAX: f32 = 8.0;
pub const GROWTH_RATE_MAX: f32 = 0.5;
pub const LANE_COUNT: u32 = 14;
pub const LANE_DIVISOR: f32 = 11.0; // lanes 12 and 13 overshoot the +1 offset

// Size evolution
pub const SIZE_BASE_MIN: f32 = -3.0;
pub const SIZE_BASE_MAX: f32 = 3.0;
pub const SIZE_BASE_INIT_MIN: f32 = 0.2; // non-growing particles start in [0.2, 3]
pub const SIZE_AGE_LIMIT: u32 = 200; // size only evolves while age is below this
pub const SIZE_DRIFT: f32 = 0.2;
pub const SIZE_NOISE_PULL: f32 = 0.6;
pub const RENDER_SCALE_MIN: f32 = 0.2;
pub const RENDER_SCALE_SPAN: f32 = 1.8;

// Motion
pub const FLOW_NOISE_SCALE: f32 = 0.01;
pub const FLOW_NOISE_Y_PHASE: f32 = 200.0;
pub const DRIFT_PER_SPEED: f32 = 0.45; // constant rightward drift
pub const FREEDOM_LOOSE: f32 = 2.2; // jitter amplitude at zero influence
pub const FREEDOM_TIGHT: f32 = 0.45; // jitter amplitude at full influence
pub const ATTRACT_BASE: f32 = 0.1;
pub const ATTRACT_NARROW_GAIN: f32 = 0.8; // extra pull on narrow/tall viewports
pub const SPRING_DAMPING: f32 = 0.6;
pub const CURVE_HEIGHT_RATIO: f32 = 0.9;
pub const RECYCLE_MARGIN: f32 = 30.0;

// Viewport shape
pub const SCREEN_FACTOR_REF: f32 = 900.0;
pub const SCREEN_FACTOR_MIN: f32 = 0.65;
pub const SCREEN_FACTOR_MAX: f32 = 1.0;

// Noise phases advance per rendered frame
pub const Z_NOISE_PER_FRAME: f32 = 0.001;
pub const T_NOISE_PER_FRAME: f32 = 0.002;
pub const NOISE_OCTAVES: u32 = 2;
pub const NOISE_OCTAVES_MAX: u32 = 8;
pub const NOISE_PERSISTENCE: f64 = 0.5;

// Automatic intro sweep (milliseconds)
pub const SWEEP_DELAY_MS: f64 = 1000.0;
pub const SWEEP_DURATION_MS: f64 = 6000.0;

// Background
pub const GLOW_CENTER_X_DIVISOR: f32 = 6.5; // glow sits at (W / 6.5, H)
pub const GLOW_RADIUS_DIVISOR: f32 = 2.5; // largest disc radius is W / 2.5
pub const GLOW_RADIUS_STEP: f32 = 4.0;
pub const GLOW_ALPHA_MAX: f32 = 10.0; // out of 255

// Default palette
pub const STAR_COLOR: Rgb = Rgb::new(0xDF, 0xDC, 0xE1);
pub const GRADIENT_LOW: Rgb = Rgb::new(0x9E, 0x76, 0xFF); // bottom edge
pub const GRADIENT_HIGH: Rgb = Rgb::new(0xC0, 0xBB, 0xD1); // top edge
pub const GLOW_COLOR: Rgb = Rgb::new(245, 225, 225);
