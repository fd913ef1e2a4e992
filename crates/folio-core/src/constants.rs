// Shared motion tuning constants used by the web frontend and host tests.

// Pointer glow
pub const GLOW_INITIAL_PERCENT: f64 = 50.0; // gradient origin before any pointer movement
pub const GLOW_RGBA: [f64; 4] = [122.0, 232.0, 255.0, 0.20];
pub const GLOW_FALLOFF_PERCENT: f64 = 60.0; // transparent stop of the radial gradient

// Magnetic buttons
pub const MAGNETIC_STRENGTH: f64 = 0.4; // fraction of the pointer-to-center offset applied
pub const HOVER_SCALE_TARGET: f64 = 1.03;

// Entrance animations
pub const REVEAL_DEFAULT_OFFSET_Y: f64 = 24.0; // px below final position
pub const REVEAL_DEFAULT_DURATION_SEC: f64 = 0.9;
pub const REVEAL_DEFAULT_AMOUNT: f64 = 0.3; // visible fraction that triggers an in-view reveal
pub const REVEAL_STAGGER_SEC: f64 = 0.08;

// Cubic-bezier solver
pub const BEZIER_NEWTON_ITERATIONS: usize = 8;
pub const BEZIER_EPSILON: f64 = 1e-7;
