/// DOM hooks and frame-loop tuning for the web frontend.
///
/// The page markup is static; these are the ids, selectors and attributes the
/// motion layer looks for when it attaches.
// Element ids
pub const GLOW_LAYER_ID: &str = "cursor-glow"; // fixed full-viewport layer painted with the gradient
pub const PROGRESS_BAR_ID: &str = "scroll-progress"; // fixed 2px bar scaled along X

// Selectors
pub const POINTER_ROOT_SELECTOR: &str = "main"; // container the glow percentages are relative to
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const DRIFT_SELECTOR: &str = "[data-drift]";
pub const DRIFT_PATH_SELECTOR: &str = "[data-drift-path]"; // SVG paths with a looping line-draw
pub const HOVER_SELECTOR: &str = "[data-hover]";

// Attributes
pub const MAGNETIC_STRENGTH_ATTR: &str = "data-magnetic"; // optional strength override, e.g. "0.4"
pub const HOVER_ATTR: &str = "data-hover";
pub const REVEAL_ATTR: &str = "data-reveal";

// Frame loop
// Largest step fed to springs and timelines; a tab returning from the
// background would otherwise jump straight to the end of every animation.
pub const MAX_FRAME_DT_SEC: f64 = 0.1;
pub const MIN_FRAME_DT_SEC: f64 = 0.0;

// Magnetic strength overrides are accepted within this range
pub const MAGNETIC_STRENGTH_MIN: f64 = 0.0;
pub const MAGNETIC_STRENGTH_MAX: f64 = 1.0;
