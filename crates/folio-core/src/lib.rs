//! Motion state for the portfolio page: springs, pointer glow, scroll progress,
//! magnetic buttons, hover lifts, entrance reveals and backdrop drift.
//!
//! Nothing here touches the DOM, so it builds and tests on the host. The web
//! frontend feeds it event data and paints the values it returns.

pub mod attrs;
pub mod constants;
pub mod drift;
pub mod easing;
pub mod glow;
pub mod hover;
pub mod magnetic;
pub mod rect;
pub mod reveal;
pub mod scroll;
pub mod spring;
pub mod style;

pub use attrs::AttrError;
pub use drift::{Drift, DriftFrame, KeyframeLoop, PathDrift, PathFrame};
pub use easing::Easing;
pub use glow::PointerGlowTracker;
pub use hover::{HoverFrame, HoverMotion, HoverSpec};
pub use magnetic::MagneticOffset;
pub use rect::Rect;
pub use reveal::{visible_fraction, Reveal, RevealFrame, RevealPhase, RevealSpec, RevealTrigger};
pub use scroll::{scroll_progress, ScrollProgressMapper, ScrollProgressSource, Subscription};
pub use spring::{step, Spring, SpringConfig, SpringState};
