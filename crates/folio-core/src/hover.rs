//! Hover motion: cards that lift under the pointer and hints that slide in
//! while hovered.

use crate::attrs::{parse_f64, parse_in_range, AttrError};
use crate::spring::{Spring, SpringConfig};
use glam::DVec2;

/// Resting and hovered pose of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverSpec {
    pub rest_offset: DVec2,
    pub hover_offset: DVec2,
    pub rest_opacity: f64,
    pub hover_opacity: f64,
}

impl Default for HoverSpec {
    fn default() -> Self {
        Self {
            rest_offset: DVec2::ZERO,
            hover_offset: DVec2::ZERO,
            rest_opacity: 1.0,
            hover_opacity: 1.0,
        }
    }
}

impl HoverSpec {
    /// Lift by `dy` px (negative is up) while hovered.
    pub fn lift(dy: f64) -> Self {
        Self {
            hover_offset: DVec2::new(0.0, dy),
            ..Self::default()
        }
    }

    /// Read `data-hover-x`/`-y` (hovered offset, px), `data-hover-rest-x`/`-y`
    /// (resting offset, px), `data-hover-opacity` and `data-hover-rest-opacity`
    /// (`0..=1`). Missing attributes keep their defaults.
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> Result<Self, AttrError> {
        let mut spec = HoverSpec::default();
        if let Some(v) = get("data-hover-x") {
            spec.hover_offset.x = parse_f64("data-hover-x", &v)?;
        }
        if let Some(v) = get("data-hover-y") {
            spec.hover_offset.y = parse_f64("data-hover-y", &v)?;
        }
        if let Some(v) = get("data-hover-rest-x") {
            spec.rest_offset.x = parse_f64("data-hover-rest-x", &v)?;
        }
        if let Some(v) = get("data-hover-rest-y") {
            spec.rest_offset.y = parse_f64("data-hover-rest-y", &v)?;
        }
        if let Some(v) = get("data-hover-opacity") {
            spec.hover_opacity = parse_in_range("data-hover-opacity", &v, 0.0, 1.0)?;
        }
        if let Some(v) = get("data-hover-rest-opacity") {
            spec.rest_opacity = parse_in_range("data-hover-rest-opacity", &v, 0.0, 1.0)?;
        }
        Ok(spec)
    }
}

/// Values to paint for one frame of hover motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverFrame {
    pub offset: DVec2,
    pub opacity: f64,
}

impl HoverFrame {
    pub const IDENTITY: HoverFrame = HoverFrame {
        offset: DVec2::ZERO,
        opacity: 1.0,
    };
}

/// Springs carrying an element between its resting and hovered pose.
#[derive(Clone, Copy, Debug)]
pub struct HoverMotion {
    spec: HoverSpec,
    x: Spring,
    y: Spring,
    opacity: Spring,
    hovered: bool,
}

impl HoverMotion {
    pub fn new(spec: HoverSpec) -> Self {
        Self::with_config(spec, SpringConfig::HOVER_LIFT)
    }

    pub fn with_config(spec: HoverSpec, config: SpringConfig) -> Self {
        Self {
            spec,
            x: Spring::new(spec.rest_offset.x, config),
            y: Spring::new(spec.rest_offset.y, config),
            opacity: Spring::new(spec.rest_opacity, config),
            hovered: false,
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
        self.retarget(self.spec.hover_offset, self.spec.hover_opacity);
    }

    pub fn on_pointer_leave(&mut self) {
        self.hovered = false;
        self.retarget(self.spec.rest_offset, self.spec.rest_opacity);
    }

    fn retarget(&mut self, offset: DVec2, opacity: f64) {
        self.x.set_target(offset.x);
        self.y.set_target(offset.y);
        self.opacity.set_target(opacity);
    }

    pub fn tick(&mut self, dt: f64) -> HoverFrame {
        self.x.tick(dt);
        self.y.tick(dt);
        self.opacity.tick(dt);
        self.frame()
    }

    pub fn frame(&self) -> HoverFrame {
        HoverFrame {
            offset: DVec2::new(self.x.current(), self.y.current()),
            opacity: self.opacity.current().clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn spec(&self) -> &HoverSpec {
        &self.spec
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Settled on the current pose; nothing left to paint.
    pub fn is_at_rest(&self) -> bool {
        [&self.x, &self.y, &self.opacity]
            .iter()
            .all(|s| s.is_at_rest() && s.current() == s.target())
    }
}
