use crate::constants::{HOVER_SCALE_TARGET, MAGNETIC_STRENGTH};
use crate::rect::Rect;
use crate::spring::{Spring, SpringConfig};
use glam::DVec2;

/// Hover "pull" of an interactive element toward the pointer.
///
/// The pointer's offset from the element centre, scaled by `strength`, is the
/// target of two independent springs (one per axis). Leaving the element sends
/// both back to zero. A third spring carries the hover scale.
#[derive(Clone, Copy, Debug)]
pub struct MagneticOffset {
    x: Spring,
    y: Spring,
    scale: Spring,
    strength: f64,
}

impl Default for MagneticOffset {
    fn default() -> Self {
        Self::new(SpringConfig::MAGNETIC, MAGNETIC_STRENGTH)
    }
}

impl MagneticOffset {
    pub fn new(config: SpringConfig, strength: f64) -> Self {
        Self {
            x: Spring::new(0.0, config),
            y: Spring::new(0.0, config),
            scale: Spring::new(1.0, SpringConfig::HOVER_SCALE),
            strength,
        }
    }

    /// Returns false when `rect` has no area; targets are left alone then.
    pub fn on_pointer_move(&mut self, client: DVec2, rect: Rect) -> bool {
        let Some(offset) = magnetic_target(client, rect, self.strength) else {
            return false;
        };
        self.x.set_target(offset.x);
        self.y.set_target(offset.y);
        self.scale.set_target(HOVER_SCALE_TARGET);
        true
    }

    pub fn on_pointer_leave(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
        self.scale.set_target(1.0);
    }

    /// Advance all springs; returns the translation to paint.
    pub fn tick(&mut self, dt: f64) -> DVec2 {
        let x = self.x.tick(dt);
        let y = self.y.tick(dt);
        self.scale.tick(dt);
        DVec2::new(x, y)
    }

    #[inline]
    pub fn offset(&self) -> DVec2 {
        DVec2::new(self.x.current(), self.y.current())
    }

    #[inline]
    pub fn target(&self) -> DVec2 {
        DVec2::new(self.x.target(), self.y.target())
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale.current()
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest() && self.scale.is_at_rest()
    }
}

/// `(client - rect.center) * strength`, or `None` for a degenerate rect.
#[inline]
pub fn magnetic_target(client: DVec2, rect: Rect, strength: f64) -> Option<DVec2> {
    if !rect.has_area() || !client.is_finite() {
        return None;
    }
    let offset_x = client.x - rect.left - rect.width / 2.0;
    let offset_y = client.y - rect.top - rect.height / 2.0;
    Some(DVec2::new(offset_x, offset_y) * strength)
}
