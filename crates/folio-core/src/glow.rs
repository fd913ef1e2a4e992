use crate::constants::GLOW_INITIAL_PERCENT;
use crate::rect::Rect;
use glam::DVec2;

/// Pointer position as a percentage of a container, used as the origin of the
/// cursor-following radial gradient.
///
/// Positions outside the container are kept as-is (below 0 or above 100) so
/// the gradient origin slides past the visible edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerGlowTracker {
    position: DVec2,
    dirty: bool,
}

impl Default for PointerGlowTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerGlowTracker {
    pub fn new() -> Self {
        Self {
            position: DVec2::splat(GLOW_INITIAL_PERCENT),
            dirty: true,
        }
    }

    /// Back to the centre, as on mount.
    pub fn reset(&mut self) {
        self.position = DVec2::splat(GLOW_INITIAL_PERCENT);
        self.dirty = true;
    }

    /// Returns false (and leaves the position untouched) when `rect` has no area.
    pub fn on_pointer_move(&mut self, client: DVec2, rect: Rect) -> bool {
        match pointer_percent(client, rect) {
            Some(p) => {
                self.position = p;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Position if it changed since the last call, for style writes.
    pub fn take_changed(&mut self) -> Option<DVec2> {
        std::mem::take(&mut self.dirty).then_some(self.position)
    }
}

/// `(client - rect.origin) / rect.size * 100`, or `None` for a degenerate rect.
#[inline]
pub fn pointer_percent(client: DVec2, rect: Rect) -> Option<DVec2> {
    if !rect.has_area() || !client.is_finite() {
        return None;
    }
    let x = (client.x - rect.left) / rect.width * 100.0;
    let y = (client.y - rect.top) / rect.height * 100.0;
    Some(DVec2::new(x, y))
}
