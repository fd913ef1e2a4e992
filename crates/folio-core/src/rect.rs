use glam::DVec2;

/// Element bounds in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// False for elements that are not laid out yet (zero or NaN size); callers
    /// skip the update instead of dividing by zero.
    #[inline]
    pub fn has_area(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x > self.left && p.x < self.right() && p.y > self.top && p.y < self.bottom()
    }
}
