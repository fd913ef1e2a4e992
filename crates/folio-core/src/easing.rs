use crate::constants::{BEZIER_EPSILON, BEZIER_NEWTON_ITERATIONS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `ease-out`: cubic-bezier(0, 0, 0.58, 1).
    EaseOut,
    /// CSS `ease-in-out`: cubic-bezier(0.42, 0, 0.58, 1).
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Long, soft landing used by hero and section headers.
    pub const EXPO_OUT: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);
    /// Slightly quicker landing used by research cards.
    pub const SOFT_OUT: Easing = Easing::CubicBezier(0.33, 1.0, 0.68, 1.0);

    /// Map linear progress `t` (clamped to `[0, 1]`) to eased progress.
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    pub fn from_name(name: &str) -> Option<Easing> {
        match name.trim() {
            "linear" => Some(Easing::Linear),
            "ease-out" | "easeOut" => Some(Easing::EaseOut),
            "ease-in-out" | "easeInOut" => Some(Easing::EaseInOut),
            "expo-out" => Some(Easing::EXPO_OUT),
            "soft-out" => Some(Easing::SOFT_OUT),
            _ => None,
        }
    }
}

// One-dimensional bezier with endpoints 0 and 1.
#[inline]
fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Evaluate a CSS cubic-bezier timing function at time `x`.
///
/// Solves `bezier_x(s) = x` with Newton's method, falling back to bisection when
/// the slope flattens out, then returns `bezier_y(s)`.
pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    // x control points outside [0, 1] make x(s) non-monotonic
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);

    let mut s = x;
    for _ in 0..BEZIER_NEWTON_ITERATIONS {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < BEZIER_EPSILON {
            return bezier(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    s = x;
    while hi - lo > BEZIER_EPSILON {
        let v = bezier(x1, x2, s);
        if (v - x).abs() < BEZIER_EPSILON {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier(y1, y2, s)
}
