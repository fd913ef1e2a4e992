//! Endless keyframe loops for the ambient backdrop blobs and line-drawn signals.

use crate::attrs::{parse_in_range, parse_list, AttrError};
use crate::easing::Easing;
use smallvec::SmallVec;

/// Keyframes spaced evenly over `duration` seconds, repeated forever. Each
/// segment between two keyframes is eased independently.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeLoop {
    keyframes: SmallVec<[f64; 4]>,
    duration: f64,
    easing: Easing,
    elapsed: f64,
}

impl KeyframeLoop {
    /// `None` for fewer than two keyframes or a non-positive duration.
    pub fn new(keyframes: &[f64], duration: f64, easing: Easing) -> Option<Self> {
        if keyframes.len() < 2 || !(duration.is_finite() && duration > 0.0) {
            return None;
        }
        Some(Self {
            keyframes: SmallVec::from_slice(keyframes),
            duration,
            easing,
            elapsed: 0.0,
        })
    }

    pub fn tick(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt) % self.duration;
        }
        self.sample()
    }

    pub fn sample(&self) -> f64 {
        sample_keyframes(&self.keyframes, self.easing, self.elapsed / self.duration)
    }
}

/// Value at loop position `t` in `[0, 1)` over evenly spaced keyframes.
pub fn sample_keyframes(keyframes: &[f64], easing: Easing, t: f64) -> f64 {
    match keyframes {
        [] => 0.0,
        [only] => *only,
        _ => {
            let segments = (keyframes.len() - 1) as f64;
            let pos = t.clamp(0.0, 1.0) * segments;
            let i = (pos.floor() as usize).min(keyframes.len() - 2);
            let local = easing.apply(pos - i as f64);
            let (a, b) = (keyframes[i], keyframes[i + 1]);
            a + (b - a) * local
        }
    }
}

/// Rotation (deg) and translation (% of own size) loops of one backdrop element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drift {
    pub rotate: Option<KeyframeLoop>,
    pub x: Option<KeyframeLoop>,
    pub y: Option<KeyframeLoop>,
}

/// One frame of drift output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriftFrame {
    pub rotate_deg: f64,
    pub x_percent: f64,
    pub y_percent: f64,
}

/// Shared `data-drift-duration` / `data-drift-ease` timing of an element's tracks.
fn loop_timing(get: &impl Fn(&str) -> Option<String>) -> Result<(f64, Easing), AttrError> {
    let duration = match get("data-drift-duration") {
        Some(v) => parse_in_range("data-drift-duration", &v, 0.1, 600.0)?,
        None => 24.0,
    };
    let easing = match get("data-drift-ease") {
        Some(v) => Easing::from_name(&v).ok_or_else(|| AttrError::UnknownKeyword {
            attr: "data-drift-ease",
            value: v.clone(),
        })?,
        None => Easing::Linear,
    };
    Ok((duration, easing))
}

fn track(
    get: &impl Fn(&str) -> Option<String>,
    attr: &'static str,
    duration: f64,
    easing: Easing,
) -> Result<Option<KeyframeLoop>, AttrError> {
    match get(attr) {
        Some(v) => Ok(KeyframeLoop::new(&parse_list(attr, &v)?, duration, easing)),
        None => Ok(None),
    }
}

fn advance(track: &mut Option<KeyframeLoop>, dt: f64) -> Option<f64> {
    track.as_mut().map(|t| t.tick(dt))
}

impl Drift {
    /// Parse `data-drift-rotate`, `data-drift-x`, `data-drift-y` (comma lists),
    /// `data-drift-duration` (seconds) and `data-drift-ease`.
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> Result<Self, AttrError> {
        let (duration, easing) = loop_timing(&get)?;
        Ok(Self {
            rotate: track(&get, "data-drift-rotate", duration, easing)?,
            x: track(&get, "data-drift-x", duration, easing)?,
            y: track(&get, "data-drift-y", duration, easing)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rotate.is_none() && self.x.is_none() && self.y.is_none()
    }

    pub fn tick(&mut self, dt: f64) -> DriftFrame {
        DriftFrame {
            rotate_deg: advance(&mut self.rotate, dt).unwrap_or(0.0),
            x_percent: advance(&mut self.x, dt).unwrap_or(0.0),
            y_percent: advance(&mut self.y, dt).unwrap_or(0.0),
        }
    }
}

/// Looping line-draw of an SVG path, as fractions of its length.
///
/// `length` is the drawn share of the path and `offset` how far the drawn
/// segment starts along it. The web layer normalises the path to
/// `pathLength="1"` so both map straight onto the stroke dash properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathDrift {
    pub length: Option<KeyframeLoop>,
    pub offset: Option<KeyframeLoop>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathFrame {
    pub length: f64,
    pub offset: f64,
}

impl Default for PathFrame {
    fn default() -> Self {
        Self {
            length: 1.0,
            offset: 0.0,
        }
    }
}

impl PathDrift {
    /// Parse `data-drift-length` and `data-drift-offset` (comma lists of path
    /// fractions) with the shared duration and easing attributes.
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> Result<Self, AttrError> {
        let (duration, easing) = loop_timing(&get)?;
        Ok(Self {
            length: track(&get, "data-drift-length", duration, easing)?,
            offset: track(&get, "data-drift-offset", duration, easing)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.length.is_none() && self.offset.is_none()
    }

    /// Missing tracks hold the fully drawn, unshifted path.
    pub fn tick(&mut self, dt: f64) -> PathFrame {
        let rest = PathFrame::default();
        PathFrame {
            length: advance(&mut self.length, dt)
                .unwrap_or(rest.length)
                .clamp(0.0, 1.0),
            offset: advance(&mut self.offset, dt).unwrap_or(rest.offset),
        }
    }
}
