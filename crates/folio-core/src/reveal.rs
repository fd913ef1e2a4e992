//! Entrance animations: fade + slide in, either on mount or once enough of the
//! element scrolls into view.

use crate::attrs::{parse_bool, parse_f64, parse_in_range, AttrError};
use crate::constants::{
    REVEAL_DEFAULT_AMOUNT, REVEAL_DEFAULT_DURATION_SEC, REVEAL_DEFAULT_OFFSET_Y,
    REVEAL_STAGGER_SEC,
};
use crate::easing::Easing;
use crate::hover::HoverFrame;
use crate::rect::Rect;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealTrigger {
    OnMount,
    /// Start once `amount` of the element's area is inside the viewport. With
    /// `once == false` the element hides again after fully leaving it.
    InView { amount: f64, once: bool },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    /// Starting translation in px; the element slides from here to zero.
    pub from_offset: DVec2,
    /// Opacity the element fades up to.
    pub opacity: f64,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
    pub trigger: RevealTrigger,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            from_offset: DVec2::new(0.0, REVEAL_DEFAULT_OFFSET_Y),
            opacity: 1.0,
            duration: REVEAL_DEFAULT_DURATION_SEC,
            delay: 0.0,
            easing: Easing::EaseOut,
            trigger: RevealTrigger::InView {
                amount: REVEAL_DEFAULT_AMOUNT,
                once: true,
            },
        }
    }
}

impl RevealSpec {
    pub fn on_mount(self) -> Self {
        Self {
            trigger: RevealTrigger::OnMount,
            ..self
        }
    }

    /// Delay for the `index`-th item of a list, `step` seconds apart.
    pub fn staggered(self, index: usize, step: f64) -> Self {
        Self {
            delay: self.delay + index as f64 * step,
            ..self
        }
    }

    /// Build reveal settings from `data-reveal*` attributes. Missing attributes keep
    /// their defaults.
    ///
    /// | attribute | values |
    /// |---|---|
    /// | `data-reveal` | `view` (default), `mount` |
    /// | `data-reveal-x`, `data-reveal-y` | start offset in px |
    /// | `data-reveal-opacity` | final opacity `0..=1` |
    /// | `data-reveal-duration`, `data-reveal-delay` | seconds |
    /// | `data-reveal-amount` | visible fraction `0..=1` |
    /// | `data-reveal-once` | `true` / `false` |
    /// | `data-reveal-ease` | `linear`, `ease-out`, `ease-in-out`, `expo-out`, `soft-out` |
    /// | `data-reveal-index` | list position, adds `index * data-reveal-stagger` delay |
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> Result<Self, AttrError> {
        let mut spec = RevealSpec::default();

        if let Some(v) = get("data-reveal-x") {
            spec.from_offset.x = parse_f64("data-reveal-x", &v)?;
        }
        if let Some(v) = get("data-reveal-y") {
            spec.from_offset.y = parse_f64("data-reveal-y", &v)?;
        }
        if let Some(v) = get("data-reveal-opacity") {
            spec.opacity = parse_in_range("data-reveal-opacity", &v, 0.0, 1.0)?;
        }
        if let Some(v) = get("data-reveal-duration") {
            spec.duration = parse_in_range("data-reveal-duration", &v, 0.0, 60.0)?;
        }
        if let Some(v) = get("data-reveal-delay") {
            spec.delay = parse_in_range("data-reveal-delay", &v, 0.0, 60.0)?;
        }
        if let Some(v) = get("data-reveal-ease") {
            spec.easing = Easing::from_name(&v).ok_or_else(|| AttrError::UnknownKeyword {
                attr: "data-reveal-ease",
                value: v.clone(),
            })?;
        }
        if let Some(v) = get("data-reveal-index") {
            let index = parse_in_range("data-reveal-index", &v, 0.0, 1000.0)? as usize;
            let step = match get("data-reveal-stagger") {
                Some(s) => parse_in_range("data-reveal-stagger", &s, 0.0, 10.0)?,
                None => REVEAL_STAGGER_SEC,
            };
            spec = spec.staggered(index, step);
        }

        let trigger = get("data-reveal").unwrap_or_default();
        match trigger.trim() {
            "mount" => spec.trigger = RevealTrigger::OnMount,
            "" | "view" => {
                let mut amount = REVEAL_DEFAULT_AMOUNT;
                let mut once = true;
                if let Some(v) = get("data-reveal-amount") {
                    amount = parse_in_range("data-reveal-amount", &v, 0.0, 1.0)?;
                }
                if let Some(v) = get("data-reveal-once") {
                    once = parse_bool("data-reveal-once", &v)?;
                }
                spec.trigger = RevealTrigger::InView { amount, once };
            }
            other => {
                return Err(AttrError::UnknownKeyword {
                    attr: "data-reveal",
                    value: other.to_string(),
                })
            }
        }
        Ok(spec)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPhase {
    Waiting,
    /// `elapsed` counts from the trigger, including the delay.
    Running { elapsed: f64 },
    Done,
}

/// Values to paint for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub offset: DVec2,
}

impl RevealFrame {
    /// Layer hover motion on top: offsets add, opacities multiply.
    pub fn with_hover(self, hover: HoverFrame) -> RevealFrame {
        RevealFrame {
            opacity: (self.opacity * hover.opacity).clamp(0.0, 1.0),
            offset: self.offset + hover.offset,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Reveal {
    spec: RevealSpec,
    phase: RevealPhase,
}

impl Reveal {
    pub fn new(spec: RevealSpec) -> Self {
        let phase = match spec.trigger {
            RevealTrigger::OnMount => RevealPhase::Running { elapsed: 0.0 },
            RevealTrigger::InView { .. } => RevealPhase::Waiting,
        };
        Self { spec, phase }
    }

    #[inline]
    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }

    #[inline]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == RevealPhase::Done
    }

    /// True for in-view reveals that still react to visibility changes.
    pub fn wants_visibility(&self) -> bool {
        match self.spec.trigger {
            RevealTrigger::OnMount => false,
            RevealTrigger::InView { once: true, .. } => self.phase == RevealPhase::Waiting,
            RevealTrigger::InView { once: false, .. } => true,
        }
    }

    /// Feed the element's current visible fraction. Returns true if the phase changed.
    pub fn observe(&mut self, visible: f64) -> bool {
        let RevealTrigger::InView { amount, once } = self.spec.trigger else {
            return false;
        };
        let entered = if amount > 0.0 {
            visible >= amount
        } else {
            visible > 0.0
        };
        match self.phase {
            RevealPhase::Waiting if entered => {
                self.phase = RevealPhase::Running { elapsed: 0.0 };
                true
            }
            RevealPhase::Running { .. } | RevealPhase::Done if !once && visible <= 0.0 => {
                self.phase = RevealPhase::Waiting;
                true
            }
            _ => false,
        }
    }

    /// Advance by `dt` seconds. Returns true while the painted values may change.
    pub fn tick(&mut self, dt: f64) -> bool {
        let RevealPhase::Running { elapsed } = self.phase else {
            return false;
        };
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let elapsed = elapsed + dt;
        self.phase = if elapsed >= self.spec.delay + self.spec.duration {
            RevealPhase::Done
        } else {
            RevealPhase::Running { elapsed }
        };
        true
    }

    pub fn sample(&self) -> RevealFrame {
        let progress = match self.phase {
            RevealPhase::Waiting => 0.0,
            RevealPhase::Done => 1.0,
            RevealPhase::Running { elapsed } => {
                let local = elapsed - self.spec.delay;
                if local <= 0.0 {
                    0.0
                } else if self.spec.duration <= 0.0 {
                    1.0
                } else {
                    self.spec.easing.apply(local / self.spec.duration)
                }
            }
        };
        RevealFrame {
            opacity: (progress * self.spec.opacity).clamp(0.0, 1.0),
            offset: self.spec.from_offset * (1.0 - progress),
        }
    }
}

/// Fraction of `rect`'s area inside a `viewport_width` x `viewport_height`
/// viewport anchored at the origin. Zero for elements without area.
pub fn visible_fraction(rect: Rect, viewport_width: f64, viewport_height: f64) -> f64 {
    if !rect.has_area() || !(viewport_width > 0.0 && viewport_height > 0.0) {
        return 0.0;
    }
    let w = (rect.right().min(viewport_width) - rect.left.max(0.0)).max(0.0);
    let h = (rect.bottom().min(viewport_height) - rect.top.max(0.0)).max(0.0);
    ((w * h) / (rect.width * rect.height)).clamp(0.0, 1.0)
}
