//! Damped-spring value smoothing.
//!
//! A spring is an explicit `{current, velocity, target}` triple advanced by the
//! pure [`step`] function. The step evaluates the analytic solution of the damped
//! harmonic oscillator rather than integrating numerically, so advancing by
//! `dt` twice lands exactly where a single `2 * dt` step would (up to rounding).
//! That keeps frame-rate jitter from changing the trajectory.

/// Physical parameters plus rest thresholds for one spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Max distance from target that still counts as settled.
    pub rest_delta: f64,
    /// Max absolute velocity that still counts as settled.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Scroll progress bar smoothing (over-damped).
    pub const SCROLL_PROGRESS: SpringConfig = SpringConfig {
        stiffness: 120.0,
        damping: 25.0,
        mass: 0.7,
        rest_delta: 0.0005,
        rest_speed: 0.01,
    };

    /// Magnetic button pull, in CSS pixels (slightly under-damped).
    pub const MAGNETIC: SpringConfig = SpringConfig {
        stiffness: 320.0,
        damping: 26.0,
        mass: 0.6,
        rest_delta: 0.01,
        rest_speed: 0.1,
    };

    /// Hover scale-up of magnetic buttons, unitless scale factor.
    pub const HOVER_SCALE: SpringConfig = SpringConfig {
        stiffness: 200.0,
        damping: 18.0,
        mass: 0.6,
        rest_delta: 0.0005,
        rest_speed: 0.005,
    };

    /// Hover lift of cards and hover-revealed hints. Shared by px offsets and
    /// opacity, so the rest thresholds suit both.
    pub const HOVER_LIFT: SpringConfig = SpringConfig {
        stiffness: 300.0,
        damping: 35.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.01,
    };

    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }

    /// Undamped natural frequency `sqrt(k / m)` in rad/s.
    #[inline]
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// `c / (2 * sqrt(k * m))`: below 1 oscillates, 1 is critical, above 1 is over-damped.
    #[inline]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.stiffness.is_finite()
            && self.damping.is_finite()
            && self.mass.is_finite()
            && self.stiffness > 0.0
            && self.damping >= 0.0
            && self.mass > 0.0
    }
}

// Damping ratios this close to 1 use the critical branch; the other two branches
// divide by a vanishing frequency there.
const CRITICAL_EPS: f64 = 1e-6;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub current: f64,
    pub velocity: f64,
    pub target: f64,
}

impl SpringState {
    pub fn at(value: f64) -> Self {
        Self {
            current: value,
            velocity: 0.0,
            target: value,
        }
    }

    #[inline]
    pub fn is_at_rest(&self, config: &SpringConfig) -> bool {
        (self.target - self.current).abs() <= config.rest_delta
            && self.velocity.abs() <= config.rest_speed
    }

    fn settled(self) -> Self {
        Self {
            current: self.target,
            velocity: 0.0,
            target: self.target,
        }
    }
}

/// Closed-form displacement from target and velocity after `t` seconds, given
/// initial displacement `d0` and velocity `v0`.
pub fn displacement_at(d0: f64, v0: f64, t: f64, config: &SpringConfig) -> (f64, f64) {
    let omega = config.natural_frequency();
    let zeta = config.damping_ratio();

    if (zeta - 1.0).abs() < CRITICAL_EPS {
        let b = v0 + omega * d0;
        let decay = (-omega * t).exp();
        let d = decay * (d0 + b * t);
        let v = decay * (v0 - omega * b * t);
        (d, v)
    } else if zeta < 1.0 {
        let alpha = zeta * omega;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-alpha * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let b = (v0 + alpha * d0) / omega_d;
        let d = decay * (d0 * cos + b * sin);
        let v = decay * (v0 * cos - (alpha * v0 + omega * omega * d0) / omega_d * sin);
        (d, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c1 = (v0 - r2 * d0) / (r1 - r2);
        let c2 = d0 - c1;
        let e1 = (r1 * t).exp();
        let e2 = (r2 * t).exp();
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}

/// Advance a spring by `dt` seconds.
///
/// Non-positive or non-finite `dt` returns the state unchanged. An invalid
/// config snaps straight to the target. A state that ends within the rest
/// thresholds is snapped onto the target with zero velocity.
pub fn step(state: SpringState, dt: f64, config: &SpringConfig) -> SpringState {
    if !(dt.is_finite() && dt > 0.0) {
        return state;
    }
    if !config.is_valid() || state.is_at_rest(config) {
        return state.settled();
    }

    let (d, v) = displacement_at(state.current - state.target, state.velocity, dt, config);
    let next = SpringState {
        current: state.target + d,
        velocity: v,
        target: state.target,
    };
    if next.is_at_rest(config) {
        next.settled()
    } else {
        next
    }
}

/// A spring bundled with its config.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    state: SpringState,
    config: SpringConfig,
}

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            state: SpringState::at(initial),
            config,
        }
    }

    /// Retarget; velocity carries over so motion stays continuous.
    #[inline]
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.state.target = target;
        }
    }

    /// Teleport to `value` and stop.
    pub fn jump(&mut self, value: f64) {
        if value.is_finite() {
            self.state = SpringState::at(value);
        }
    }

    pub fn tick(&mut self, dt: f64) -> f64 {
        self.state = step(self.state, dt, &self.config);
        self.state.current
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.state.current
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.state.target
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    #[inline]
    pub fn state(&self) -> SpringState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.state.is_at_rest(&self.config)
    }
}
