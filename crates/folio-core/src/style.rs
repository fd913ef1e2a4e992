//! CSS value formatting for the motion outputs.

use crate::constants::{GLOW_FALLOFF_PERCENT, GLOW_RGBA};
use crate::drift::{DriftFrame, PathFrame};
use glam::DVec2;

/// `radial-gradient(...)` centred on the glow position (in percent).
pub fn glow_gradient(position: DVec2) -> String {
    let [r, g, b, a] = GLOW_RGBA;
    format!(
        "radial-gradient(circle at {:.2}% {:.2}%, rgba({:.0}, {:.0}, {:.0}, {:.2}), transparent {:.0}%)",
        position.x, position.y, r, g, b, a, GLOW_FALLOFF_PERCENT
    )
}

pub fn progress_transform(progress: f64) -> String {
    format!("scaleX({:.4})", progress.clamp(0.0, 1.0))
}

pub fn translate_transform(offset: DVec2) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", offset.x, offset.y)
}

/// Magnetic buttons combine the pull with the hover scale.
pub fn magnetic_transform(offset: DVec2, scale: f64) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
        offset.x, offset.y, scale
    )
}

pub fn drift_transform(frame: DriftFrame) -> String {
    format!(
        "translate({:.2}%, {:.2}%) rotate({:.2}deg)",
        frame.x_percent, frame.y_percent, frame.rotate_deg
    )
}

pub fn opacity_value(opacity: f64) -> String {
    format!("{:.3}", opacity.clamp(0.0, 1.0))
}

/// `stroke-dasharray` for a path normalised to `pathLength="1"`: one dash of
/// the drawn length, then a gap covering the rest.
pub fn dash_array(frame: PathFrame) -> String {
    format!("{:.4} 1", frame.length.clamp(0.0, 1.0))
}

/// `stroke-dashoffset`; a positive path offset moves the dash forward.
pub fn dash_offset(frame: PathFrame) -> String {
    // adding zero turns -0.0 into 0.0
    format!("{:.4}", -frame.offset + 0.0)
}
