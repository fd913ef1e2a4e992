// Host-side tests for backdrop drift loops and CSS value formatting.

use folio_core::drift::sample_keyframes;
use folio_core::style::{
    dash_array, dash_offset, drift_transform, glow_gradient, magnetic_transform, opacity_value, progress_transform,
    translate_transform,
};
use folio_core::{AttrError, Drift, DriftFrame, Easing, KeyframeLoop, PathDrift, PathFrame};
use glam::DVec2;

#[test]
fn keyframes_are_evenly_spaced() {
    let frames = [0.0, 25.0, 0.0];
    assert_eq!(sample_keyframes(&frames, Easing::Linear, 0.0), 0.0);
    assert_eq!(sample_keyframes(&frames, Easing::Linear, 0.25), 12.5);
    assert_eq!(sample_keyframes(&frames, Easing::Linear, 0.5), 25.0);
    assert_eq!(sample_keyframes(&frames, Easing::Linear, 0.75), 12.5);
    assert_eq!(sample_keyframes(&frames, Easing::Linear, 1.0), 0.0);
    assert_eq!(sample_keyframes(&[], Easing::Linear, 0.5), 0.0);
    assert_eq!(sample_keyframes(&[7.0], Easing::Linear, 0.5), 7.0);
}

#[test]
fn loop_wraps_around_its_duration() {
    let mut lp = KeyframeLoop::new(&[0.0, -30.0, 0.0], 34.0, Easing::Linear).unwrap();
    assert_eq!(lp.sample(), 0.0);
    let half = lp.tick(17.0);
    assert!((half - -30.0).abs() < 1e-9);
    let wrapped = lp.tick(17.0 + 34.0 * 2.0);
    assert!(wrapped.abs() < 1e-9);
    // bad dt is ignored
    assert!((lp.tick(f64::NAN) - wrapped).abs() < 1e-12);
}

#[test]
fn loop_rejects_degenerate_input() {
    assert!(KeyframeLoop::new(&[1.0], 10.0, Easing::Linear).is_none());
    assert!(KeyframeLoop::new(&[0.0, 1.0], 0.0, Easing::Linear).is_none());
    assert!(KeyframeLoop::new(&[0.0, 1.0], f64::INFINITY, Easing::Linear).is_none());
}

#[test]
fn drift_from_attrs_builds_each_track() {
    let get = |name: &str| match name {
        "data-drift-x" => Some("-4, 6, -4".to_string()),
        "data-drift-y" => Some("-6,6,-6".to_string()),
        "data-drift-duration" => Some("24".to_string()),
        "data-drift-ease" => Some("ease-in-out".to_string()),
        _ => None,
    };
    let mut drift = Drift::from_attrs(get).unwrap();
    assert!(drift.rotate.is_none());
    assert!(!drift.is_empty());
    let f = drift.tick(12.0);
    assert_eq!(f.rotate_deg, 0.0);
    assert!((f.x_percent - 6.0).abs() < 1e-9);
    assert!((f.y_percent - 6.0).abs() < 1e-9);
}

#[test]
fn drift_from_attrs_reports_errors() {
    let err = Drift::from_attrs(|name: &str| {
        (name == "data-drift-rotate").then(|| "25".to_string())
    })
    .unwrap_err();
    assert_eq!(
        err,
        AttrError::TooFewKeyframes {
            attr: "data-drift-rotate"
        }
    );

    let err = Drift::from_attrs(|name: &str| {
        (name == "data-drift-duration").then(|| "0".to_string())
    })
    .unwrap_err();
    assert!(matches!(err, AttrError::OutOfRange { .. }));

    assert!(Drift::from_attrs(|_: &str| None).unwrap().is_empty());
}

#[test]
fn glow_gradient_matches_page_css() {
    assert_eq!(
        glow_gradient(DVec2::new(50.0, 50.0)),
        "radial-gradient(circle at 50.00% 50.00%, rgba(122, 232, 255, 0.20), transparent 60%)"
    );
    assert!(glow_gradient(DVec2::new(-12.5, 130.0)).contains("circle at -12.50% 130.00%"));
}

#[test]
fn transforms_format_as_css() {
    assert_eq!(progress_transform(0.5), "scaleX(0.5000)");
    assert_eq!(progress_transform(1.7), "scaleX(1.0000)");
    assert_eq!(progress_transform(-0.2), "scaleX(0.0000)");
    assert_eq!(
        translate_transform(DVec2::new(3.0, -1.5)),
        "translate3d(3.00px, -1.50px, 0)"
    );
    assert_eq!(
        magnetic_transform(DVec2::new(12.0, 0.0), 1.03),
        "translate3d(12.00px, 0.00px, 0) scale(1.0300)"
    );
    assert_eq!(
        drift_transform(DriftFrame {
            rotate_deg: 25.0,
            x_percent: -4.0,
            y_percent: 6.0
        }),
        "translate(-4.00%, 6.00%) rotate(25.00deg)"
    );
    assert_eq!(opacity_value(0.5), "0.500");
    assert_eq!(opacity_value(2.0), "1.000");
}

#[test]
fn signal_path_draws_in_and_restarts() {
    let get = |name: &str| match name {
        "data-drift-length" => Some("0, 1".to_string()),
        "data-drift-offset" => Some("0.25, 0".to_string()),
        "data-drift-duration" => Some("5.8".to_string()),
        "data-drift-ease" => Some("ease-in-out".to_string()),
        _ => None,
    };
    let mut path = PathDrift::from_attrs(get).unwrap();
    assert!(!path.is_empty());

    let start = path.tick(0.0);
    assert_eq!(start, PathFrame { length: 0.0, offset: 0.25 });

    let mid = path.tick(2.9);
    assert!((mid.length - 0.5).abs() < 1e-6, "{mid:?}");
    assert!((mid.offset - 0.125).abs() < 1e-6, "{mid:?}");

    // just before the loop ends the path is almost fully drawn, then it starts over
    let late = path.tick(2.9 - 0.01);
    assert!(late.length > 0.99 && late.offset < 0.01, "{late:?}");
    let wrapped = path.tick(0.02);
    assert!(wrapped.length < 0.01 && wrapped.offset > 0.24, "{wrapped:?}");
}

#[test]
fn signal_path_without_tracks_is_fully_drawn() {
    let mut path = PathDrift::from_attrs(|_: &str| None).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.tick(1.0), PathFrame::default());
    assert_eq!(PathFrame::default(), PathFrame { length: 1.0, offset: 0.0 });
}

#[test]
fn signal_path_rejects_single_keyframe() {
    let err = PathDrift::from_attrs(|name: &str| {
        (name == "data-drift-length").then(|| "1".to_string())
    })
    .unwrap_err();
    assert_eq!(err, AttrError::TooFewKeyframes { attr: "data-drift-length" });
}

#[test]
fn dash_values_for_normalised_path() {
    let f = PathFrame { length: 0.5, offset: 0.25 };
    assert_eq!(dash_array(f), "0.5000 1");
    assert_eq!(dash_offset(f), "-0.2500");
    let rest = PathFrame::default();
    assert_eq!(dash_array(rest), "1.0000 1");
    assert_eq!(dash_offset(rest), "0.0000");
}
