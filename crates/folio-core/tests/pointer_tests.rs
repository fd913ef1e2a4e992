// Host-side tests for the pointer-driven effects: cursor glow and magnetic pull.

use folio_core::glow::pointer_percent;
use folio_core::magnetic::magnetic_target;
use folio_core::{MagneticOffset, PointerGlowTracker, Rect, SpringConfig};
use glam::DVec2;

const FRAME: f64 = 1.0 / 60.0;

fn page() -> Rect {
    Rect::new(0.0, -1200.0, 1280.0, 4800.0)
}

fn button() -> Rect {
    Rect::new(400.0, 300.0, 200.0, 48.0)
}

#[test]
fn glow_starts_centred() {
    let glow = PointerGlowTracker::new();
    assert_eq!(glow.position(), DVec2::new(50.0, 50.0));
    assert_eq!(PointerGlowTracker::default().position(), DVec2::new(50.0, 50.0));
}

#[test]
fn glow_inside_bounds_stays_within_percent_range() {
    let rect = Rect::new(20.0, 10.0, 300.0, 150.0);
    let mut glow = PointerGlowTracker::new();
    for i in 1..30 {
        for j in 1..30 {
            let client = DVec2::new(
                rect.left + rect.width * i as f64 / 30.0,
                rect.top + rect.height * j as f64 / 30.0,
            );
            assert!(rect.contains(client));
            assert!(glow.on_pointer_move(client, rect));
            let p = glow.position();
            assert!((0.0..=100.0).contains(&p.x), "x={}", p.x);
            assert!((0.0..=100.0).contains(&p.y), "y={}", p.y);
        }
    }
}

#[test]
fn glow_maps_client_coordinates_to_percent() {
    let p = pointer_percent(DVec2::new(640.0, 1200.0), page()).unwrap();
    assert!((p.x - 50.0).abs() < 1e-12);
    assert!((p.y - 50.0).abs() < 1e-12);
}

#[test]
fn glow_outside_bounds_is_accepted_as_is() {
    let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
    let mut glow = PointerGlowTracker::new();
    assert!(glow.on_pointer_move(DVec2::new(50.0, 350.0), rect));
    let p = glow.position();
    assert!((p.x - -25.0).abs() < 1e-12);
    assert!((p.y - 250.0).abs() < 1e-12);
}

#[test]
fn glow_skips_degenerate_rects() {
    let mut glow = PointerGlowTracker::new();
    assert!(glow.on_pointer_move(DVec2::new(10.0, 10.0), Rect::new(0.0, 0.0, 100.0, 100.0)));
    let before = glow.position();

    for rect in [
        Rect::new(0.0, 0.0, 0.0, 100.0),
        Rect::new(0.0, 0.0, 100.0, 0.0),
        Rect::default(),
        Rect::new(0.0, 0.0, f64::NAN, 100.0),
        Rect::new(0.0, 0.0, -10.0, 100.0),
    ] {
        assert!(!glow.on_pointer_move(DVec2::new(40.0, 40.0), rect));
        assert_eq!(glow.position(), before);
        assert!(glow.position().is_finite());
    }
}

#[test]
fn glow_reports_changes_once() {
    let mut glow = PointerGlowTracker::new();
    assert_eq!(glow.take_changed(), Some(DVec2::splat(50.0)));
    assert_eq!(glow.take_changed(), None);
    glow.on_pointer_move(DVec2::new(25.0, 75.0), Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(glow.take_changed(), Some(DVec2::new(25.0, 75.0)));
    assert_eq!(glow.take_changed(), None);
    glow.reset();
    assert_eq!(glow.take_changed(), Some(DVec2::splat(50.0)));
}

#[test]
fn magnetic_target_is_scaled_offset_from_centre() {
    let t = magnetic_target(DVec2::new(600.0, 300.0), button(), 0.4).unwrap();
    // centre is (500, 324)
    assert!((t.x - 40.0).abs() < 1e-12);
    assert!((t.y - -9.6).abs() < 1e-12);
    assert_eq!(
        magnetic_target(DVec2::new(500.0, 324.0), button(), 0.4),
        Some(DVec2::ZERO)
    );
    assert_eq!(magnetic_target(DVec2::ZERO, Rect::default(), 0.4), None);
}

#[test]
fn magnetic_ignores_zero_size_rect() {
    let mut m = MagneticOffset::default();
    assert!(!m.on_pointer_move(DVec2::new(10.0, 10.0), Rect::new(5.0, 5.0, 0.0, 0.0)));
    assert_eq!(m.target(), DVec2::ZERO);
    assert!(m.is_at_rest());
}

#[test]
fn magnetic_follows_pointer_then_returns_to_rest_on_leave() {
    let mut m = MagneticOffset::new(SpringConfig::MAGNETIC, 0.4);
    let pointer = DVec2::new(600.0, 274.0); // (+100, -50) from centre
    assert!(m.on_pointer_move(pointer, button()));
    assert!((m.target() - DVec2::new(40.0, -20.0)).length() < 1e-12);

    let mut frames = 0;
    while !m.is_at_rest() {
        m.tick(FRAME);
        frames += 1;
        assert!(frames < 240, "never settled on hover target");
    }
    assert_eq!(m.offset(), m.target());
    assert!(m.scale() > 1.0);

    m.on_pointer_leave();
    assert_eq!(m.target(), DVec2::ZERO);

    let mut prev = m.offset().length();
    let mut max_overshoot = 0.0_f64;
    let mut frames = 0;
    while !m.is_at_rest() {
        let o = m.tick(FRAME);
        // approach is monotone up to a visually negligible overshoot
        assert!(o.length() <= prev + 0.05, "distance grew at frame {frames}");
        max_overshoot = max_overshoot.max(-o.x).max(o.y);
        prev = o.length();
        frames += 1;
        assert!(frames < 120, "never settled after leave");
    }
    assert_eq!(m.offset(), DVec2::ZERO);
    assert_eq!(m.scale(), 1.0);
    assert!(max_overshoot < 0.05, "overshoot {max_overshoot}px");
}

#[test]
fn latest_pointer_sample_wins() {
    let mut m = MagneticOffset::default();
    m.on_pointer_move(DVec2::new(600.0, 324.0), button());
    m.on_pointer_move(DVec2::new(400.0, 324.0), button());
    assert!((m.target() - DVec2::new(-40.0, 0.0)).length() < 1e-12);
}
