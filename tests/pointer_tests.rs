// Host-side tests for pointer velocity estimation and clamping.

use dotfield_core::pointer::PointerState;
use glam::Vec2;

#[test]
fn speed_clamps_to_max_exactly_and_preserves_direction() {
    let mut p = PointerState::default();
    p.sample(Vec2::ZERO, Vec2::ZERO, 0.0, 5000.0);
    // 300px right, 400px down in 16ms -> raw speed 31250 px/s, well past max
    p.sample(Vec2::new(300.0, 400.0), Vec2::new(300.0, 400.0), 16.0, 5000.0);

    assert_eq!(p.speed, 5000.0);
    assert!((p.vel.length() - 5000.0).abs() < 0.5);
    // 3-4-5 direction survives the clamp
    assert!((p.vel.y / p.vel.x - 400.0 / 300.0).abs() < 1e-4);
}

#[test]
fn slow_motion_is_not_clamped() {
    let mut p = PointerState::default();
    p.sample(Vec2::ZERO, Vec2::ZERO, 0.0, 5000.0);
    // 10px in 100ms -> 100 px/s
    p.sample(Vec2::new(10.0, 0.0), Vec2::new(10.0, 0.0), 100.0, 5000.0);

    assert!((p.speed - 100.0).abs() < 1e-3);
    assert_eq!(p.vel.y, 0.0);
}

#[test]
fn first_sample_uses_default_dt() {
    let mut p = PointerState::default();
    // No previous sample: dt defaults to ~16ms instead of a huge spike
    p.sample(Vec2::new(8.0, 0.0), Vec2::new(8.0, 0.0), 1234.0, 5000.0);

    assert!((p.vel.x - 500.0).abs() < 1e-3); // 8px / 16ms
    assert_eq!(p.pos, Vec2::new(8.0, 0.0));
}

#[test]
fn duplicate_timestamps_stay_finite() {
    let mut p = PointerState::default();
    p.sample(Vec2::ZERO, Vec2::ZERO, 10.0, 5000.0);
    p.sample(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0), 10.0, 5000.0);

    assert!(p.speed.is_finite());
    assert!(p.speed <= 5000.0);
    assert!(p.vel.x.is_finite() && p.vel.y.is_finite());
}

#[test]
fn position_tracks_canvas_space_independently_of_velocity_space() {
    let mut p = PointerState::default();
    // Canvas-relative and client coordinates differ by the canvas origin
    p.sample(Vec2::new(10.0, 20.0), Vec2::new(110.0, 220.0), 0.0, 5000.0);
    assert_eq!(p.pos, Vec2::new(10.0, 20.0));

    p.sample(Vec2::new(15.0, 20.0), Vec2::new(115.0, 220.0), 50.0, 5000.0);
    // Velocity comes from the client-space delta: 5px in 50ms -> 100 px/s
    assert!((p.vel.x - 100.0).abs() < 1e-3);
    assert_eq!(p.pos, Vec2::new(15.0, 20.0));
}
