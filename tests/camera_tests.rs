use glam::{Vec2, Vec3};
use wavefield::camera::{ParallaxCamera, REST_DISTANCE};
use wavefield::config::ParallaxConfig;

fn parallax() -> ParallaxConfig {
    ParallaxConfig {
        scale_x: 0.3,
        scale_y: 0.2,
        smoothing: 0.04,
    }
}

#[test]
fn camera_converges_monotonically_without_overshoot() {
    let mut camera = ParallaxCamera::new(parallax(), 16.0 / 9.0);
    let pointer = Vec2::new(1.0, -1.0);
    let target = camera.target_for(pointer);

    let mut previous = (target - camera.position).length();
    for tick in 0..600 {
        camera.update(pointer);
        let remaining = (target - camera.position).length();
        assert!(
            remaining <= previous + 1e-7,
            "distance grew on tick {}: {} -> {}",
            tick,
            previous,
            remaining
        );
        // overshoot would flip the sign of a component gap
        assert!(camera.position.x <= target.x + 1e-7);
        assert!(camera.position.y <= target.y + 1e-7);
        previous = remaining;
    }

    assert!(previous < 1e-3, "camera never reached the target, gap {}", previous);
}

#[test]
fn centered_pointer_returns_camera_to_rest() {
    let mut camera = ParallaxCamera::new(parallax(), 1.0);

    // drift away first
    for _ in 0..200 {
        camera.update(Vec2::new(0.8, 0.6));
    }
    assert!(camera.position.distance(camera.rest_position()) > 0.01);

    for _ in 0..2000 {
        camera.update(Vec2::ZERO);
    }
    let rest = Vec3::new(0.0, 0.0, REST_DISTANCE);
    assert!(
        camera.position.distance(rest) < 1e-4,
        "camera settled at {:?}, expected rest {:?}",
        camera.position,
        rest
    );
}

#[test]
fn vertical_axis_is_inverted() {
    let camera = ParallaxCamera::new(parallax(), 1.0);
    // pointer toward the bottom of the viewport (positive y) lifts the target
    assert_eq!(camera.target_for(Vec2::new(0.0, 1.0)).y, -0.2);
    assert_eq!(camera.target_for(Vec2::new(0.0, -1.0)).y, 0.2);
}

#[test]
fn per_axis_scales_are_independent() {
    let camera = ParallaxCamera::new(parallax(), 1.0);
    let target = camera.target_for(Vec2::new(1.0, 1.0));
    assert_eq!(target.x, 0.3);
    assert_eq!(target.y, -0.2);
    assert_eq!(target.z, REST_DISTANCE);
}

#[test]
fn smoothing_follows_geometric_decay() {
    let mut camera = ParallaxCamera::new(parallax(), 1.0);
    let pointer = Vec2::new(1.0, 0.0);
    let target = camera.target_for(pointer);
    let initial_gap = (target - camera.position).length();

    let ticks = 50;
    for _ in 0..ticks {
        camera.update(pointer);
    }

    let expected = initial_gap * (1.0f32 - 0.04).powi(ticks);
    let actual = (target - camera.position).length();
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected geometric decay to {}, got {}",
        expected,
        actual
    );
}
