use wavefield::config::GridConfig;
use wavefield::mesh::SurfaceMesh;
use wavefield::wave::WavePreset;

#[test]
fn displacement_is_deterministic() {
    let preset = WavePreset::HERO;
    for i in 0..200 {
        let x = (i as f32) * 0.173 - 17.0;
        let y = (i as f32) * 0.311 - 31.0;
        let t = (i as f32) * 0.097;

        let first = preset.displace(x, y, t);
        let second = preset.displace(x, y, t);
        assert_eq!(
            first.to_bits(),
            second.to_bits(),
            "displace must be bit-identical for identical arguments"
        );
    }
}

#[test]
fn hero_field_is_zero_at_center_at_start() {
    // All three terms reduce to sin(0) at the origin with t = 0
    assert_eq!(WavePreset::HERO.displace(0.0, 0.0, 0.0), 0.0);
    assert_eq!(WavePreset::PANEL.displace(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn hero_field_matches_reference_value() {
    // sin(2.6)*0.15 + sin(2.4)*0.12 + sin(3.9)*0.08
    let value = WavePreset::HERO.displace(1.0, 2.0, 3.0);
    assert!(
        (value - 0.103_359_5).abs() < 1e-5,
        "unexpected field value {}",
        value
    );
}

#[test]
fn field_changes_continuously_over_time() {
    let preset = WavePreset::HERO;
    let dt = 1.0 / 240.0;
    let bound = preset.max_rate() * dt;

    for step in 0..500 {
        let t = step as f32 * dt;
        for i in 0..50 {
            let x = (i as f32) * 0.41 - 10.0;
            let y = (i as f32) * 0.29 - 7.0;
            let delta = (preset.displace(x, y, t + dt) - preset.displace(x, y, t)).abs();
            assert!(
                delta <= bound + 1e-6,
                "height jumped by {} at t={}, bound {}",
                delta,
                t,
                bound
            );
        }
    }
}

#[test]
fn field_stays_within_amplitude_budget() {
    let preset = WavePreset::PANEL;
    let bound = preset.max_amplitude();
    for i in 0..1000 {
        let x = (i as f32) * 0.077 - 38.0;
        let y = (i as f32) * 0.123 - 61.0;
        let t = (i as f32) * 0.215;
        assert!(preset.displace(x, y, t).abs() <= bound + 1e-6);
    }
}

#[test]
fn center_vertex_of_default_grid_rests_at_zero() {
    // 50x50 subdivisions over a 10x10 extent puts a vertex exactly at the
    // origin; at t = 0 the field leaves it at its rest height.
    let mut mesh = SurfaceMesh::new(&GridConfig::new(10.0, 10.0, 50, 50)).unwrap();
    mesh.displace(&WavePreset::HERO, 0.0);

    let center = mesh
        .positions()
        .iter()
        .find(|p| p.x == 0.0 && p.y == 0.0)
        .expect("even grid has a center vertex");
    assert_eq!(center.z, 0.0);
}
