use glam::Vec3;

/// Exponential smoothing step: move `current` toward `target` by a constant
/// fraction of the remaining distance
///
/// With `factor` in (0, 1) the result converges to `target` without ever
/// overshooting it.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Component-wise [`approach`] for vectors
#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_converges_without_overshoot() {
        let target = 10.0;
        let mut value = 0.0;
        let mut previous_gap = (target - value) as f32;

        for _ in 0..500 {
            value = approach(value, target, 0.04);
            let gap: f32 = target - value;
            assert!(gap >= 0.0, "overshot target: value {}", value);
            assert!(gap <= previous_gap, "gap grew from {} to {}", previous_gap, gap);
            previous_gap = gap;
        }

        assert!(previous_gap < 1e-3, "did not converge, gap {}", previous_gap);
    }

    #[test]
    fn approach_is_identity_at_target() {
        assert_eq!(approach(5.0, 5.0, 0.04), 5.0);
    }

    #[test]
    fn approach_vec3_matches_scalar() {
        let current = Vec3::new(1.0, 2.0, 3.0);
        let target = Vec3::new(4.0, 5.0, 6.0);
        let stepped = approach_vec3(current, target, 0.25);
        assert_eq!(stepped.x, approach(1.0, 4.0, 0.25));
        assert_eq!(stepped.y, approach(2.0, 5.0, 0.25));
        assert_eq!(stepped.z, approach(3.0, 6.0, 0.25));
    }
}
