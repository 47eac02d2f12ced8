use glam::{Mat4, Vec2, Vec3};

use crate::config::ParallaxConfig;
use crate::math::approach_vec3;

pub const DEFAULT_FOV: f32 = 60.0 * std::f32::consts::PI / 180.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;
pub const REST_DISTANCE: f32 = 4.0;

/// Perspective camera that drifts with the pointer
///
/// Each tick the position moves a fixed fraction of the remaining distance
/// toward a target derived from the normalized pointer: exponential
/// smoothing, so motion converges without oscillating. The camera always
/// looks at the origin.
pub struct ParallaxCamera {
    pub position: Vec3,
    rest: Vec3,
    parallax: ParallaxConfig,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl ParallaxCamera {
    pub fn new(parallax: ParallaxConfig, aspect: f32) -> Self {
        let rest = Vec3::new(0.0, 0.0, REST_DISTANCE);
        Self {
            position: rest,
            rest,
            parallax,
            fov: DEFAULT_FOV,
            aspect,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Target position for a normalized pointer in -1..1
    ///
    /// Vertical sign is inverted: moving the pointer down nudges the camera
    /// up, which reads as the surface leaning toward the cursor.
    pub fn target_for(&self, pointer: Vec2) -> Vec3 {
        Vec3::new(
            pointer.x * self.parallax.scale_x,
            -pointer.y * self.parallax.scale_y,
            self.rest.z,
        )
    }

    /// One smoothing step toward the pointer-derived target
    pub fn update(&mut self, pointer: Vec2) {
        let target = self.target_for(pointer);
        self.position = approach_vec3(self.position, target, self.parallax.smoothing);
    }

    pub fn rest_position(&self) -> Vec3 {
        self.rest
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
