use glam::{Mat4, Vec3};

use crate::config::{LightingConfig, PointLight, RenderConfig};

/// Vertex format for the displaced surface mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    pub fn position_vec3(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Point light data in std140-compatible layout
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub range: f32,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl From<PointLight> for LightUniform {
    fn from(light: PointLight) -> Self {
        Self {
            position: light.position,
            range: light.range,
            color: light.color,
            intensity: light.intensity,
        }
    }
}

/// Per-frame uniform block: matrices, material, lights
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub base_color: [f32; 3],
    pub opacity: f32,
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub lights: [LightUniform; 2],
}

impl SceneUniform {
    pub fn new(view_proj: Mat4, model: Mat4, config: &RenderConfig) -> Self {
        let LightingConfig {
            ambient_intensity,
            lights,
        } = config.lighting;

        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            base_color: config.color,
            opacity: config.opacity,
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity,
            lights: [lights[0].into(), lights[1].into()],
        }
    }
}
