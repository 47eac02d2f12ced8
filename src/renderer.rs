use std::sync::Arc;

use glam::{Mat4, Vec3};
use winit::window::Window;

use crate::camera::ParallaxCamera;
use crate::config::RenderConfig;
use crate::core::clock::AnimationClock;
use crate::core::gpu_context::GpuContext;
use crate::core::mesh_pipeline::MeshPipeline;
use crate::core::surface_target::SurfaceTarget;
use crate::input::InputSnapshot;
use crate::mesh::SurfaceMesh;
use crate::types::SceneUniform;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// The animated surface renderer
///
/// Construction acquires the GPU and builds the mesh; a renderer that fails
/// to construct simply never exists - the caller degrades to a plain window
/// (the surface is decorative, never load-bearing). Once constructed the
/// renderer is driven by `tick`, which does full work on every call while
/// started and nothing at all while stopped.
pub struct Renderer {
    gpu: GpuContext,
    target: SurfaceTarget,
    pipeline: MeshPipeline,
    mesh: SurfaceMesh,
    camera: ParallaxCamera,
    clock: AnimationClock,
    config: RenderConfig,
    running: bool,
}

impl Renderer {
    pub fn new(window: Arc<Window>, config: RenderConfig) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let aspect = size.width as f32 / size.height.max(1) as f32;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;
        let gpu = pollster::block_on(GpuContext::new_with_surface(&instance, &surface))?;
        let target = SurfaceTarget::new(surface, &gpu, (size.width, size.height), scale_factor)?;

        let mut mesh = SurfaceMesh::new(&config.grid)?;
        mesh.recompute_normals();
        let pipeline = MeshPipeline::new(&gpu, target.format(), mesh.vertices(), mesh.line_indices());

        Ok(Self {
            gpu,
            target,
            pipeline,
            mesh,
            camera: ParallaxCamera::new(config.parallax, aspect),
            clock: AnimationClock::new(),
            config,
            running: false,
        })
    }

    /// Begin doing work on ticks
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop doing work on ticks; the mesh and camera keep their state
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn camera(&self) -> &ParallaxCamera {
        &self.camera
    }

    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Adopt new viewport dimensions and scale factor
    ///
    /// Safe to call redundantly; identical dimensions leave both the camera
    /// aspect and the surface configuration untouched.
    pub fn resize(&mut self, physical: (u32, u32), scale_factor: f64) {
        if physical.0 == 0 || physical.1 == 0 {
            return;
        }
        self.camera
            .set_aspect(physical.0 as f32 / physical.1 as f32);
        self.target.resize(&self.gpu, physical, scale_factor);
    }

    /// Model transform at elapsed time t: lift, tilt toward the viewer,
    /// then the slow continuous spin
    fn model_matrix(&self, t: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.config.y_offset, 0.0))
            * Mat4::from_rotation_x(self.config.tilt)
            * Mat4::from_rotation_z(self.config.spin * t)
    }

    /// One frame: displace, relight, drift the camera, render
    pub fn tick(&mut self, input: &InputSnapshot) -> Result<()> {
        if !self.running {
            return Ok(());
        }

        let t = self.clock.elapsed();
        self.mesh.displace(&self.config.wave, t);
        self.mesh.recompute_normals();
        self.camera.update(input.pointer);

        let uniform = SceneUniform::new(
            self.camera.view_projection(),
            self.model_matrix(t),
            &self.config,
        );
        if self.mesh.is_dirty() {
            self.pipeline.upload_vertices(&self.gpu, self.mesh.vertices());
            self.mesh.mark_clean();
        }
        self.pipeline.upload_scene(&self.gpu, &uniform);

        let frame = match self.target.acquire() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.target.reconfigure(&self.gpu);
                return Ok(());
            }
            Err(e) => return Err(format!("failed to acquire frame: {:?}", e).into()),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Surface Frame Encoder"),
            });
        self.pipeline.draw(&mut encoder, &view);

        self.gpu.queue().submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
