pub mod clock;
pub mod gpu_context;
pub mod mesh_pipeline;
pub mod surface_target;
