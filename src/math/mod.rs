mod normals;
mod smoothing;

pub use normals::accumulate_normals;
pub use smoothing::{approach, approach_vec3};
