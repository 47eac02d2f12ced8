use glam::Vec3;

use crate::config::GridConfig;
use crate::math::accumulate_normals;
use crate::types::MeshVertex;
use crate::wave::WavePreset;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Regular grid of vertices displaced vertically each frame
///
/// Planar (x, y) positions and the index topology are fixed at construction;
/// only heights and the normals derived from them change afterwards. The
/// grid is centered on the origin with +Z as the rest normal.
pub struct SurfaceMesh {
    rows: u32,
    cols: u32,
    positions: Vec<Vec3>,
    rest_heights: Vec<f32>,
    normals: Vec<Vec3>,
    triangles: Vec<u32>,
    lines: Vec<u32>,
    vertex_cache: Vec<MeshVertex>,
    dirty: bool,
}

impl SurfaceMesh {
    /// Build a flat (rows+1) x (cols+1) grid over the configured extent
    ///
    /// Returns a fully-populated mesh or an error; never a partial one.
    pub fn new(grid: &GridConfig) -> Result<Self> {
        if grid.width <= 0.0 || grid.height <= 0.0 {
            return Err(format!(
                "surface extent must be positive, got {}x{}",
                grid.width, grid.height
            )
            .into());
        }
        if grid.rows == 0 || grid.cols == 0 {
            return Err("surface needs at least one subdivision per axis".into());
        }

        let (rows, cols) = (grid.rows, grid.cols);
        let vertex_count = ((rows + 1) * (cols + 1)) as usize;
        let dx = grid.width / cols as f32;
        let dy = grid.height / rows as f32;
        let (x0, y0) = (-grid.width / 2.0, -grid.height / 2.0);

        let mut positions = Vec::with_capacity(vertex_count);
        for r in 0..=rows {
            for c in 0..=cols {
                positions.push(Vec3::new(x0 + c as f32 * dx, y0 + r as f32 * dy, 0.0));
            }
        }

        // Each cell splits into two triangles along the i00-i11 diagonal;
        // the wireframe draws the horizontal, vertical, and diagonal edges.
        let stride = cols + 1;
        let mut triangles = Vec::with_capacity((rows * cols * 6) as usize);
        let mut lines = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                let i00 = r * stride + c;
                let i01 = i00 + 1;
                let i10 = i00 + stride;
                let i11 = i10 + 1;
                triangles.extend_from_slice(&[i00, i11, i10, i00, i01, i11]);
                lines.extend_from_slice(&[i00, i01, i00, i10, i00, i11]);
            }
            // right boundary column
            let edge = r * stride + cols;
            lines.extend_from_slice(&[edge, edge + stride]);
        }
        // top boundary row
        for c in 0..cols {
            let edge = rows * stride + c;
            lines.extend_from_slice(&[edge, edge + 1]);
        }

        Ok(Self {
            rows,
            cols,
            rest_heights: vec![0.0; vertex_count],
            normals: vec![Vec3::Z; vertex_count],
            vertex_cache: positions
                .iter()
                .map(|p| MeshVertex::new(p.to_array(), [0.0, 0.0, 1.0]))
                .collect(),
            positions,
            triangles,
            lines,
            dirty: false,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn rest_heights(&self) -> &[f32] {
        &self.rest_heights
    }

    /// Triangle indices used for normal accumulation
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangles
    }

    /// Line-list indices for wireframe rendering
    pub fn line_indices(&self) -> &[u32] {
        &self.lines
    }

    /// Whether geometry changed since the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledge an upload of the current vertex data
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Set every vertex height to rest + field value at its planar position
    pub fn displace(&mut self, preset: &WavePreset, t: f32) {
        for ((position, rest), cached) in self
            .positions
            .iter_mut()
            .zip(&self.rest_heights)
            .zip(&mut self.vertex_cache)
        {
            position.z = rest + preset.displace(position.x, position.y, t);
            cached.position[2] = position.z;
        }
        self.dirty = true;
    }

    /// Rebuild per-vertex normals from the current heights
    pub fn recompute_normals(&mut self) {
        accumulate_normals(&self.positions, &self.triangles, &mut self.normals);
        for (cached, normal) in self.vertex_cache.iter_mut().zip(&self.normals) {
            cached.normal = normal.to_array();
        }
        self.dirty = true;
    }

    /// Interleaved vertex data for GPU upload
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertex_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: u32, cols: u32) -> GridConfig {
        GridConfig::new(10.0, 10.0, rows, cols)
    }

    #[test]
    fn builder_populates_expected_counts() {
        let mesh = SurfaceMesh::new(&grid(50, 50)).unwrap();
        assert_eq!(mesh.vertex_count(), 51 * 51);
        assert_eq!(mesh.triangle_indices().len(), 50 * 50 * 6);

        // horizontal + vertical + diagonal edges, two indices each
        let edges = 50 * 51 + 50 * 51 + 50 * 50;
        assert_eq!(mesh.line_indices().len(), edges * 2);
    }

    #[test]
    fn builder_rejects_bad_input() {
        assert!(SurfaceMesh::new(&GridConfig::new(0.0, 10.0, 4, 4)).is_err());
        assert!(SurfaceMesh::new(&GridConfig::new(10.0, -1.0, 4, 4)).is_err());
        assert!(SurfaceMesh::new(&GridConfig::new(10.0, 10.0, 0, 4)).is_err());
        assert!(SurfaceMesh::new(&GridConfig::new(10.0, 10.0, 4, 0)).is_err());
    }

    #[test]
    fn vertices_spaced_evenly_and_centered() {
        let mesh = SurfaceMesh::new(&grid(2, 4)).unwrap();
        let positions = mesh.positions();
        assert_eq!(positions[0], Vec3::new(-5.0, -5.0, 0.0));
        assert_eq!(positions[4], Vec3::new(5.0, -5.0, 0.0));
        assert_eq!(positions[14], Vec3::new(5.0, 5.0, 0.0));
        // column spacing 10/4, row spacing 10/2
        assert_eq!(positions[1].x - positions[0].x, 2.5);
        assert_eq!(positions[5].y - positions[0].y, 5.0);
    }

    #[test]
    fn rest_heights_start_flat() {
        let mesh = SurfaceMesh::new(&grid(8, 8)).unwrap();
        assert!(mesh.rest_heights().iter().all(|&z| z == 0.0));
        assert!(mesh.positions().iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn displacement_only_touches_heights() {
        let mut mesh = SurfaceMesh::new(&grid(6, 6)).unwrap();
        let planar: Vec<(f32, f32)> = mesh.positions().iter().map(|p| (p.x, p.y)).collect();

        mesh.displace(&WavePreset::HERO, 3.7);
        mesh.recompute_normals();

        let after: Vec<(f32, f32)> = mesh.positions().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(planar, after);
        assert!(mesh.positions().iter().any(|p| p.z != 0.0));
    }

    #[test]
    fn displaced_heights_match_field() {
        let mut mesh = SurfaceMesh::new(&grid(4, 4)).unwrap();
        let preset = WavePreset::PANEL;
        mesh.displace(&preset, 2.0);
        for p in mesh.positions() {
            assert_eq!(p.z, preset.displace(p.x, p.y, 2.0));
        }
    }

    #[test]
    fn flat_mesh_normals_point_up() {
        let mut mesh = SurfaceMesh::new(&grid(3, 3)).unwrap();
        mesh.recompute_normals();
        for n in mesh.normals() {
            assert!((*n - Vec3::Z).length() < 1e-6);
        }
    }

    #[test]
    fn vertex_cache_tracks_displacement() {
        let mut mesh = SurfaceMesh::new(&grid(3, 3)).unwrap();
        mesh.displace(&WavePreset::HERO, 1.0);
        mesh.recompute_normals();
        assert!(mesh.is_dirty());

        let heights: Vec<f32> = mesh.positions().iter().map(|p| p.z).collect();
        let packed: Vec<f32> = mesh.vertices().iter().map(|v| v.position[2]).collect();
        assert_eq!(heights, packed);

        mesh.mark_clean();
        assert!(!mesh.is_dirty());
    }
}
