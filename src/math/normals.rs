use glam::Vec3;

/// Recompute per-vertex normals by face-normal accumulation
///
/// Each triangle contributes its cross-product normal to all three of its
/// vertices; the contribution is area-weighted because the cross product is
/// left unnormalized. Writes unit normals into `normals`, which must be the
/// same length as `positions`. Vertices not referenced by any triangle (or
/// with degenerate neighborhoods) fall back to +Z, the flat-plane normal.
pub fn accumulate_normals(positions: &[Vec3], triangles: &[u32], normals: &mut [Vec3]) {
    debug_assert_eq!(positions.len(), normals.len());
    debug_assert_eq!(triangles.len() % 3, 0);

    normals.fill(Vec3::ZERO);

    for tri in triangles.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for normal in normals.iter_mut() {
        *normal = normal.try_normalize().unwrap_or(Vec3::Z);
    }
}
