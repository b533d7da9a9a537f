//! Heightmap terrain mesh generation.
//!
//! Builds a square grid of vertices from a [`NoiseField`], classifies each
//! vertex into a biome color band, triangulates the grid, and derives smooth
//! per-vertex normals with an accumulate-then-normalize pass.

use glam::Vec3;
use static_assertions::const_assert_eq;

use crate::field::NoiseField;
use crate::height::HeightQuery;

/// One terrain vertex as the render layer consumes it.
///
/// `#[repr(C)]` and `Pod` so the whole vertex array can be uploaded to a GPU
/// buffer without repacking.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    /// World-space position; `y` is `noise * vertical_scale`.
    pub position: Vec3,
    /// Biome band color (linear RGB).
    pub color: Vec3,
    /// Unit surface normal, averaged over all faces touching this vertex.
    pub normal: Vec3,
}

// Three tightly packed vec3 attributes, 36-byte stride.
const_assert_eq!(std::mem::size_of::<TerrainVertex>(), 36);

/// Biome color bands keyed by upper noise threshold, checked lowest first.
/// First match wins; values at or above the last threshold fall through to
/// [`BIOME_DEFAULT`].
const BIOME_BANDS: [(f32, Vec3); 3] = [
    (-0.3, Vec3::new(0.3, 0.1, 0.1)), // dark red lowland
    (0.0, Vec3::new(0.2, 0.1, 0.1)),  // dark brown
    (0.3, Vec3::new(0.1, 0.1, 0.1)),  // dark gray
];

/// Color for noise values above every band threshold.
const BIOME_DEFAULT: Vec3 = Vec3::new(0.2, 0.2, 0.2);

/// Classify a raw noise value in `[-1, 1]` into its biome band color.
pub fn biome_color(noise_value: f32) -> Vec3 {
    for &(threshold, color) in &BIOME_BANDS {
        if noise_value < threshold {
            return color;
        }
    }
    BIOME_DEFAULT
}

/// An immutable generated terrain grid.
///
/// Holds `(grid_size + 1)^2` vertices in row-major order (z-major, x-minor)
/// and `6 * grid_size^2` triangle indices. Regeneration replaces the grid
/// wholesale; there are no incremental edits.
pub struct TerrainGrid {
    grid_size: u32,
    vertices: Vec<TerrainVertex>,
    indices: Vec<u32>,
}

impl TerrainGrid {
    /// Side length of the grid in cells (one less than vertices per row).
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// The vertex stream in row-major order.
    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    /// The triangle index stream, six indices per grid cell.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Total vertex count, `(grid_size + 1)^2`.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// A read-only height view over this grid.
    pub fn height_query(&self) -> HeightQuery<'_> {
        HeightQuery::new(self)
    }
}

/// Largest supported grid size: keeps the vertex count, and therefore every
/// triangle index, within `u32`.
pub const MAX_GRID_SIZE: u32 = 65_534;

/// Generates a [`TerrainGrid`] from a noise field.
pub struct TerrainMeshBuilder {
    grid_size: u32,
    vertical_scale: f32,
}

impl TerrainMeshBuilder {
    /// Create a builder for a `grid_size` x `grid_size` cell grid whose
    /// heights are `noise * vertical_scale`.
    ///
    /// # Panics
    ///
    /// Panics if `grid_size` exceeds [`MAX_GRID_SIZE`], where row-major
    /// vertex indices no longer fit in `u32`.
    pub fn new(grid_size: u32, vertical_scale: f32) -> Self {
        assert!(
            grid_size <= MAX_GRID_SIZE,
            "grid_size {grid_size} exceeds MAX_GRID_SIZE ({MAX_GRID_SIZE})"
        );
        Self {
            grid_size,
            vertical_scale,
        }
    }

    /// Generate the full grid in one shot: vertices, triangle indices, and
    /// smoothed normals.
    ///
    /// `grid_size == 0` yields a single vertex and no triangles; callers must
    /// guard against rendering the degenerate mesh.
    pub fn generate(&self, noise: &NoiseField) -> TerrainGrid {
        let side = self.grid_size as usize + 1;

        let mut vertices = Vec::with_capacity(side * side);
        for z in 0..side {
            for x in 0..side {
                let noise_value = noise.sample(x as f32, z as f32);
                let height = noise_value * self.vertical_scale;
                vertices.push(TerrainVertex {
                    position: Vec3::new(x as f32, height, z as f32),
                    color: biome_color(noise_value),
                    normal: Vec3::ZERO,
                });
            }
        }

        let cells = self.grid_size as usize;
        let mut indices = Vec::with_capacity(cells * cells * 6);
        for z in 0..cells {
            for x in 0..cells {
                let top_left = (z * side + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * side + x) as u32;
                let bottom_right = bottom_left + 1;

                // Same diagonal and winding for every cell, so flat terrain
                // comes out with +Y normals.
                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        accumulate_normals(&mut vertices, &indices);

        TerrainGrid {
            grid_size: self.grid_size,
            vertices,
            indices,
        }
    }
}

/// Two-pass smooth normal derivation over the owned vertex array.
///
/// Pass one adds each triangle's unnormalized face normal
/// (`cross(v1 - v0, v2 - v0)`) into the accumulators of all three vertices,
/// which area-weights the contribution. Pass two renormalizes. A vertex
/// touched by no triangle keeps a zero normal (only possible for the
/// degenerate single-vertex grid).
fn accumulate_normals(vertices: &mut [TerrainVertex], indices: &[u32]) {
    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let v0 = vertices[i0].position;
        let v1 = vertices[i1].position;
        let v2 = vertices[i2].position;
        let face = (v1 - v0).cross(v2 - v0);

        vertices[i0].normal += face;
        vertices[i1].normal += face;
        vertices[i2].normal += face;
    }

    for vertex in vertices.iter_mut() {
        vertex.normal = vertex.normal.normalize_or_zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::NoiseKind;

    const NORMAL_TOLERANCE: f32 = 1e-4;

    fn test_field() -> NoiseField {
        NoiseField::new(NoiseKind::OpenSimplex, 0.08, 1337).unwrap()
    }

    #[test]
    fn test_vertex_and_index_counts() {
        let noise = test_field();
        for n in [1u32, 2, 4, 17] {
            let grid = TerrainMeshBuilder::new(n, 8.0).generate(&noise);
            let side = n as usize + 1;
            assert_eq!(grid.vertex_count(), side * side);
            assert_eq!(grid.indices().len(), 6 * (n as usize) * (n as usize));
        }
    }

    #[test]
    fn test_all_indices_in_bounds() {
        let noise = test_field();
        let grid = TerrainMeshBuilder::new(9, 4.0).generate(&noise);
        let count = grid.vertex_count() as u32;
        assert!(grid.indices().iter().all(|&i| i < count));
    }

    #[test]
    fn test_heights_follow_noise_field() {
        let noise = test_field();
        let vertical_scale = 6.5;
        let grid = TerrainMeshBuilder::new(5, vertical_scale).generate(&noise);

        for z in 0..=5u32 {
            for x in 0..=5u32 {
                let index = (z * 6 + x) as usize;
                let vertex = &grid.vertices()[index];
                assert_eq!(vertex.position.x, x as f32);
                assert_eq!(vertex.position.z, z as f32);
                assert_eq!(
                    vertex.position.y,
                    noise.sample(x as f32, z as f32) * vertical_scale
                );
            }
        }
    }

    #[test]
    fn test_every_normal_has_unit_length() {
        let noise = test_field();
        let grid = TerrainMeshBuilder::new(8, 12.0).generate(&noise);
        for (i, vertex) in grid.vertices().iter().enumerate() {
            let len = vertex.normal.length();
            assert!(
                (len - 1.0).abs() < NORMAL_TOLERANCE,
                "vertex {i} normal length {len}"
            );
        }
    }

    #[test]
    fn test_flat_grid_scenario() {
        // vertical_scale of zero flattens every height to 0 regardless of
        // the noise values, matching a zero noise field.
        let noise = test_field();
        let grid = TerrainMeshBuilder::new(2, 0.0).generate(&noise);

        assert_eq!(grid.vertex_count(), 9);
        assert_eq!(grid.indices().len(), 24);
        for vertex in grid.vertices() {
            assert_eq!(vertex.position.y, 0.0);
            assert!((vertex.normal - Vec3::Y).length() < NORMAL_TOLERANCE);
        }
    }

    #[test]
    fn test_max_grid_size_is_constructible() {
        // Construction only; generating at this size would allocate far
        // beyond test budgets. The bound keeps (MAX_GRID_SIZE + 1)^2 - 1
        // representable as a u32 index.
        let _ = TerrainMeshBuilder::new(MAX_GRID_SIZE, 1.0);
        let side = u64::from(MAX_GRID_SIZE) + 1;
        assert!(side * side - 1 <= u64::from(u32::MAX));
    }

    #[test]
    #[should_panic(expected = "exceeds MAX_GRID_SIZE")]
    fn test_oversized_grid_rejected() {
        let _ = TerrainMeshBuilder::new(MAX_GRID_SIZE + 1, 1.0);
    }

    #[test]
    fn test_degenerate_grid_is_single_vertex() {
        let noise = test_field();
        let grid = TerrainMeshBuilder::new(0, 3.0).generate(&noise);
        assert_eq!(grid.vertex_count(), 1);
        assert!(grid.indices().is_empty());
        assert_eq!(grid.vertices()[0].normal, Vec3::ZERO);
    }

    #[test]
    fn test_biome_bands_are_ordered_first_match_wins() {
        let lowest = biome_color(-0.9);
        let low = biome_color(-0.15);
        let mid = biome_color(0.15);
        let high = biome_color(0.7);

        assert_eq!(lowest, Vec3::new(0.3, 0.1, 0.1));
        assert_eq!(low, Vec3::new(0.2, 0.1, 0.1));
        assert_eq!(mid, Vec3::new(0.1, 0.1, 0.1));
        assert_eq!(high, Vec3::new(0.2, 0.2, 0.2));

        // Every value strictly below a threshold stays in that band.
        assert_eq!(biome_color(-0.31), lowest);
        assert_eq!(biome_color(-0.3), low);
        assert_eq!(biome_color(0.0), mid);
        assert_eq!(biome_color(0.3), high);
    }

    #[test]
    fn test_vertex_colors_match_classification() {
        let noise = test_field();
        let grid = TerrainMeshBuilder::new(6, 2.0).generate(&noise);
        for z in 0..=6u32 {
            for x in 0..=6u32 {
                let index = (z * 7 + x) as usize;
                let expected = biome_color(noise.sample(x as f32, z as f32));
                assert_eq!(grid.vertices()[index].color, expected);
            }
        }
    }
}
