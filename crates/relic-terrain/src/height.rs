//! Read-only surface height queries against a generated grid.

use crate::mesh::TerrainGrid;

/// A read-only view answering "surface height at (x, z)".
///
/// Borrows the grid's vertex data, so it can never outlive the grid and
/// never mutates it. Cheap enough to construct and query every frame from
/// camera or gameplay code.
pub struct HeightQuery<'a> {
    grid: &'a TerrainGrid,
}

impl<'a> HeightQuery<'a> {
    pub(crate) fn new(grid: &'a TerrainGrid) -> Self {
        Self { grid }
    }

    /// Stored height at the nearest lower vertex of `(x, z)`.
    ///
    /// Coordinates truncate toward zero to grid indices; queries outside
    /// `[0, grid_size)` on either axis return the sentinel `0.0` rather than
    /// failing. This is deliberately not interpolated: two close queries
    /// that straddle a grid line can return noticeably different heights.
    /// Known coarseness tradeoff, kept as-is.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let xi = x as i64;
        let zi = z as i64;
        let size = i64::from(self.grid.grid_size());
        if xi < 0 || zi < 0 || xi >= size || zi >= size {
            return 0.0;
        }
        let index = (zi * (size + 1) + xi) as usize;
        self.grid.vertices()[index].position.y
    }
}
