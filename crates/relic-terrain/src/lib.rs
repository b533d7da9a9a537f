//! Procedural terrain core: scalar noise field, heightmap mesh generation
//! with biome coloring, and per-frame surface height queries.

mod error;
mod field;
mod height;
mod mesh;

pub use error::TerrainError;
pub use field::{NoiseField, NoiseKind};
pub use height::HeightQuery;
pub use mesh::{MAX_GRID_SIZE, TerrainGrid, TerrainMeshBuilder, TerrainVertex, biome_color};
