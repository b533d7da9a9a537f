//! Procedural scattering of decorative relic instances across the terrain.
//!
//! Scattering is a one-shot generation pass run at setup time: it draws
//! random grid positions, aligns each instance to the terrain surface via
//! the shared noise field, jitters orientation, and partitions the results
//! round-robin across asset variant buckets. The caller owns the resulting
//! transform batches.

mod placer;
mod transform;

pub use placer::{ScatterParams, ScatterPlacer, blade_down};
pub use transform::PlacementTransform;
