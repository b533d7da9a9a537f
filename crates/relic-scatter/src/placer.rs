//! Round-robin relic placement over the terrain noise field.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Quat, Vec3};
use rand::Rng;
use relic_terrain::NoiseField;

use crate::transform::PlacementTransform;

/// Base orientation for relic props: flipped 180 degrees around X so the
/// blade points down into the ground, then turned 90 degrees around Y.
pub fn blade_down() -> Quat {
    Quat::from_rotation_x(PI) * Quat::from_rotation_y(FRAC_PI_2)
}

/// Tuning parameters for one scatter pass.
#[derive(Clone, Copy, Debug)]
pub struct ScatterParams {
    /// Total number of instances to place across all variants.
    pub count: u32,
    /// Uniform scale applied to every instance.
    pub scale_factor: f32,
    /// Vertical offset added to the surface height so instances sit into
    /// the terrain rather than floating on it.
    pub embed_offset: f32,
    /// Number of asset variant buckets to partition instances across.
    pub variant_count: u32,
    /// Half-range of the random tilt around X and Z, in radians.
    /// Must be non-negative.
    pub tilt_range: f32,
    /// Fixed orientation applied before the random jitter.
    pub base_orientation: Quat,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            count: 0,
            scale_factor: 1.0,
            embed_offset: 0.0,
            variant_count: 1,
            tilt_range: 10f32.to_radians(),
            base_orientation: blade_down(),
        }
    }
}

/// Places decorative relic instances onto the terrain surface.
///
/// Uses the same noise field the mesh was generated from, so every instance
/// lands exactly on a terrain vertex height. There is deliberately no
/// collision or minimum-spacing check; overlapping instances are accepted
/// scattering noise.
pub struct ScatterPlacer {
    params: ScatterParams,
    grid_size: u32,
    vertical_scale: f32,
}

impl ScatterPlacer {
    /// Create a placer for a grid of `grid_size` cells whose heights are
    /// `noise * vertical_scale`.
    pub fn new(params: ScatterParams, grid_size: u32, vertical_scale: f32) -> Self {
        Self {
            params,
            grid_size,
            vertical_scale,
        }
    }

    /// Generate placement transforms, partitioned round-robin across
    /// `variant_count` buckets (instance `i` goes to bucket
    /// `i % variant_count`, so bucket sizes differ by at most one).
    ///
    /// The random source is injected: seeding the generator makes the whole
    /// scatter reproducible. A `count` of zero yields empty buckets and a
    /// `variant_count` of zero yields no buckets; neither is an error.
    pub fn scatter<R: Rng>(&self, noise: &NoiseField, rng: &mut R) -> Vec<Vec<PlacementTransform>> {
        let variant_count = self.params.variant_count as usize;
        let mut buckets: Vec<Vec<PlacementTransform>> = vec![Vec::new(); variant_count];
        if variant_count == 0 {
            return buckets;
        }

        for i in 0..self.params.count as usize {
            let x = rng.random_range(0..=self.grid_size);
            let z = rng.random_range(0..=self.grid_size);

            let surface = noise.sample(x as f32, z as f32) * self.vertical_scale;
            let y = surface + self.params.embed_offset;

            let tilt_x = rng.random_range(-self.params.tilt_range..=self.params.tilt_range);
            let yaw = rng.random_range(0.0..TAU);
            let tilt_z = rng.random_range(-self.params.tilt_range..=self.params.tilt_range);

            let rotation = self.params.base_orientation
                * Quat::from_rotation_x(tilt_x)
                * Quat::from_rotation_y(yaw)
                * Quat::from_rotation_z(tilt_z);

            buckets[i % variant_count].push(PlacementTransform {
                translation: Vec3::new(x as f32, y, z as f32),
                rotation,
                scale: self.params.scale_factor,
            });
        }

        buckets
    }
}
