//! Pose of one scattered instance.

use glam::{Mat4, Quat, Vec3};

/// Translation, rotation, and uniform scale for one placed instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementTransform {
    /// World-space anchor position on the terrain surface.
    pub translation: Vec3,
    /// Base orientation composed with random tilt and yaw jitter.
    pub rotation: Quat,
    /// Uniform scale factor.
    pub scale: f32,
}

impl PlacementTransform {
    /// The model matrix (translate, then rotate, then scale) the render
    /// layer feeds to instanced draws.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation,
            self.translation,
        )
    }
}
