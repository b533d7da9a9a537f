//! Deterministic 2D scalar noise field.
//!
//! One field instance is shared read-only by both mesh generation and relic
//! scattering, so scattered instances land on the same surface the mesh was
//! built from.

use noise::{NoiseFn, OpenSimplex, Perlin, Value};

use crate::error::TerrainError;

/// Noise algorithm family for a [`NoiseField`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoiseKind {
    /// Smooth gradient noise without the axis-aligned artifacts of Perlin.
    #[default]
    OpenSimplex,
    /// Classic Perlin gradient noise.
    Perlin,
    /// Blocky value noise, interpolated between lattice points.
    Value,
}

enum NoiseSource {
    OpenSimplex(OpenSimplex),
    Perlin(Perlin),
    Value(Value),
}

/// A deterministic scalar function of 2D coordinates in `[-1, 1]`.
///
/// Sampling is a pure function of the configuration (kind, frequency, seed)
/// and the input coordinates: the same field always returns the same value
/// for the same point, independent of call order.
pub struct NoiseField {
    source: NoiseSource,
    frequency: f32,
}

impl NoiseField {
    /// Create a noise field.
    ///
    /// Rejects non-positive or non-finite frequencies up front; no partially
    /// configured field is ever observable.
    pub fn new(kind: NoiseKind, frequency: f32, seed: u32) -> Result<Self, TerrainError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(TerrainError::InvalidFrequency(frequency));
        }
        let source = match kind {
            NoiseKind::OpenSimplex => NoiseSource::OpenSimplex(OpenSimplex::new(seed)),
            NoiseKind::Perlin => NoiseSource::Perlin(Perlin::new(seed)),
            NoiseKind::Value => NoiseSource::Value(Value::new(seed)),
        };
        Ok(Self { source, frequency })
    }

    /// Sample the field at a 2D world coordinate.
    ///
    /// The result is clamped to `[-1, 1]` and is finite even for extreme
    /// inputs.
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        let fx = f64::from(x) * f64::from(self.frequency);
        let fz = f64::from(z) * f64::from(self.frequency);
        let raw = match &self.source {
            NoiseSource::OpenSimplex(n) => n.get([fx, fz]),
            NoiseSource::Perlin(n) => n.get([fx, fz]),
            NoiseSource::Value(n) => n.get([fx, fz]),
        };
        let value = raw as f32;
        if !value.is_finite() {
            return 0.0;
        }
        value.clamp(-1.0, 1.0)
    }

    /// The configured sampling frequency.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}
