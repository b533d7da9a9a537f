//! Terrain error types.

/// Errors that can occur when configuring terrain generation.
///
/// Generation itself is a pure computation over validated inputs and cannot
/// fail; all errors are rejected at construction time.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// Noise frequency must be positive and finite.
    #[error("noise frequency must be positive and finite, got {0}")]
    InvalidFrequency(f32),
}
