use thiserror::Error;

/// Rejected request parameters. Every generation call validates its
/// parameters before allocating any grid, so a failed call never leaves a
/// partial raster behind and retrying with the same inputs fails identically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("raster dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("period must be positive, got {0}")]
    NonPositivePeriod(f64),

    #[error("frequency must be positive, got {0}")]
    NonPositiveFrequency(f64),

    #[error("lacunarity must be at least 1, got {0}")]
    LacunarityOutOfRange(f64),

    #[error("attenuation must be in (0, 1], got {0}")]
    AttenuationOutOfRange(f64),

    #[error("randomness must be in [0, 1], got {0}")]
    RandomnessOutOfRange(f64),

    #[error("smoothness must be in [0, 1], got {0}")]
    SmoothnessOutOfRange(f64),

    #[error("minkowski exponent must be positive, got {0}")]
    NonPositiveMinkowskiExponent(f64),

    #[error("unknown cell metric selector {0}, expected 0..=3")]
    UnknownMetric(u8),
}
