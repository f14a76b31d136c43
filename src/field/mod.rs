use crate::error::ParameterError;
use crate::sampler::worley::CellMetric;

pub mod cellular;
pub mod gradient;

/// Seed offset between output channels, decorrelating them statistically.
pub(crate) const CHANNEL_SEED_OFFSET: i64 = 1_000;
/// Seed offset of the independent cellular alpha channel.
pub(crate) const ALPHA_SEED_OFFSET: i64 = 10_000;

/// Output channel layout: one grayscale or three color channels, plus an
/// optional alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelSpec {
    pub color: bool,
    pub alpha: bool,
}

impl ChannelSpec {
    pub const GRAYSCALE: Self = Self {
        color: false,
        alpha: false,
    };
    pub const RGB: Self = Self {
        color: true,
        alpha: false,
    };
    pub const RGBA: Self = Self {
        color: true,
        alpha: true,
    };

    pub fn count(&self) -> usize {
        let base = if self.color { 3 } else { 1 };
        base + usize::from(self.alpha)
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), ParameterError> {
    if width == 0 || height == 0 {
        return Err(ParameterError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Request parameters for a single-octave gradient field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientParams {
    pub width: u32,
    pub height: u32,
    /// Pixel span of one grid cell; the raster tiles seamlessly when the
    /// dimensions are integer multiples of this.
    pub period: f64,
    pub seed: i64,
    pub channels: ChannelSpec,
    /// Take `|value|` instead of remapping `[-1, 1]` to `[0, 1]`.
    pub absolute: bool,
}

impl GradientParams {
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_dimensions(self.width, self.height)?;
        if self.period <= 0.0 {
            return Err(ParameterError::NonPositivePeriod(self.period));
        }
        Ok(())
    }
}

/// Request parameters for a fractal turbulence field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct TurbulenceParams {
    pub width: u32,
    pub height: u32,
    pub period: f64,
    pub seed: i64,
    /// Number of octave levels beyond the base; 0 is plain gradient noise.
    pub depth: u32,
    /// Frequency ratio between consecutive octaves, at least 1.
    pub lacunarity: f64,
    /// Amplitude attenuation exponent, in (0, 1].
    pub atten: f64,
    pub channels: ChannelSpec,
    pub absolute: bool,
}

impl TurbulenceParams {
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_dimensions(self.width, self.height)?;
        if self.period <= 0.0 {
            return Err(ParameterError::NonPositivePeriod(self.period));
        }
        if self.lacunarity < 1.0 {
            return Err(ParameterError::LacunarityOutOfRange(self.lacunarity));
        }
        if self.atten <= 0.0 || self.atten > 1.0 {
            return Err(ParameterError::AttenuationOutOfRange(self.atten));
        }
        Ok(())
    }
}

/// Request parameters for a cellular field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct CellularParams {
    pub width: u32,
    pub height: u32,
    /// Feature cells per tile edge; the feature grid is `ceil(frequency)`
    /// cells per axis.
    pub frequency: f64,
    pub seed: i64,
    pub metric: CellMetric,
    pub channels: ChannelSpec,
    /// Periodic box-smoothing amount in [0, 1]; 0 disables smoothing.
    pub smoothness: f64,
    /// Feature point jitter in [0, 1]; 0 centers every point in its cell.
    pub randomness: f64,
    /// Exponent of the Minkowski metric variants.
    pub minkowski_exponent: f64,
}

impl CellularParams {
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_dimensions(self.width, self.height)?;
        if self.frequency <= 0.0 {
            return Err(ParameterError::NonPositiveFrequency(self.frequency));
        }
        if !(0.0..=1.0).contains(&self.smoothness) {
            return Err(ParameterError::SmoothnessOutOfRange(self.smoothness));
        }
        if !(0.0..=1.0).contains(&self.randomness) {
            return Err(ParameterError::RandomnessOutOfRange(self.randomness));
        }
        if self.minkowski_exponent <= 0.0 {
            return Err(ParameterError::NonPositiveMinkowskiExponent(
                self.minkowski_exponent,
            ));
        }
        Ok(())
    }
}
