use crate::error::ParameterError;
use crate::field::cellular::generate_cellular_field;
use crate::field::gradient::{generate_gradient_field, generate_turbulence_field};
use crate::field::{CellularParams, GradientParams, TurbulenceParams};
use crate::raster::Raster;

/// Version of the metadata record layout.
pub const FORMAT_VERSION: u32 = 1;

/// The generation settings attached to a produced texture, one explicit
/// variant per noise family. Generation is deterministic, so a stored record
/// reconstructs the raster bit-for-bit via [`NoiseMetadata::regenerate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum NoiseMetadata {
    Gradient(GradientParams),
    Turbulence(TurbulenceParams),
    Cellular(CellularParams),
}

impl NoiseMetadata {
    pub fn seed(&self) -> i64 {
        match self {
            Self::Gradient(p) => p.seed,
            Self::Turbulence(p) => p.seed,
            Self::Cellular(p) => p.seed,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Gradient(p) => (p.width, p.height),
            Self::Turbulence(p) => (p.width, p.height),
            Self::Cellular(p) => (p.width, p.height),
        }
    }

    /// Re-run the generation call this record was captured from.
    pub fn regenerate(&self) -> Result<Raster, ParameterError> {
        match self {
            Self::Gradient(params) => generate_gradient_field(params),
            Self::Turbulence(params) => generate_turbulence_field(params),
            Self::Cellular(params) => generate_cellular_field(params).map(|field| field.raster),
        }
    }
}

/// Display-aspect hint for non-square rasters, `(x, y)` scale factors.
/// Purely a presentation concern for the image sink.
pub fn display_aspect(width: u32, height: u32) -> (f64, f64) {
    if width > height {
        (1.0, width as f64 / height as f64)
    } else {
        (height as f64 / width as f64, 1.0)
    }
}
