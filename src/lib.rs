//! Deterministic, seamlessly-tileable 2D noise synthesis.
//!
//! Three noise families share one seeded Park-Miller sequence stream:
//! gradient (Perlin) noise, fractal turbulence stacked from gradient
//! octaves, and cellular (Worley) noise with selectable distance metrics,
//! periodic smoothing and cell-identity output. Fields are composited per
//! output channel (grayscale, RGB, optional alpha) with decorrelated seeds
//! and handed off as plain multi-channel rasters.
//!
//! Every grid wraps toroidally, so a raster whose span is an integer
//! multiple of its cell pitch tiles without seams. Generation is a pure
//! function of its parameters: the same request always reproduces the same
//! raster bit-for-bit, and samplers are immutable after construction, so
//! sampling may be freely parallelized by the caller.
//!
//! ```
//! use tileable_noise::{generate_gradient_field, ChannelSpec, GradientParams};
//!
//! let raster = generate_gradient_field(&GradientParams {
//!     width: 256,
//!     height: 256,
//!     period: 64.0,
//!     seed: 1,
//!     channels: ChannelSpec::GRAYSCALE,
//!     absolute: false,
//! })
//! .unwrap();
//! assert_eq!(raster.data().len(), 256 * 256);
//! ```

pub mod error;
pub mod field;
pub mod metadata;
pub mod raster;
pub mod rng;
pub mod sampler;

pub use error::ParameterError;
pub use field::cellular::{generate_cellular_field, CellularField};
pub use field::gradient::{generate_gradient_field, generate_turbulence_field};
pub use field::{CellularParams, ChannelSpec, GradientParams, TurbulenceParams};
pub use metadata::{display_aspect, NoiseMetadata, FORMAT_VERSION};
pub use raster::Raster;
pub use sampler::perlin::PerlinSampler2D;
pub use sampler::worley::{CellMetric, WorleySampler2D};
pub use sampler::{octave::OctaveStack, Sampler2D};
