use crate::error::ParameterError;
use crate::rng::SequenceGenerator;

use super::Sampler2D;

/// Distance metric and output selector for cellular noise.
///
/// F1 is the nearest feature distance, F2 the second-nearest; the `F2F1`
/// variants output their difference (cell edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum CellMetric {
    EuclideanF1,
    MinkowskiF1,
    EuclideanF2F1,
    MinkowskiF2F1,
}

impl CellMetric {
    /// Stable wire index, matching the order above.
    pub fn index(&self) -> u8 {
        match self {
            Self::EuclideanF1 => 0,
            Self::MinkowskiF1 => 1,
            Self::EuclideanF2F1 => 2,
            Self::MinkowskiF2F1 => 3,
        }
    }

    pub fn from_index(index: u8) -> Result<Self, ParameterError> {
        match index {
            0 => Ok(Self::EuclideanF1),
            1 => Ok(Self::MinkowskiF1),
            2 => Ok(Self::EuclideanF2F1),
            3 => Ok(Self::MinkowskiF2F1),
            other => Err(ParameterError::UnknownMetric(other)),
        }
    }

    fn minkowski(&self) -> bool {
        matches!(self, Self::MinkowskiF1 | Self::MinkowskiF2F1)
    }

    fn difference(&self) -> bool {
        matches!(self, Self::EuclideanF2F1 | Self::MinkowskiF2F1)
    }
}

/// Cellular (Worley) noise over a toroidal grid of feature points.
///
/// One feature point per cell, constrained to the cell interior, so the 3x3
/// block neighborhood always contains the nearest and second-nearest
/// features. Neighbor lookups wrap on both axes, which keeps the field
/// seamless at tile edges.
#[derive(Debug, Clone)]
pub struct WorleySampler2D {
    grid_width: usize,
    grid_height: usize,
    frequency: f64,
    points: Vec<(f64, f64)>,
    metric: CellMetric,
    minkowski_exponent: f64,
}

impl WorleySampler2D {
    /// Build a `ceil(frequency)`-per-axis feature grid.
    ///
    /// With `randomness == 0` every point degenerates to its cell center and
    /// no random draws are consumed; otherwise each cell draws an offset in
    /// `[0.05, 0.95]^2` and interpolates it toward the center by the
    /// randomness factor. Draw order is row-major, x before y.
    pub fn new(frequency: f64, seed: i64, randomness: f64) -> Self {
        let grid_width = frequency.ceil() as usize;
        let grid_height = frequency.ceil() as usize;

        let mut rand = SequenceGenerator::new(seed);
        let mut points = Vec::with_capacity(grid_width * grid_height);
        for _ in 0..grid_height {
            for _ in 0..grid_width {
                if randomness == 0.0 {
                    points.push((0.5, 0.5));
                } else {
                    let px = rand.next() * 0.9 + 0.05;
                    let py = rand.next() * 0.9 + 0.05;
                    points.push((
                        0.5 + (px - 0.5) * randomness,
                        0.5 + (py - 0.5) * randomness,
                    ));
                }
            }
        }

        Self {
            grid_width,
            grid_height,
            frequency,
            points,
            metric: CellMetric::EuclideanF1,
            minkowski_exponent: 3.0,
        }
    }

    pub fn with_metric(mut self, metric: CellMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_minkowski_exponent(mut self, exponent: f64) -> Self {
        self.minkowski_exponent = exponent;
        self
    }

    /// Sample at `(x, y)` in `[0, 1)^2` and also report the flattened
    /// `by * grid_width + bx` identity of the block owning the nearest
    /// feature. Ties on the nearest distance resolve to the first candidate
    /// in the fixed 9-neighbor enumeration; reproducible for a fixed seed
    /// but not otherwise guaranteed.
    pub fn sample_with_cell(&self, x: f64, y: f64) -> (f64, u32) {
        let block_size = 1.0 / self.frequency;
        let block_x = (x / block_size).floor() as i64;
        let block_y = (y / block_size).floor() as i64;

        let mut f1 = f64::MAX;
        let mut f2 = f64::MAX;
        let mut nearest_cell = 0u32;

        for dx in -1..=1i64 {
            for dy in -1..=1i64 {
                let nx = (block_x + dx).rem_euclid(self.grid_width as i64) as usize;
                let ny = (block_y + dy).rem_euclid(self.grid_height as i64) as usize;
                let (ox, oy) = self.points[ny * self.grid_width + nx];

                let point_x = (block_x + dx) as f64 * block_size + ox * block_size;
                let point_y = (block_y + dy) as f64 * block_size + oy * block_size;

                let vx = x - point_x;
                let vy = y - point_y;
                let distance = if self.metric.minkowski() {
                    let p = self.minkowski_exponent;
                    (vx.abs().powf(p) + vy.abs().powf(p)).powf(1.0 / p)
                } else {
                    (vx * vx + vy * vy).sqrt()
                };

                if distance < f1 {
                    f2 = f1;
                    f1 = distance;
                    nearest_cell = (ny * self.grid_width + nx) as u32;
                } else if distance < f2 {
                    f2 = distance;
                }
            }
        }

        let value = if self.metric.difference() { f2 - f1 } else { f1 };
        // normalize to a frequency-independent scale
        (value / block_size, nearest_cell)
    }
}

impl Sampler2D for WorleySampler2D {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.sample_with_cell(x, y).0
    }
}

/// Kernel size of the periodic box smoothing pass: grows with smoothness,
/// shrinks with frequency, always odd and at least 3.
pub(crate) fn smoothing_kernel_size(smoothness: f64, frequency: f64) -> usize {
    let base = (smoothness * 40.0).max(3.0);
    let factor = (3.0 / frequency).max(0.1);
    let mut kernel = (base * factor).round().max(3.0) as usize;
    if kernel % 2 == 0 {
        kernel += 1;
    }
    kernel
}

/// Separable box average over a `height * width` plane with toroidal
/// boundary handling, so the blur never introduces seams.
pub(crate) fn box_blur_wrap(plane: &mut Vec<f64>, width: usize, height: usize, kernel: usize) {
    let radius = (kernel / 2) as i64;
    let inv = 1.0 / kernel as f64;

    // horizontal pass
    let mut pass = vec![0.0; width * height];
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0;
            for k in -radius..=radius {
                let wx = (x as i64 + k).rem_euclid(width as i64) as usize;
                sum += plane[y * width + wx];
            }
            pass[y * width + x] = sum * inv;
        }
    }

    // vertical pass
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0;
            for k in -radius..=radius {
                let wy = (y as i64 + k).rem_euclid(height as i64) as usize;
                sum += pass[wy * width + x];
            }
            plane[y * width + x] = sum * inv;
        }
    }
}
