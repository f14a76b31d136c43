use super::{perlin::PerlinSampler2D, Sampler2D};

/// Seed offset between octave levels, decorrelating each layer.
pub(crate) const LEVEL_SEED_OFFSET: i64 = 10_000;

struct Octave {
    sampler: PerlinSampler2D,
    amplitude: f64,
    inv_period: f64,
}

/// Fractal turbulence: a stack of gradient-noise octaves with geometrically
/// scaled frequency and amplitude, sampled in pixel coordinates.
///
/// The accumulated value is divided by the total amplitude, so the output
/// stays within single-octave bounds for any depth. Depth 0 degenerates to
/// plain gradient noise.
pub struct OctaveStack {
    octaves: Vec<Octave>,
    weight_total: f64,
}

impl OctaveStack {
    /// Build `depth + 1` gradient samplers for a `span_x * span_y` pixel
    /// span. Level `l` runs at period `period / lacunarity^l` with amplitude
    /// `(lacunarity^-l)^atten` and seed `seed + l * 10000`.
    pub fn new(
        span_x: u32,
        span_y: u32,
        period: f64,
        seed: i64,
        depth: u32,
        lacunarity: f64,
        atten: f64,
    ) -> Self {
        let mut octaves = Vec::with_capacity(depth as usize + 1);
        let mut weight_total = 0.0;

        for level in 0..=depth {
            let frequency = lacunarity.powi(level as i32);
            let amplitude = (1.0 / frequency).powf(atten);
            let local_period = period / frequency;

            let grid_width = (span_x as f64 / local_period).ceil() as usize;
            let grid_height = (span_y as f64 / local_period).ceil() as usize;
            let sampler = PerlinSampler2D::new(
                grid_width,
                grid_height,
                seed + level as i64 * LEVEL_SEED_OFFSET,
            );

            octaves.push(Octave {
                sampler,
                amplitude,
                inv_period: 1.0 / local_period,
            });
            weight_total += amplitude;
        }

        Self {
            octaves,
            weight_total,
        }
    }
}

impl Sampler2D for OctaveStack {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut sum = 0.0;
        for octave in &self.octaves {
            sum += octave.amplitude
                * octave
                    .sampler
                    .sample(x * octave.inv_period, y * octave.inv_period);
        }
        sum / self.weight_total
    }
}
