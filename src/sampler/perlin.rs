use crate::rng::SequenceGenerator;

use super::{lerp, s_curve, Sampler2D};

/// Gradient (Perlin) noise over a toroidal grid of unit vectors.
///
/// The grid wraps on both axes, so the field tiles seamlessly with period
/// `(width, height)` in grid coordinates. Callers wanting a seamless raster
/// must sample a span that is an integer multiple of the cell pitch; the
/// sampler only guarantees `sample(x, y) == sample(x + width, y)`.
#[derive(Debug, Clone)]
pub struct PerlinSampler2D {
    width: usize,
    height: usize,
    gradients: Vec<(f64, f64)>,
}

impl PerlinSampler2D {
    /// Build a `width * height` gradient grid from one full sweep of a
    /// freshly seeded sequence stream, row-major.
    pub fn new(width: usize, height: usize, seed: i64) -> Self {
        let mut rand = SequenceGenerator::new(seed);
        let gradients = (0..width * height)
            .map(|_| {
                let angle = rand.next() * std::f64::consts::PI * 2.0;
                (angle.sin(), angle.cos())
            })
            .collect();

        Self {
            width,
            height,
            gradients,
        }
    }

    /// Dot product of the gradient stored at the wrapped cell `(cell_x,
    /// cell_y)` with the offset `(vx, vy)` from that corner to the sample.
    fn dot(&self, cell_x: i64, cell_y: i64, vx: f64, vy: f64) -> f64 {
        let cell_x = cell_x.rem_euclid(self.width as i64) as usize;
        let cell_y = cell_y.rem_euclid(self.height as i64) as usize;
        let (gx, gy) = self.gradients[cell_x + cell_y * self.width];
        gx * vx + gy * vy
    }
}

impl Sampler2D for PerlinSampler2D {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();
        let x_frac = x - x_floor;
        let y_frac = y - y_floor;

        let x0 = x_floor as i64;
        let y0 = y_floor as i64;

        let v00 = self.dot(x0, y0, x_frac, y_frac);
        let v10 = self.dot(x0 + 1, y0, x_frac - 1.0, y_frac);
        let v01 = self.dot(x0, y0 + 1, x_frac, y_frac - 1.0);
        let v11 = self.dot(x0 + 1, y0 + 1, x_frac - 1.0, y_frac - 1.0);

        let sx = s_curve(x_frac);
        let sy = s_curve(y_frac);
        lerp(lerp(v00, v10, sx), lerp(v01, v11, sx), sy)
    }
}
