/// Multi-channel scalar raster, shape `(height, width, channels)`.
///
/// Produced fresh by every generation call and handed to the sink afterwards;
/// nothing is cached between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f64>,
}

impl Raster {
    pub fn zeroed(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0.0; width * height * channels],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    fn index(&self, x: usize, y: usize, channel: usize) -> usize {
        (y * self.width + x) * self.channels + channel
    }

    pub fn get(&self, x: usize, y: usize, channel: usize) -> f64 {
        self.data[self.index(x, y, channel)]
    }

    pub fn set(&mut self, x: usize, y: usize, channel: usize, value: f64) {
        let idx = self.index(x, y, channel);
        self.data[idx] = value;
    }

    /// Copy one channel out as a contiguous `height * width` plane.
    pub fn channel_plane(&self, channel: usize) -> Vec<f64> {
        let mut plane = vec![0.0; self.width * self.height];
        for y in 0..self.height {
            for x in 0..self.width {
                plane[y * self.width + x] = self.get(x, y, channel);
            }
        }
        plane
    }

    /// Write a `height * width` plane back into one channel.
    pub fn set_channel_plane(&mut self, channel: usize, plane: &[f64]) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set(x, y, channel, plane[y * self.width + x]);
            }
        }
    }

    pub fn min_max(&self) -> (f64, f64) {
        let min = self.data.iter().fold(f64::MAX, |acc, v| acc.min(*v));
        let max = self.data.iter().fold(f64::MIN, |acc, v| acc.max(*v));
        (min, max)
    }

    /// Rescale the whole raster to `[0, 1]` with a single min/max shared
    /// across all channels. A constant raster degenerates to uniform zero
    /// instead of dividing by a zero range.
    pub fn rescale_global(&mut self) {
        let (min, max) = self.min_max();
        if max > min {
            let inv = 1.0 / (max - min);
            for value in self.data.iter_mut() {
                *value = (*value - min) * inv;
            }
        } else {
            for value in self.data.iter_mut() {
                *value = 0.0;
            }
        }
    }

    /// Apply `f` to every stored value.
    pub fn map_in_place(&mut self, f: impl Fn(f64) -> f64) {
        for value in self.data.iter_mut() {
            *value = f(*value);
        }
    }

    /// Expand to a `height * width * 4` RGBA buffer for an image sink.
    ///
    /// A single scalar channel is replicated into all three color slots;
    /// when the raster carries no alpha channel, alpha is filled with 1.0.
    /// Rasters with three or four channels are taken as RGB(A) directly.
    pub fn to_rgba(&self) -> Vec<f64> {
        let mut pixels = vec![0.0; self.width * self.height * 4];
        for y in 0..self.height {
            for x in 0..self.width {
                let base = (y * self.width + x) * 4;
                if self.channels >= 3 {
                    for c in 0..3 {
                        pixels[base + c] = self.get(x, y, c);
                    }
                    pixels[base + 3] = if self.channels > 3 {
                        self.get(x, y, 3)
                    } else {
                        1.0
                    };
                } else {
                    let value = self.get(x, y, 0);
                    pixels[base] = value;
                    pixels[base + 1] = value;
                    pixels[base + 2] = value;
                    pixels[base + 3] = if self.channels > 1 {
                        self.get(x, y, 1)
                    } else {
                        1.0
                    };
                }
            }
        }
        pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_global_shares_extremes() {
        let mut raster = Raster::zeroed(2, 1, 2);
        raster.set(0, 0, 0, 2.0);
        raster.set(1, 0, 0, 4.0);
        raster.set(0, 0, 1, 6.0);
        raster.set(1, 0, 1, 10.0);

        raster.rescale_global();

        // min/max are shared across channels, not per-channel
        assert_eq!(raster.get(0, 0, 0), 0.0);
        assert_eq!(raster.get(1, 0, 0), 0.25);
        assert_eq!(raster.get(0, 0, 1), 0.5);
        assert_eq!(raster.get(1, 0, 1), 1.0);
    }

    #[test]
    fn test_rescale_degenerate_is_zero() {
        let mut raster = Raster::zeroed(3, 3, 1);
        raster.map_in_place(|_| 7.5);
        raster.rescale_global();
        assert!(raster.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_to_rgba_replicates_grayscale() {
        let mut raster = Raster::zeroed(1, 1, 1);
        raster.set(0, 0, 0, 0.25);
        assert_eq!(raster.to_rgba(), vec![0.25, 0.25, 0.25, 1.0]);
    }

    #[test]
    fn test_to_rgba_grayscale_with_alpha() {
        let mut raster = Raster::zeroed(1, 1, 2);
        raster.set(0, 0, 0, 0.5);
        raster.set(0, 0, 1, 0.75);
        assert_eq!(raster.to_rgba(), vec![0.5, 0.5, 0.5, 0.75]);
    }

    #[test]
    fn test_channel_plane_round_trip() {
        let mut raster = Raster::zeroed(2, 2, 3);
        raster.set(1, 0, 1, 0.5);
        raster.set(0, 1, 1, 0.9);

        let plane = raster.channel_plane(1);
        assert_eq!(plane, vec![0.0, 0.5, 0.9, 0.0]);

        let mut other = Raster::zeroed(2, 2, 3);
        other.set_channel_plane(1, &plane);
        assert_eq!(other.channel_plane(1), plane);
    }
}
