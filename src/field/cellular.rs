use std::collections::HashMap;

use crate::error::ParameterError;
use crate::raster::Raster;
use crate::rng::SequenceGenerator;
use crate::sampler::worley::{box_blur_wrap, smoothing_kernel_size, WorleySampler2D};
use crate::sampler::Sampler2D;

use super::{CellularParams, ALPHA_SEED_OFFSET};

/// A generated cellular field: the normalized raster plus, in color mode,
/// the per-pixel identity of the cell owning the nearest feature point.
#[derive(Debug, Clone, PartialEq)]
pub struct CellularField {
    pub raster: Raster,
    pub cell_ids: Option<Vec<u32>>,
}

/// Generate a tileable cellular (Worley) field.
///
/// Grayscale output is the configured distance value per pixel, optionally
/// box-smoothed with toroidal wrap. Color output maps each pixel's nearest
/// cell identity to one fixed random color per cell. The whole raster is
/// finished with a single min-max rescale shared across all channels, so
/// relative channel contrast depends on the global extremes; a constant
/// field degenerates to uniform zero.
pub fn generate_cellular_field(params: &CellularParams) -> Result<CellularField, ParameterError> {
    params.validate()?;

    let width = params.width as usize;
    let height = params.height as usize;
    let mut raster = Raster::zeroed(width, height, params.channels.count());

    let sampler = WorleySampler2D::new(params.frequency, params.seed, params.randomness)
        .with_metric(params.metric)
        .with_minkowski_exponent(params.minkowski_exponent);

    let mut cell_ids = None;

    if params.channels.color {
        let mut ids = vec![0u32; width * height];
        for y in 0..height {
            for x in 0..width {
                let (_, id) =
                    sampler.sample_with_cell(x as f64 / width as f64, y as f64 / height as f64);
                ids[y * width + x] = id;
            }
        }

        let palette = cell_palette(&ids, params.seed);
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = palette[&ids[y * width + x]];
                raster.set(x, y, 0, r);
                raster.set(x, y, 1, g);
                raster.set(x, y, 2, b);
            }
        }
        cell_ids = Some(ids);

        if params.channels.alpha {
            raster.set_channel_plane(3, &alpha_plane(params));
        }
    } else {
        let mut plane = vec![0.0; width * height];
        for y in 0..height {
            for x in 0..width {
                plane[y * width + x] =
                    sampler.sample(x as f64 / width as f64, y as f64 / height as f64);
            }
        }
        if params.smoothness > 0.0 {
            let kernel = smoothing_kernel_size(params.smoothness, params.frequency);
            box_blur_wrap(&mut plane, width, height, kernel);
        }
        raster.set_channel_plane(0, &plane);

        if params.channels.alpha {
            raster.set_channel_plane(1, &alpha_plane(params));
        }
    }

    raster.rescale_global();

    Ok(CellularField { raster, cell_ids })
}

/// One fixed color per unique cell identity, components drawn uniformly from
/// `[0.1, 1.0]` out of a stream seeded with the base seed, identities
/// visited in ascending order.
fn cell_palette(ids: &[u32], seed: i64) -> HashMap<u32, (f64, f64, f64)> {
    let mut unique = ids.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let mut rand = SequenceGenerator::new(seed);
    let mut palette = HashMap::with_capacity(unique.len());
    for id in unique {
        let r = rand.next() * 0.9 + 0.1;
        let g = rand.next() * 0.9 + 0.1;
        let b = rand.next() * 0.9 + 0.1;
        palette.insert(id, (r, g, b));
    }
    palette
}

/// Independent scalar alpha channel: own seed offset, full jitter, never
/// smoothed.
fn alpha_plane(params: &CellularParams) -> Vec<f64> {
    let width = params.width as usize;
    let height = params.height as usize;
    let sampler = WorleySampler2D::new(params.frequency, params.seed + ALPHA_SEED_OFFSET, 1.0)
        .with_metric(params.metric)
        .with_minkowski_exponent(params.minkowski_exponent);

    let mut plane = vec![0.0; width * height];
    for y in 0..height {
        for x in 0..width {
            plane[y * width + x] =
                sampler.sample(x as f64 / width as f64, y as f64 / height as f64);
        }
    }
    plane
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ChannelSpec;
    use crate::sampler::worley::CellMetric;

    fn base_params() -> CellularParams {
        CellularParams {
            width: 64,
            height: 64,
            frequency: 4.0,
            seed: 5,
            metric: CellMetric::EuclideanF1,
            channels: ChannelSpec::GRAYSCALE,
            smoothness: 0.0,
            randomness: 1.0,
            minkowski_exponent: 3.0,
        }
    }

    #[test]
    fn test_deterministic() {
        let params = base_params();
        let first = generate_cellular_field(&params).unwrap();
        let second = generate_cellular_field(&params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_global_rescale_hits_unit_extremes() {
        let field = generate_cellular_field(&base_params()).unwrap();
        let (min, max) = field.raster.min_max();
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn test_degenerate_field_is_uniform_zero() {
        // a 1x1 raster has a single value, so min == max
        let field = generate_cellular_field(&CellularParams {
            width: 1,
            height: 1,
            ..base_params()
        })
        .unwrap();
        assert_eq!(field.raster.data(), &[0.0]);
    }

    #[test]
    fn test_centered_points_tile_periodically() {
        // randomness 0 puts features at regular centers: frequency 4 over
        // 128 pixels repeats every 32 pixels on both axes
        let field = generate_cellular_field(&CellularParams {
            width: 128,
            height: 128,
            randomness: 0.0,
            ..base_params()
        })
        .unwrap();

        let raster = &field.raster;
        for y in 0..96 {
            for x in 0..96 {
                let v = raster.get(x, y, 0);
                assert!((raster.get(x + 32, y, 0) - v).abs() < 1e-9);
                assert!((raster.get(x, y + 32, 0) - v).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_smoothed_field_keeps_unit_extremes() {
        let field = generate_cellular_field(&CellularParams {
            smoothness: 0.5,
            ..base_params()
        })
        .unwrap();
        let (min, max) = field.raster.min_max();
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn test_smoothing_reduces_local_variation() {
        let sharp = generate_cellular_field(&base_params()).unwrap();
        let smooth = generate_cellular_field(&CellularParams {
            smoothness: 1.0,
            ..base_params()
        })
        .unwrap();

        let roughness = |raster: &Raster| {
            let mut total = 0.0;
            for y in 0..raster.height() {
                for x in 0..raster.width() - 1 {
                    total += (raster.get(x + 1, y, 0) - raster.get(x, y, 0)).abs();
                }
            }
            total
        };
        assert!(roughness(&smooth.raster) < roughness(&sharp.raster));
    }

    #[test]
    fn test_color_mode_returns_cell_ids() {
        let field = generate_cellular_field(&CellularParams {
            channels: ChannelSpec::RGB,
            ..base_params()
        })
        .unwrap();

        let ids = field.cell_ids.as_ref().unwrap();
        assert_eq!(ids.len(), 64 * 64);
        // frequency 4 gives a 4x4 feature grid
        assert!(ids.iter().all(|&id| id < 16));

        // pixels sharing a cell identity share a color
        let raster = &field.raster;
        let mut seen: HashMap<u32, (f64, f64, f64)> = HashMap::new();
        for y in 0..64 {
            for x in 0..64 {
                let id = ids[y * 64 + x];
                let color = (raster.get(x, y, 0), raster.get(x, y, 1), raster.get(x, y, 2));
                let entry = seen.entry(id).or_insert(color);
                assert_eq!(*entry, color);
            }
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_grayscale_has_no_cell_ids() {
        let field = generate_cellular_field(&base_params()).unwrap();
        assert!(field.cell_ids.is_none());
    }

    #[test]
    fn test_alpha_channel_is_decorrelated() {
        let field = generate_cellular_field(&CellularParams {
            channels: ChannelSpec {
                color: false,
                alpha: true,
            },
            ..base_params()
        })
        .unwrap();

        let raster = &field.raster;
        assert_eq!(raster.channels(), 2);
        assert_ne!(raster.channel_plane(0), raster.channel_plane(1));
    }

    #[test]
    fn test_rejects_before_allocation() {
        let result = generate_cellular_field(&CellularParams {
            frequency: 0.0,
            ..base_params()
        });
        assert_eq!(result, Err(ParameterError::NonPositiveFrequency(0.0)));
    }
}
