pub mod octave;
pub mod perlin;
pub mod worley;

/// A deterministic, tileable 2D scalar field.
///
/// Implementations own immutable grids built once at construction, so
/// sampling takes `&self` and instances are safe to share across threads.
pub trait Sampler2D {
    fn sample(&self, x: f64, y: f64) -> f64;
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Hermite easing `t^2 (3 - 2t)`, used to smooth interpolation weights.
pub(crate) fn s_curve(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s_curve_boundaries() {
        assert_eq!(s_curve(0.0), 0.0);
        assert_eq!(s_curve(1.0), 1.0);
        assert_eq!(s_curve(0.5), 0.5);
    }

    #[test]
    fn test_s_curve_monotonic() {
        let n = 1000;
        let mut prev = s_curve(0.0);
        for i in 1..=n {
            let next = s_curve(i as f64 / n as f64);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }
}
