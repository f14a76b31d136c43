/// Park-Miller (Lehmer) linear-congruential stream.
///
/// Every sampler seeds its own instance, so grids rebuilt from the same seed
/// are bit-for-bit identical across platforms. The state update uses exact
/// integer arithmetic only; Schrage's decomposition keeps every intermediate
/// inside the i64 range.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    state: i64,
}

/// Modulus, 2^31 - 1 (a Mersenne prime).
const M: i64 = 2_147_483_647;
/// Multiplier, 7^5, a primitive root of M.
const A: i64 = 16_807;
/// M / A, used by Schrage's decomposition.
const Q: i64 = 127_773;
/// M % A.
const R: i64 = 2_836;

impl SequenceGenerator {
    /// Create a stream from any integer seed. Out-of-range seeds are folded
    /// into the admissible `[1, M-1]` range; this folding is internal and
    /// never changes the caller-visible seed.
    pub fn new(seed: i64) -> Self {
        let mut gen = Self { state: 1 };
        gen.set_seed(seed);
        gen
    }

    /// Fold `seed` into `[1, M-1]` and reset the stream.
    pub fn set_seed(&mut self, seed: i64) {
        let mut seed = seed;
        if seed <= 0 {
            seed = -(seed % (M - 1)) + 1;
        }
        if seed > M - 1 {
            seed = M - 1;
        }
        self.state = seed;
    }

    fn next_long(&mut self) -> i64 {
        let mut res = A * (self.state % Q) - R * (self.state / Q);
        if res <= 0 {
            res += M;
        }
        self.state = res;
        res
    }

    /// Next value in `(0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.next_long() as f64 / M as f64
    }
}
