// Deterministic, seedable pseudo-random number generator for sonnet runs.
//
// Implements xoshiro256++ (Blackman & Vigna, 2019) with SplitMix64 seeding.
// Hand-rolled so that a seed reproduces the exact same sonnet on every
// platform, which the test suite relies on.
//
// This crate is the only source of randomness in the workspace:
// `poetry_slam_lang` draws corpus positions from it and `poetry_slam_sonnet`
// threads it through line generation, rhyme resampling and candidate
// selection. The binary seeds the run RNG either from `--seed` or from the
// OS, then the selector forks one child stream per candidate sonnet.
//
// **Critical constraint: determinism.** Every method on `SlamRng` must produce
// identical output given the same prior state. Integer arithmetic only and
// no hidden global state.

use serde::{Deserialize, Serialize};

/// Xoshiro256++ PRNG used for every random decision in a run.
///
/// Each sonnet candidate owns its own `SlamRng`, forked from the run RNG,
/// so candidates can be generated in any order (or in parallel) and still
/// come out identical for a given seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlamRng {
    s: [u64; 4],
}

impl SlamRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Derive an independent child generator.
    ///
    /// Consumes one value from `self` and uses it as the child's seed, so
    /// the sequence of forks is itself deterministic.
    pub fn fork(&mut self) -> SlamRng {
        SlamRng::new(self.next_u64())
    }

    /// Generate the next `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        let threshold = range.wrapping_neg() % range; // = (2^64 - range) % range
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Uniform index into a collection of length `len`.
    ///
    /// Panics if `len == 0`; callers guarantee non-empty collections
    /// (the corpus refuses to build empty).
    pub fn index(&mut self, len: usize) -> usize {
        self.range_usize(0, len)
    }
}

/// SplitMix64, used only to expand a `u64` seed into xoshiro state.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
