//! Secure index drawing over the operating-system CSPRNG.

use rand::rngs::OsRng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

/// Size of the `u32` output space each draw comes from.
const RANGE: u64 = 1 << 32;

/// How a raw 32-bit draw is reduced to a pool index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// Redraw anything above the largest multiple of the pool size. Exactly uniform.
    #[default]
    Rejection,
    /// Plain `value % n`. Slightly favours low indices when `n` does not divide 2^32.
    Modulo,
}

impl Sampling {
    pub fn label(self) -> &'static str {
        match self {
            Sampling::Rejection => "rejection",
            Sampling::Modulo => "modulo",
        }
    }
}

/// Returns the process-wide secure source.
#[inline]
pub fn source() -> OsRng {
    OsRng
}

pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}

/// Draw an index in `[0, n)` from one or more 32-bit values.
///
/// `n` must be non-zero and fit in a `u32`; pools here are at most 92 wide.
#[inline]
pub fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, n: usize, sampling: Sampling) -> usize {
    debug_assert!(n > 0 && (n as u64) <= RANGE);
    let n = n as u64;

    match sampling {
        Sampling::Modulo => (rng.next_u32() as u64 % n) as usize,
        Sampling::Rejection => {
            let limit = RANGE - RANGE % n;
            loop {
                let value = rng.next_u32() as u64;
                if value < limit {
                    return (value % n) as usize;
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Replays a fixed list of 32-bit outputs.
    pub(crate) struct Scripted {
        values: Vec<u32>,
        pos: usize,
    }

    impl Scripted {
        pub(crate) fn new(values: &[u32]) -> Self {
            Self {
                values: values.to_vec(),
                pos: 0,
            }
        }

        pub(crate) fn consumed(&self) -> usize {
            self.pos
        }
    }

    impl RngCore for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand_core::impls::fill_bytes_via_next(self, dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    pub(crate) fn chi_square(counts: &[usize]) -> f64 {
        let total: usize = counts.iter().sum();
        let expected = total as f64 / counts.len() as f64;
        counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum()
    }

    #[test]
    fn rejection_redraws_values_in_the_excess_zone() {
        // 2^32 mod 92 = 12, so the top 12 values are rejected.
        let mut rng = Scripted::new(&[u32::MAX, u32::MAX - 11, 93]);
        assert_eq!(uniform_index(&mut rng, 92, Sampling::Rejection), 1);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn rejection_accepts_last_value_below_limit() {
        let limit = (RANGE - RANGE % 92) as u32;
        let mut rng = Scripted::new(&[limit - 1]);
        assert_eq!(
            uniform_index(&mut rng, 92, Sampling::Rejection),
            ((limit - 1) % 92) as usize
        );
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn modulo_keeps_the_biased_reduction() {
        let mut rng = Scripted::new(&[u32::MAX]);
        assert_eq!(uniform_index(&mut rng, 92, Sampling::Modulo), 11);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn power_of_two_pool_never_rejects() {
        let mut rng = Scripted::new(&[u32::MAX]);
        assert_eq!(uniform_index(&mut rng, 32, Sampling::Rejection), 31);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn single_entry_pool_is_always_zero() {
        let mut rng = source();
        for _ in 0..100 {
            assert_eq!(uniform_index(&mut rng, 1, Sampling::Rejection), 0);
        }
    }

    #[test]
    fn draws_are_uniform_in_both_modes() {
        // 25 degrees of freedom; 70 is far beyond the 0.9999 quantile (~56).
        for sampling in [Sampling::Rejection, Sampling::Modulo] {
            let mut rng = StdRng::seed_from_u64(0x5eed);
            let mut counts = [0usize; 26];
            for _ in 0..26 * 4000 {
                counts[uniform_index(&mut rng, 26, sampling)] += 1;
            }
            let stat = chi_square(&counts);
            assert!(stat < 70.0, "{} chi-square {stat:.2}", sampling.label());
        }
    }
}
