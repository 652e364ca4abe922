use rand::RngCore;

/// Unbiased integers below an arbitrary bound.
///
/// Uses the rejection method of the reference PCG implementation rather than
/// [`rand::Rng::gen_range`], so that a PCG32 stream produces the same
/// shuffles as the reference `pcg32_boundedrand_r`.
pub trait BoundedRand {
    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// Panics if `bound` is zero.
    fn bounded(&mut self, bound: u32) -> u32;
}

impl<R: RngCore + ?Sized> BoundedRand for R {
    fn bounded(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "bounded() called with a zero bound");
        // Values below (2^32 - bound) % bound would over-represent the low residues
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u32();
            if r >= threshold {
                return r % bound;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    quickcheck! {
        fn stays_below_bound(seed: u64, bound: u32) -> bool {
            let bound = bound.max(1);
            let mut rng = Pcg32::seed_from_u64(seed);
            (0..20).all(|_| rng.bounded(bound) < bound)
        }
    }

    #[test]
    fn power_of_two_bound_never_rejects() {
        // The threshold is zero, so every draw is used as-is
        let mut rng = Pcg32::new(0x853c49e6748fea9b, 0xda3e39cb94b95bdb);
        let mut reference = rng.clone();
        for _ in 0..10 {
            assert_eq!(rng.bounded(16), reference.next_u32() % 16);
        }
    }

    #[test]
    fn bound_of_one_is_always_zero() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(rng.bounded(1), 0);
        }
    }

    #[test]
    #[should_panic]
    fn zero_bound_panics() {
        let mut rng = Pcg32::seed_from_u64(7);
        rng.bounded(0);
    }
}
