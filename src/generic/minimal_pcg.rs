/*!
A simple pseudorandom number generator.

Specifically, the *really* minimal C PCG32 recipe from <https://www.pcg-random.org/>, wrapped in
the [rand_core] traits so a [context](crate::context) may be generic over its source of
randomness while defaulting to something small, fast, and reproducible.

Randomness is used in one place only: choosing the branch literal during a
[DPLL](crate::procedures::dpll) search when
[random_branching](crate::config::Config::random_branching) is enabled. Any choice is logically
sound, so the generator needs no statistical pedigree beyond not being constant.
*/

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment.
pub struct MinimalPcg32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPcg32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPcg32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        // Any odd increment gives a full-period stream.
        const INCREMENT: u64 = 2891336453013904245;
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut first = MinimalPcg32::seed_from_u64(7);
        let mut second = MinimalPcg32::seed_from_u64(7);
        for _ in 0..32 {
            assert_eq!(first.next_u32(), second.next_u32());
        }
    }

    #[test]
    fn stream_varies() {
        let mut rng = MinimalPcg32::seed_from_u64(73);
        let draws = (0..32).map(|_| rng.next_u32()).collect::<Vec<_>>();
        assert!(draws.iter().any(|draw| *draw != draws[0]));
    }
}
