//! Secure randomness, injected via a trait so tests can substitute a
//! deterministic source (spec.md §9: "implicit reliance on a specific RNG").

use rand::RngCore;

use crate::error::{CoreError, CoreResult};

/// Produces cryptographically secure uniform byte strings.
pub trait SecureRandom {
    /// Fill `out` with secure random bytes. Failure is fatal to any
    /// operation that requires it.
    fn fill(&self, out: &mut [u8]) -> CoreResult<()>;
}

/// Production randomness source backed by the OS CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, out: &mut [u8]) -> CoreResult<()> {
        rand::rngs::OsRng
            .try_fill_bytes(out)
            .map_err(|_| CoreError::RandomnessUnavailable)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::cell::RefCell;

    /// Deterministic RNG for property tests that need reproducible key
    /// material (KDF domain-separation sampling, ECDH-symmetry checks).
    pub struct DeterministicRandom {
        rng: RefCell<StdRng>,
    }

    impl DeterministicRandom {
        pub fn new(seed: u64) -> Self {
            Self {
                rng: RefCell::new(StdRng::seed_from_u64(seed)),
            }
        }
    }

    impl SecureRandom for DeterministicRandom {
        fn fill(&self, out: &mut [u8]) -> CoreResult<()> {
            self.rng.borrow_mut().fill_bytes(out);
            Ok(())
        }
    }
}
