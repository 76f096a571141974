//! Tie-breaking strategies for fallback tiers.
//!
//! When several faculties tie at the minimum load, the engine asks a
//! [`TieBreaker`] for one of them. Randomness is an explicit dependency:
//! seed it for reproducible runs, or draw from the OS for production.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;

/// Picks one of several tied candidates.
pub trait TieBreaker: Debug {
    /// Strategy name.
    fn name(&self) -> &'static str;

    /// Returns an index in `0..len`. Only called with `len >= 2`.
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform random choice driven by an injected RNG.
///
/// # Example
/// ```
/// use u_assign::engine::{RandomTieBreaker, TieBreaker};
///
/// let mut a = RandomTieBreaker::seeded(7);
/// let mut b = RandomTieBreaker::seeded(7);
/// assert_eq!(a.choose(5), b.choose(5));
/// ```
pub struct RandomTieBreaker<R> {
    rng: R,
}

impl<R: Rng> RandomTieBreaker<R> {
    /// Wraps an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTieBreaker<StdRng> {
    /// Reproducible tie-breaker from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Tie-breaker seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> TieBreaker for RandomTieBreaker<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

impl<R> Debug for RandomTieBreaker<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomTieBreaker").finish_non_exhaustive()
    }
}

/// Always picks the first candidate in table order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl TieBreaker for FirstCandidate {
    fn name(&self) -> &'static str {
        "first"
    }

    fn choose(&mut self, _len: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomTieBreaker::seeded(42);
        let mut b = RandomTieBreaker::seeded(42);
        let xs: Vec<usize> = (0..50).map(|_| a.choose(4)).collect();
        let ys: Vec<usize> = (0..50).map(|_| b.choose(4)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_random_stays_in_range_and_varies() {
        let mut t = RandomTieBreaker::seeded(1);
        let picks: Vec<usize> = (0..200).map(|_| t.choose(3)).collect();
        assert!(picks.iter().all(|&i| i < 3));
        for i in 0..3 {
            assert!(picks.contains(&i), "index {i} never chosen");
        }
    }

    #[test]
    fn test_first_candidate() {
        let mut t = FirstCandidate;
        assert_eq!(t.choose(10), 0);
        assert_eq!(t.name(), "first");
    }
}
