use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::{Country, OPTIONS_PER_ROUND, Round, RoundError};

//
// ─── DEALER ───────────────────────────────────────────────────────────────────
//

/// Shuffles the country pool and deals question rounds.
///
/// All randomness in the game flows through the dealer, so a seeded dealer
/// makes an entire playthrough reproducible.
///
/// ```
/// use quiz_core::Dealer;
///
/// let mut first = Dealer::seeded(7);
/// let mut second = Dealer::seeded(7);
/// assert_eq!(first.deal_round().unwrap(), second.deal_round().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Dealer {
    pool: Vec<Country>,
    rng: StdRng,
}

impl Dealer {
    /// Dealer backed by operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Dealer that replays the same sequence of rounds for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            pool: Country::ALL.to_vec(),
            rng,
        }
    }

    /// The full country pool the dealer draws from.
    #[must_use]
    pub fn pool(&self) -> &[Country] {
        &self.pool
    }

    /// Reshuffles the pool and deals the next round. The three options are
    /// the head of the shuffled pool and the target slot is drawn uniformly.
    ///
    /// # Errors
    ///
    /// Returns `RoundError` if the dealt options fail round validation,
    /// which cannot happen while the pool holds distinct countries.
    pub fn deal_round(&mut self) -> Result<Round, RoundError> {
        self.pool.shuffle(&mut self.rng);
        let options = [self.pool[0], self.pool[1], self.pool[2]];
        let correct = self.rng.random_range(0..OPTIONS_PER_ROUND);
        Round::new(options, correct)
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
