//! Rejection-sampling generator over full permutations.

use fastrand::Rng;
use tracing::{debug, warn};

use super::forbidden::ForbiddenPairs;
use crate::error::{Result, SantaError};
use crate::model::{Assignment, Participant, PreviousPairing};

/// Default number of shuffles tried before giving up.
pub const MAX_ATTEMPTS: usize = 1000;

/// Draws giver to receiver assignments.
///
/// Each attempt shuffles the whole receiver list and accepts it only if no
/// participant receives themself and no pair repeats a forbidden pair.
/// Participant lists are small and history is sparse, so a valid shuffle is
/// normally found within a handful of attempts. The result is not uniform
/// over all valid permutations.
#[derive(Debug, Clone)]
pub struct AssignmentGenerator {
    max_attempts: usize,
}

impl AssignmentGenerator {
    /// Create a generator with [`MAX_ATTEMPTS`].
    pub fn new() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Override the attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate assignments using an entropy-seeded random source.
    pub fn generate(
        &self,
        participants: &[Participant],
        previous: &[PreviousPairing],
    ) -> Result<Vec<Assignment>> {
        self.generate_with_rng(participants, previous, &mut Rng::new())
    }

    /// Generate assignments drawing randomness from `rng`.
    ///
    /// Returns one assignment per participant, in input order of givers.
    /// Fails with [`SantaError::ExhaustedAttempts`] once the bound is hit.
    pub fn generate_with_rng(
        &self,
        participants: &[Participant],
        previous: &[PreviousPairing],
        rng: &mut Rng,
    ) -> Result<Vec<Assignment>> {
        let forbidden = ForbiddenPairs::from_pairings(previous);
        self.generate_avoiding(participants, &forbidden, rng)
    }

    /// Generate assignments against a prebuilt forbidden set.
    pub fn generate_avoiding(
        &self,
        participants: &[Participant],
        forbidden: &ForbiddenPairs,
        rng: &mut Rng,
    ) -> Result<Vec<Assignment>> {
        let keys: Vec<String> = participants.iter().map(Participant::key).collect();

        debug!(
            participants = participants.len(),
            forbidden = forbidden.len(),
            max_attempts = self.max_attempts,
            "drawing assignments"
        );

        for attempt in 1..=self.max_attempts {
            let mut receivers: Vec<usize> = (0..participants.len()).collect();
            shuffle(&mut receivers, rng);

            if is_acceptable(&keys, &receivers, forbidden) {
                debug!(attempt, "accepted shuffle");
                return Ok(receivers
                    .iter()
                    .enumerate()
                    .map(|(giver, &receiver)| {
                        Assignment::new(&participants[giver], &participants[receiver])
                    })
                    .collect());
            }
        }

        warn!(
            attempts = self.max_attempts,
            "no valid assignment found within attempt bound"
        );
        Err(SantaError::ExhaustedAttempts {
            attempts: self.max_attempts,
        })
    }
}

impl Default for AssignmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// In-place Fisher-Yates shuffle.
fn shuffle<T>(items: &mut [T], rng: &mut Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.usize(0..=i);
        items.swap(i, j);
    }
}

/// Reject self-assignment and any forbidden giver to receiver pair.
fn is_acceptable(keys: &[String], receivers: &[usize], forbidden: &ForbiddenPairs) -> bool {
    receivers.iter().enumerate().all(|(giver, &receiver)| {
        let (g, r) = (&keys[giver], &keys[receiver]);
        g != r && !forbidden.contains(g, r)
    })
}
