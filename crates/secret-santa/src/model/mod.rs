//! Participants, historical pairings and generated assignments.

mod pairing;
mod participant;

pub use pairing::{Assignment, PreviousPairing};
pub use participant::{Participant, Record, normalize_email};
