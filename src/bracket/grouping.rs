//! Pluggable seeding strategies for group assignment.
//!
//! Group membership in a free-for-all phase is a contiguous slice of the
//! seeded participant list, so the only thing a strategy decides is the
//! seeding order. The default keeps input order, which makes generation
//! fully deterministic; [`Shuffled`] randomizes seeding to prevent
//! bracket-position manipulation by registration order.

use enum_dispatch::enum_dispatch;
use rand::seq::SliceRandom;

use super::models::Participant;

/// Trait for producing the seeding order used to fill groups and pairings
#[enum_dispatch]
pub trait Seeding {
    fn seed(&mut self, participants: &[Participant]) -> Vec<Participant>;
}

/// Seeding strategy selector
#[enum_dispatch(Seeding)]
pub enum GroupingStrategy {
    InputOrder,
    Shuffled,
}

impl Default for GroupingStrategy {
    fn default() -> Self {
        Self::from(InputOrder)
    }
}

/// Keeps participants in the order the caller supplied them.
pub struct InputOrder;

impl Seeding for InputOrder {
    fn seed(&mut self, participants: &[Participant]) -> Vec<Participant> {
        participants.to_vec()
    }
}

/// Randomizes the seeding order on every call.
pub struct Shuffled {
    rng: rand::rngs::ThreadRng,
}

impl Shuffled {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for Shuffled {
    fn default() -> Self {
        Self::new()
    }
}

impl Seeding for Shuffled {
    fn seed(&mut self, participants: &[Participant]) -> Vec<Participant> {
        let mut seeded = participants.to_vec();
        seeded.shuffle(&mut self.rng);
        seeded
    }
}
