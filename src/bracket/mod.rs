//! Bracket and round generation for tournament formats.
//!
//! This module provides tournament structure generation including:
//! - Round-robin scheduling (circle method, with bye rotation)
//! - Free-for-all group phases collapsing to a final
//! - Single-elimination brackets with bye padding
//! - Pluggable seeding strategies for group assignment
//!
//! ## Example
//!
//! ```
//! use bracket_engine::bracket::{Format, Participant, generate_rounds};
//!
//! let players: Vec<Participant> = ["ana", "bruno", "carla", "diego"]
//!     .into_iter()
//!     .map(Participant::new)
//!     .collect();
//!
//! let rounds = generate_rounds(players.len(), &players, Format::RoundRobin)?;
//! assert_eq!(rounds.len(), 3);
//! # Ok::<(), bracket_engine::bracket::BracketError>(())
//! ```

pub mod errors;
pub mod generator;
pub mod grouping;
pub mod models;

pub use errors::{BracketError, BracketResult};
pub use generator::{generate_rounds, generate_rounds_with};
pub use grouping::{GroupingStrategy, InputOrder, Seeding, Shuffled};
pub use models::{
    BYE_NAME, Bracket, DEFAULT_GROUP_CAPACITY, Format, FreeForAllConfig, Match, Participant, Round,
};
