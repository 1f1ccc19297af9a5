//! # Bracket Engine
//!
//! A tournament bracket and prize split library.
//!
//! This crate provides the two pure computational cores of a tournament
//! platform: structure generation (who plays whom, in which round) and the
//! financial split pipeline (what the platform keeps, what each finishing
//! position wins). Both are synchronous, side-effect-free functions over
//! caller-supplied values; persistence, transport, and authorization
//! belong to the caller.
//!
//! ## Architecture
//!
//! - Round-robin schedules use the circle method: one participant stays
//!   fixed while the rest rotate, so no pairing ever repeats and every
//!   participant plays in every round. Odd rosters get a rotating bye.
//! - Free-for-all tournaments slice the seeded roster into fixed-capacity
//!   groups ("Fase 1", "Fase 2", ...) collapsing to a single "Final".
//! - Elimination brackets pad the roster with byes to a power of two and
//!   pair across the seeding.
//! - Money math flows through one cent-rounding helper with
//!   half-away-from-zero semantics.
//!
//! ## Core Modules
//!
//! - [`bracket`]: participants, matches, rounds, and round generation
//! - [`finance`]: platform fee, net revenue, and prize split calculations
//!
//! ## Example
//!
//! ```
//! use bracket_engine::{Format, Participant, generate_rounds};
//!
//! let players: Vec<Participant> = (1..=6)
//!     .map(|i| Participant::new(format!("player{i}")))
//!     .collect();
//!
//! let rounds = generate_rounds(players.len(), &players, Format::RoundRobin)?;
//! assert_eq!(rounds.len(), 5);
//! # Ok::<(), bracket_engine::BracketError>(())
//! ```

/// Bracket and round generation for tournament formats.
pub mod bracket;
pub use bracket::{
    BYE_NAME, Bracket, BracketError, BracketResult, DEFAULT_GROUP_CAPACITY, Format,
    FreeForAllConfig, GroupingStrategy, InputOrder, Match, Participant, Round, Seeding, Shuffled,
    generate_rounds, generate_rounds_with,
};

/// Financial split engine: fees, net revenue, and prize amounts.
pub mod finance;
pub use finance::{
    DEFAULT_PLATFORM_FEE_PERCENT, FinanceError, FinanceResult, FinancialSummary, Money,
    PrizeDistribution, PrizeSplit, RevenueConfig, round_to_cents,
};
