//! Financial split engine: platform fee, net revenue, and prize splits.
//!
//! The pipeline is deterministic and pure: gross collected amount ->
//! platform fee -> net revenue -> per-position prize amounts. Rounding
//! happens once per emitted amount, at the cent level, half away from
//! zero.
//!
//! ## Example
//!
//! ```
//! use bracket_engine::finance::{PrizeDistribution, RevenueConfig};
//!
//! let config = RevenueConfig::default();
//! let net = config.net_revenue(1600.0)?;
//! assert_eq!(net, 1440.0);
//!
//! let splits = config.prize_splits(
//!     net,
//!     &[
//!         PrizeDistribution::new(1, 60.0),
//!         PrizeDistribution::new(2, 30.0),
//!         PrizeDistribution::new(3, 10.0),
//!     ],
//! )?;
//! assert_eq!(splits[0].amount, 864.0);
//! # Ok::<(), bracket_engine::finance::FinanceError>(())
//! ```

pub mod engine;
pub mod errors;
pub mod models;

pub use engine::round_to_cents;
pub use errors::{FinanceError, FinanceResult};
pub use models::{
    DEFAULT_PLATFORM_FEE_PERCENT, FinancialSummary, Money, PrizeDistribution, PrizeSplit,
    RevenueConfig,
};
