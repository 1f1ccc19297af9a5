//! Financial data models.

use serde::{Deserialize, Serialize};

use super::errors::{FinanceError, FinanceResult};

/// Type alias for decimal currency amounts. Every amount the engine emits
/// is rounded to whole cents; intermediate values keep full precision.
pub type Money = f64;

/// Default share of gross revenue retained by the platform, in percent.
pub const DEFAULT_PLATFORM_FEE_PERCENT: f64 = 10.0;

/// Revenue configuration
///
/// The fee rate is injected rather than read from a global so callers can
/// run alternate rates side by side.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct RevenueConfig {
    /// Share of gross revenue retained by the platform (percent).
    pub platform_fee_percent: f64,
}

impl Default for RevenueConfig {
    fn default() -> Self {
        Self {
            platform_fee_percent: DEFAULT_PLATFORM_FEE_PERCENT,
        }
    }
}

impl RevenueConfig {
    pub fn new(platform_fee_percent: f64) -> Self {
        Self {
            platform_fee_percent,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> FinanceResult<()> {
        if !self.platform_fee_percent.is_finite() || self.platform_fee_percent < 0.0 {
            return Err(FinanceError::InvalidFeePercent(self.platform_fee_percent));
        }
        Ok(())
    }
}

/// A requested prize allocation: a finishing position and its share of the
/// net pool. Percentages are not required to sum to 100; any remainder is
/// the organizer residual.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct PrizeDistribution {
    /// Finishing position (1-indexed).
    pub position: usize,
    /// Share of net revenue (percent, 0-100 by convention).
    pub percentage: f64,
}

impl PrizeDistribution {
    pub fn new(position: usize, percentage: f64) -> Self {
        Self {
            position,
            percentage,
        }
    }
}

/// A computed prize allocation.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct PrizeSplit {
    pub position: usize,
    pub percentage: f64,
    pub amount: Money,
}

/// Derived financial breakdown for one tournament. Computed on demand,
/// never persisted by the engine.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub gross_amount: Money,
    pub platform_fee: Money,
    pub net_revenue: Money,
    pub prizes: Vec<PrizeSplit>,
    /// Net revenue not awarded as prizes.
    pub organizer_residual: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RevenueConfig::default();
        assert_eq!(config.platform_fee_percent, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(RevenueConfig::new(0.0).validate().is_ok());
        assert!(RevenueConfig::new(7.5).validate().is_ok());

        let err = RevenueConfig::new(-1.0).validate().unwrap_err();
        assert_eq!(err, FinanceError::InvalidFeePercent(-1.0));

        assert!(RevenueConfig::new(f64::NAN).validate().is_err());
        assert!(RevenueConfig::new(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_prize_distribution_new() {
        let dist = PrizeDistribution::new(1, 60.0);
        assert_eq!(dist.position, 1);
        assert_eq!(dist.percentage, 60.0);
    }
}
