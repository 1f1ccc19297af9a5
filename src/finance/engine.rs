//! Platform fee, net revenue, and prize split calculations.
//!
//! All money math funnels through [`round_to_cents`] so the rounding rule
//! lives in exactly one place. The pipeline is gross -> platform fee ->
//! net revenue -> prize splits; each step is a pure function of its
//! inputs.

use super::{
    errors::{FinanceError, FinanceResult},
    models::{FinancialSummary, Money, PrizeDistribution, PrizeSplit, RevenueConfig},
};

/// Round a decimal amount to whole cents, half away from zero.
///
/// This is standard currency rounding: 5.555 rounds to 5.56, -0.125 to
/// -0.13. `f64::round` already rounds half-way cases away from zero, so
/// scaling to cents first gives the cent-level rule the engine needs
/// (never banker's rounding).
pub fn round_to_cents(amount: Money) -> Money {
    (amount * 100.0).round() / 100.0
}

fn ensure_finite(field: &str, value: f64) -> FinanceResult<()> {
    if !value.is_finite() {
        return Err(FinanceError::NonFinite {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

impl RevenueConfig {
    /// Platform fee on a gross collected amount, rounded to cents.
    ///
    /// Negative gross amounts are accepted (refund flows); NaN and
    /// infinite inputs fail fast.
    pub fn platform_fee(&self, gross_amount: Money) -> FinanceResult<Money> {
        self.validate()?;
        ensure_finite("gross amount", gross_amount)?;
        Ok(round_to_cents(
            gross_amount * (self.platform_fee_percent / 100.0),
        ))
    }

    /// Gross minus the platform fee. No rounding beyond the fee's own.
    pub fn net_revenue(&self, gross_amount: Money) -> FinanceResult<Money> {
        Ok(gross_amount - self.platform_fee(gross_amount)?)
    }

    /// Per-position prize amounts over a net pool.
    ///
    /// Each amount is rounded independently, so the sum may drift from the
    /// pool by a few cents on pathological percentage sets. Result order
    /// matches input order. Percentages outside 0-100 are accepted but
    /// logged.
    pub fn prize_splits(
        &self,
        net_revenue: Money,
        distributions: &[PrizeDistribution],
    ) -> FinanceResult<Vec<PrizeSplit>> {
        ensure_finite("net revenue", net_revenue)?;

        let mut total_percentage = 0.0;
        let splits = distributions
            .iter()
            .map(|dist| {
                ensure_finite("percentage", dist.percentage)?;
                total_percentage += dist.percentage;
                Ok(PrizeSplit {
                    position: dist.position,
                    percentage: dist.percentage,
                    amount: round_to_cents(net_revenue * (dist.percentage / 100.0)),
                })
            })
            .collect::<FinanceResult<Vec<_>>>()?;

        if total_percentage > 100.0 {
            log::warn!("prize percentages sum to {total_percentage}, exceeding 100");
        }
        Ok(splits)
    }

    /// Full breakdown for a gross amount: fee, net, prizes, and the
    /// organizer residual (net revenue left after all prizes).
    pub fn summarize(
        &self,
        gross_amount: Money,
        distributions: &[PrizeDistribution],
    ) -> FinanceResult<FinancialSummary> {
        let platform_fee = self.platform_fee(gross_amount)?;
        let net_revenue = gross_amount - platform_fee;
        let prizes = self.prize_splits(net_revenue, distributions)?;
        let awarded: Money = prizes.iter().map(|split| split.amount).sum();

        Ok(FinancialSummary {
            gross_amount,
            platform_fee,
            net_revenue,
            prizes,
            organizer_residual: net_revenue - awarded,
        })
    }
}
