//! Tolerance and threshold configuration for a reconciliation run

use bigdecimal::BigDecimal;

use crate::types::{ReconciliationError, ReconciliationResult};

/// Weight of the amount component in a pair's total score.
/// The amount check is a hard gate, so every surviving pair earns the full
/// weight; there is no partial credit for near-misses.
pub const AMOUNT_WEIGHT: f64 = 50.0;

/// Weight of the date component; decays linearly with the day delta
pub const DATE_WEIGHT: f64 = 30.0;

/// Weight of the description-similarity component
pub const DESCRIPTION_WEIGHT: f64 = 20.0;

/// Tunable constants for matching. Defaults mirror the business rules:
/// amounts within R$ 0.10, dates within 3 days, auto-match at score 80.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationConfig {
    /// Maximum absolute amount difference for a pair to be eligible
    pub amount_tolerance: BigDecimal,
    /// Maximum calendar-day distance for a pair to be eligible
    pub date_tolerance_days: i64,
    /// Candidate pre-filter window in days. A generous super-set of
    /// `date_tolerance_days` used only to bound candidate volume.
    pub prefilter_window_days: i64,
    /// Total score at or above which a pairing is auto-accepted
    pub auto_match_threshold: f64,
    /// Tolerance when checking opening + credits - debits against the
    /// closing balance
    pub balance_epsilon: BigDecimal,
    /// Unmatched debits at or below this amount are annotated as a likely
    /// bank fee
    pub bank_fee_ceiling: BigDecimal,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            amount_tolerance: BigDecimal::new(10.into(), 2), // 0.10
            date_tolerance_days: 3,
            prefilter_window_days: 5,
            auto_match_threshold: 80.0,
            balance_epsilon: BigDecimal::new(1.into(), 2), // 0.01
            bank_fee_ceiling: BigDecimal::from(50),
        }
    }
}

impl ReconciliationConfig {
    /// Default configuration with a different date tolerance. The pre-filter
    /// window is widened along with it so it never undercuts the gate.
    pub fn with_date_tolerance(days: i64) -> Self {
        let default = Self::default();
        Self {
            date_tolerance_days: days,
            prefilter_window_days: days.max(default.prefilter_window_days),
            ..default
        }
    }

    /// Default configuration with a different auto-match threshold
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            auto_match_threshold: threshold,
            ..Self::default()
        }
    }

    /// Validate the configuration. Invalid configuration is the one fatal
    /// error class: it is rejected before any scoring begins.
    pub fn validate(&self) -> ReconciliationResult<()> {
        let zero = BigDecimal::from(0);

        if self.amount_tolerance < zero {
            return Err(ReconciliationError::InvalidConfig(format!(
                "amount tolerance must be non-negative, got {}",
                self.amount_tolerance
            )));
        }

        if self.date_tolerance_days < 0 {
            return Err(ReconciliationError::InvalidConfig(format!(
                "date tolerance must be non-negative, got {} days",
                self.date_tolerance_days
            )));
        }

        if self.prefilter_window_days < self.date_tolerance_days {
            return Err(ReconciliationError::InvalidConfig(format!(
                "pre-filter window ({} days) cannot be narrower than the date tolerance ({} days)",
                self.prefilter_window_days, self.date_tolerance_days
            )));
        }

        if !self.auto_match_threshold.is_finite()
            || self.auto_match_threshold <= 0.0
            || self.auto_match_threshold > 100.0
        {
            return Err(ReconciliationError::InvalidConfig(format!(
                "auto-match threshold must be in (0, 100], got {}",
                self.auto_match_threshold
            )));
        }

        if self.balance_epsilon < zero {
            return Err(ReconciliationError::InvalidConfig(format!(
                "balance epsilon must be non-negative, got {}",
                self.balance_epsilon
            )));
        }

        if self.bank_fee_ceiling < zero {
            return Err(ReconciliationError::InvalidConfig(format!(
                "bank fee ceiling must be non-negative, got {}",
                self.bank_fee_ceiling
            )));
        }

        Ok(())
    }
}
