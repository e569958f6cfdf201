//! Pair scoring: multi-factor compatibility of one transaction against one
//! candidate ledger entry
//!
//! Amount and date are hard gates; a pair failing either never enters the
//! candidate set. Surviving pairs score in `[50, 100]`: the amount gate
//! always contributes its full weight, the date component decays linearly
//! with the day delta, and the description component scales a text
//! similarity into its weight.

use crate::config::{ReconciliationConfig, AMOUNT_WEIGHT, DATE_WEIGHT, DESCRIPTION_WEIGHT};
use crate::matching::similarity::TextSimilarity;
use crate::statement::ValidatedTransaction;
use crate::types::{LedgerEntry, MatchCandidate};

/// Scores (transaction, ledger entry) pairs. Stateless between pairs, so
/// scoring is safe to run for all pairs in any order.
pub struct ScoringEngine<'a> {
    config: &'a ReconciliationConfig,
    similarity: &'a dyn TextSimilarity,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(config: &'a ReconciliationConfig, similarity: &'a dyn TextSimilarity) -> Self {
        Self { config, similarity }
    }

    /// Score one pair. Returns `None` when the amount or date gate fails;
    /// the pair is then excluded from the candidate set entirely.
    pub fn score_pair(
        &self,
        transaction: &ValidatedTransaction,
        entry: &LedgerEntry,
    ) -> Option<MatchCandidate> {
        let amount_delta = (&transaction.amount - &entry.amount).abs();
        if amount_delta > self.config.amount_tolerance {
            return None;
        }

        let date_delta_days = transaction
            .date
            .signed_duration_since(entry.reference_date)
            .num_days()
            .abs();
        if date_delta_days > self.config.date_tolerance_days {
            return None;
        }

        let amount_score = AMOUNT_WEIGHT;
        let date_score = self.date_score(date_delta_days);
        let description_score = DESCRIPTION_WEIGHT
            * self
                .similarity
                .score(&transaction.description, &entry.match_text());

        Some(MatchCandidate {
            transaction_index: transaction.index,
            ledger_entry_id: entry.id.clone(),
            amount_score,
            date_score,
            description_score,
            total_score: amount_score + date_score + description_score,
            date_delta_days,
        })
    }

    /// Linear decay: full weight at zero days, zero at the tolerance edge.
    /// With zero tolerance only same-day pairs survive the gate and take the
    /// full weight.
    ///
    /// The product is formed before the division so the canonical values at
    /// the default tolerance (30, 20, 10, 0) come out exact in f64.
    fn date_score(&self, delta_days: i64) -> f64 {
        let tolerance = self.config.date_tolerance_days;
        if tolerance == 0 {
            return DATE_WEIGHT;
        }
        DATE_WEIGHT * (tolerance - delta_days) as f64 / tolerance as f64
    }
}
