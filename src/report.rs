//! Final reconciliation report: pure aggregation of the per-transaction
//! results plus the integrity signals from validation

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::statement::{StatementSummary, ValidatedStatement};
use crate::types::{Classification, MatchResult};

/// Per-classification counts, amount sums, and the overall match rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(rename = "total_transacoes")]
    pub total_transactions: usize,
    #[serde(rename = "conciliadas")]
    pub matched: usize,
    #[serde(rename = "pendentes_confirmacao")]
    pub suggested: usize,
    #[serde(rename = "divergencias")]
    pub unmatched: usize,
    /// Statement rows dropped by validation (missing date, amount, or
    /// direction)
    #[serde(rename = "transacoes_ignoradas")]
    pub skipped: usize,
    #[serde(rename = "valor_conciliado")]
    pub matched_amount: BigDecimal,
    #[serde(rename = "valor_pendente")]
    pub suggested_amount: BigDecimal,
    #[serde(rename = "valor_divergente")]
    pub unmatched_amount: BigDecimal,
    /// Matched over total classified, in `[0, 1]`; zero for an empty run
    #[serde(rename = "taxa_conciliacao")]
    pub match_rate: f64,
}

/// The externally returned artifact of a reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Whether opening + credits - debits agreed with the closing balance.
    /// A `false` here is a warning: matching still ran, and the caller
    /// decides whether to block downstream posting.
    #[serde(rename = "balanceReconciled")]
    pub balance_reconciled: bool,
    #[serde(rename = "resumo")]
    pub summary: ReportSummary,
    /// Totals computed over the validated statement
    #[serde(rename = "extrato")]
    pub statement_summary: StatementSummary,
    pub matches: Vec<MatchResult>,
}

impl ReconciliationReport {
    /// Aggregate the match results for a validated statement.
    ///
    /// `matches` must be in the same order as the validated transactions;
    /// amounts are taken pairwise from them.
    pub fn build(validated: &ValidatedStatement, matches: Vec<MatchResult>) -> Self {
        let zero = BigDecimal::from(0);
        let mut matched = 0usize;
        let mut suggested = 0usize;
        let mut unmatched = 0usize;
        let mut matched_amount = zero.clone();
        let mut suggested_amount = zero.clone();
        let mut unmatched_amount = zero;

        for (tx, result) in validated.transactions.iter().zip(&matches) {
            match result.classification {
                Classification::Matched => {
                    matched += 1;
                    matched_amount += &tx.amount;
                }
                Classification::Suggested => {
                    suggested += 1;
                    suggested_amount += &tx.amount;
                }
                Classification::Unmatched => {
                    unmatched += 1;
                    unmatched_amount += &tx.amount;
                }
            }
        }

        let total = matches.len();
        let match_rate = if total == 0 {
            0.0
        } else {
            matched as f64 / total as f64
        };

        Self {
            balance_reconciled: validated.balance_reconciled,
            summary: ReportSummary {
                total_transactions: total,
                matched,
                suggested,
                unmatched,
                skipped: validated.skipped,
                matched_amount,
                suggested_amount,
                unmatched_amount,
                match_rate,
            },
            statement_summary: validated.summary.clone(),
            matches,
        }
    }
}
