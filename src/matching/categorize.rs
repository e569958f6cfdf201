//! Classification of transactions after global assignment

use std::collections::{HashMap, HashSet};

use crate::config::ReconciliationConfig;
use crate::matching::matcher::Assignment;
use crate::statement::ValidatedTransaction;
use crate::types::{Classification, MatchResult, TransactionKind};

/// Annotation applied to unmatched small debits that never had a candidate
pub const BANK_FEE_NOTE: &str = "possible bank fee";

/// Buckets each transaction into Matched / Suggested / Unmatched based on
/// its assignment and the auto-match threshold.
pub struct Categorizer<'c> {
    config: &'c ReconciliationConfig,
}

impl<'c> Categorizer<'c> {
    pub fn new(config: &'c ReconciliationConfig) -> Self {
        Self { config }
    }

    /// Produce one result per validated transaction, in statement order.
    ///
    /// `with_candidates` holds the indices of transactions for which at least
    /// one pair survived the gates; unmatched transactions outside that set
    /// diverged entirely and may earn a heuristic annotation.
    pub fn classify(
        &self,
        transactions: &[ValidatedTransaction],
        assignments: &HashMap<usize, Assignment>,
        with_candidates: &HashSet<usize>,
    ) -> Vec<MatchResult> {
        transactions
            .iter()
            .map(|tx| match assignments.get(&tx.index) {
                Some(assignment) => {
                    let classification =
                        if assignment.total_score >= self.config.auto_match_threshold {
                            Classification::Matched
                        } else {
                            Classification::Suggested
                        };
                    MatchResult {
                        transaction_index: tx.index,
                        classification,
                        ledger_entry_id: Some(assignment.ledger_entry_id.clone()),
                        score: Some(assignment.total_score),
                        note: None,
                    }
                }
                None => MatchResult {
                    transaction_index: tx.index,
                    classification: Classification::Unmatched,
                    ledger_entry_id: None,
                    score: None,
                    note: self.divergence_note(tx, with_candidates),
                },
            })
            .collect()
    }

    /// Small debit with no eligible candidate at all: most likely a bank fee
    /// the ledger never recorded.
    fn divergence_note(
        &self,
        tx: &ValidatedTransaction,
        with_candidates: &HashSet<usize>,
    ) -> Option<String> {
        let never_had_candidate = !with_candidates.contains(&tx.index);
        if never_had_candidate
            && tx.kind == TransactionKind::Debit
            && tx.amount <= self.config.bank_fee_ceiling
        {
            Some(BANK_FEE_NOTE.to_string())
        } else {
            None
        }
    }
}
