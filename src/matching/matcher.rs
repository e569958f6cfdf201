//! Global assignment: resolves the scored candidate set into a unique,
//! deterministic pairing
//!
//! Deliberately greedy rather than an optimal assignment solver (Hungarian
//! et al.): scores are coarse and anything under the auto-match threshold
//! goes to a human anyway, so the Suggested bucket absorbs the rare
//! suboptimal pick. This pass is the one synchronization point in the
//! pipeline; it must see the complete candidate set and runs sequentially.

use std::collections::{HashMap, HashSet};

use crate::types::MatchCandidate;

/// An accepted pairing of a transaction with a ledger entry
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub ledger_entry_id: String,
    pub total_score: f64,
}

/// Greedy maximum-weight matcher over the full candidate set
pub struct GlobalMatcher;

impl GlobalMatcher {
    /// Resolve assignments. Each transaction and each ledger entry is used at
    /// most once; the result is keyed by transaction index.
    ///
    /// Ordering is fully deterministic: score descending, then day delta
    /// ascending, then ledger entry id, then transaction index. Identical
    /// inputs always produce the identical assignment.
    pub fn assign(mut candidates: Vec<MatchCandidate>) -> HashMap<usize, Assignment> {
        candidates.sort_by(|a, b| {
            b.total_score
                .total_cmp(&a.total_score)
                .then_with(|| a.date_delta_days.cmp(&b.date_delta_days))
                .then_with(|| a.ledger_entry_id.cmp(&b.ledger_entry_id))
                .then_with(|| a.transaction_index.cmp(&b.transaction_index))
        });

        let mut assignments = HashMap::new();
        let mut taken_entries = HashSet::new();

        for candidate in candidates {
            if assignments.contains_key(&candidate.transaction_index)
                || taken_entries.contains(&candidate.ledger_entry_id)
            {
                continue;
            }
            taken_entries.insert(candidate.ledger_entry_id.clone());
            assignments.insert(
                candidate.transaction_index,
                Assignment {
                    ledger_entry_id: candidate.ledger_entry_id,
                    total_score: candidate.total_score,
                },
            );
        }

        assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(
        transaction_index: usize,
        entry_id: &str,
        total_score: f64,
        date_delta_days: i64,
    ) -> MatchCandidate {
        MatchCandidate {
            transaction_index,
            ledger_entry_id: entry_id.to_string(),
            amount_score: 50.0,
            date_score: 0.0,
            description_score: 0.0,
            total_score,
            date_delta_days,
        }
    }

    #[test]
    fn test_highest_score_wins_entry() {
        let assignments = GlobalMatcher::assign(vec![
            candidate(0, "lanc-001", 90.0, 1),
            candidate(1, "lanc-001", 80.0, 0),
        ]);

        assert_eq!(assignments[&0].ledger_entry_id, "lanc-001");
        assert!(!assignments.contains_key(&1));
    }

    #[test]
    fn test_loser_falls_back_to_next_best() {
        // two transactions both scoring 95 against the same entry; the loser
        // takes its next-best candidate
        let assignments = GlobalMatcher::assign(vec![
            candidate(0, "lanc-001", 95.0, 0),
            candidate(1, "lanc-001", 95.0, 1),
            candidate(1, "lanc-002", 70.0, 2),
        ]);

        assert_eq!(assignments[&0].ledger_entry_id, "lanc-001");
        assert_eq!(assignments[&1].ledger_entry_id, "lanc-002");
        assert_eq!(assignments[&1].total_score, 70.0);
    }

    #[test]
    fn test_tie_break_prefers_smaller_day_delta() {
        let assignments = GlobalMatcher::assign(vec![
            candidate(0, "lanc-001", 95.0, 2),
            candidate(1, "lanc-001", 95.0, 0),
        ]);

        assert_eq!(assignments[&1].ledger_entry_id, "lanc-001");
        assert!(!assignments.contains_key(&0));
    }

    #[test]
    fn test_tie_break_by_entry_id_then_index() {
        // same score, same delta: entry id ordering decides which pairing is
        // considered first, transaction index decides between equal pairings
        let assignments = GlobalMatcher::assign(vec![
            candidate(1, "lanc-002", 90.0, 1),
            candidate(0, "lanc-001", 90.0, 1),
            candidate(1, "lanc-001", 90.0, 1),
            candidate(0, "lanc-002", 90.0, 1),
        ]);

        assert_eq!(assignments[&0].ledger_entry_id, "lanc-001");
        assert_eq!(assignments[&1].ledger_entry_id, "lanc-002");
    }

    #[test]
    fn test_no_double_booking() {
        let mut candidates = Vec::new();
        for tx in 0..5 {
            for entry in ["lanc-001", "lanc-002"] {
                candidates.push(candidate(tx, entry, 80.0 + tx as f64, tx as i64));
            }
        }

        let assignments = GlobalMatcher::assign(candidates);
        let mut used: Vec<_> = assignments
            .values()
            .map(|a| a.ledger_entry_id.clone())
            .collect();
        used.sort();
        used.dedup();
        assert_eq!(used.len(), assignments.len());
        assert_eq!(assignments.len(), 2);
    }

    #[test]
    fn test_deterministic_across_input_order() {
        let forward = vec![
            candidate(0, "lanc-001", 95.0, 0),
            candidate(1, "lanc-001", 95.0, 0),
            candidate(1, "lanc-002", 85.0, 1),
            candidate(2, "lanc-002", 85.0, 1),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(GlobalMatcher::assign(forward), GlobalMatcher::assign(reversed));
    }
}
