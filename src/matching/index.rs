//! Candidate index: windowed lookup of ledger entries by direction and date

use chrono::NaiveDate;

use crate::types::{LedgerEntries, LedgerEntry, LedgerEntryKind};

/// Ledger entries indexed by direction and sorted by reference date, so each
/// transaction only ever sees the entries inside its pre-filter window.
///
/// Entries already flagged as reconciled are excluded at build time; they can
/// never be double-booked by a later run.
pub struct CandidateIndex<'a> {
    payments_made: Vec<&'a LedgerEntry>,
    payments_received: Vec<&'a LedgerEntry>,
}

impl<'a> CandidateIndex<'a> {
    /// Build the index from the period's ledger entries
    pub fn build(entries: &'a LedgerEntries) -> Self {
        let mut payments_made = Self::collect(&entries.payments_made);
        let mut payments_received = Self::collect(&entries.payments_received);

        // sort by (date, id) so window slices are deterministic
        let key = |e: &&LedgerEntry| (e.reference_date, e.id.clone());
        payments_made.sort_by_key(key);
        payments_received.sort_by_key(key);

        Self {
            payments_made,
            payments_received,
        }
    }

    fn collect(entries: &[LedgerEntry]) -> Vec<&LedgerEntry> {
        entries.iter().filter(|e| !e.reconciled).collect()
    }

    /// Entries of the given direction whose reference date lies within
    /// `window_days` of `date` (inclusive on both ends)
    pub fn candidates_within(
        &self,
        kind: LedgerEntryKind,
        date: NaiveDate,
        window_days: i64,
    ) -> &[&'a LedgerEntry] {
        let entries = match kind {
            LedgerEntryKind::PaymentMade => &self.payments_made,
            LedgerEntryKind::PaymentReceived => &self.payments_received,
        };

        let lo = date - chrono::Duration::days(window_days);
        let hi = date + chrono::Duration::days(window_days);

        let start = entries.partition_point(|e| e.reference_date < lo);
        let end = entries.partition_point(|e| e.reference_date <= hi);
        &entries[start..end]
    }

    /// Number of indexed (non-reconciled) entries across both directions
    pub fn len(&self) -> usize {
        self.payments_made.len() + self.payments_received.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments_made.is_empty() && self.payments_received.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn entry(id: &str, date: (i32, u32, u32), reconciled: bool) -> LedgerEntry {
        LedgerEntry {
            id: id.to_string(),
            reference_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            counterparty: "Fornecedor".to_string(),
            description: String::new(),
            amount: BigDecimal::from(100),
            source_ref: None,
            reconciled,
        }
    }

    fn entries(payments_made: Vec<LedgerEntry>) -> LedgerEntries {
        LedgerEntries {
            payments_made,
            payments_received: Vec::new(),
        }
    }

    #[test]
    fn test_window_is_inclusive() {
        let entries = entries(vec![
            entry("a", (2024, 1, 1), false),
            entry("b", (2024, 1, 5), false),
            entry("c", (2024, 1, 10), false),
            entry("d", (2024, 1, 15), false),
        ]);
        let index = CandidateIndex::build(&entries);

        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let hits = index.candidates_within(LedgerEntryKind::PaymentMade, date, 5);
        let ids: Vec<_> = hits.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_direction_separation() {
        let entries = LedgerEntries {
            payments_made: vec![entry("made", (2024, 1, 10), false)],
            payments_received: vec![entry("received", (2024, 1, 10), false)],
        };
        let index = CandidateIndex::build(&entries);

        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let made = index.candidates_within(LedgerEntryKind::PaymentMade, date, 5);
        assert_eq!(made.len(), 1);
        assert_eq!(made[0].id, "made");

        let received = index.candidates_within(LedgerEntryKind::PaymentReceived, date, 5);
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].id, "received");
    }

    #[test]
    fn test_reconciled_entries_excluded() {
        let entries = entries(vec![
            entry("open", (2024, 1, 10), false),
            entry("done", (2024, 1, 10), true),
        ]);
        let index = CandidateIndex::build(&entries);
        assert_eq!(index.len(), 1);

        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let hits = index.candidates_within(LedgerEntryKind::PaymentMade, date, 5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "open");
    }

    #[test]
    fn test_wider_window_never_loses_candidates() {
        let entries = entries(vec![
            entry("a", (2024, 1, 2), false),
            entry("b", (2024, 1, 8), false),
            entry("c", (2024, 1, 13), false),
        ]);
        let index = CandidateIndex::build(&entries);
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();

        let mut previous = 0;
        for window in 0..10 {
            let count = index
                .candidates_within(LedgerEntryKind::PaymentMade, date, window)
                .len();
            assert!(count >= previous);
            previous = count;
        }
    }
}
