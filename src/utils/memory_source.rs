//! In-memory ledger entry source for testing and examples

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::traits::LedgerEntrySource;
use crate::types::{LedgerEntries, LedgerEntry, ReconciliationResult};

/// Holds ledger entries in memory and serves date-window queries over them.
/// Useful as a test double and for examples; production callers implement
/// [`LedgerEntrySource`] over their own store.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedgerSource {
    entries: LedgerEntries,
}

impl MemoryLedgerSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: LedgerEntries) -> Self {
        Self { entries }
    }

    /// Register a payment-made entry (reconciles against debits)
    pub fn add_payment_made(&mut self, entry: LedgerEntry) {
        self.entries.payments_made.push(entry);
    }

    /// Register a payment-received entry (reconciles against credits)
    pub fn add_payment_received(&mut self, entry: LedgerEntry) {
        self.entries.payments_received.push(entry);
    }
}

#[async_trait]
impl LedgerEntrySource for MemoryLedgerSource {
    async fn fetch_entries(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReconciliationResult<LedgerEntries> {
        let in_window =
            |entry: &&LedgerEntry| entry.reference_date >= start && entry.reference_date <= end;

        Ok(LedgerEntries {
            payments_made: self
                .entries
                .payments_made
                .iter()
                .filter(in_window)
                .cloned()
                .collect(),
            payments_received: self
                .entries
                .payments_received
                .iter()
                .filter(in_window)
                .cloned()
                .collect(),
        })
    }
}
