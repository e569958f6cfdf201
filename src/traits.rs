//! Traits for upstream integration
//!
//! The engine itself is pure and synchronous; fetching ledger entries is an
//! upstream concern that is usually backed by a database or HTTP service.
//! This seam lets callers plug any backend in without touching the pipeline.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::{LedgerEntries, ReconciliationResult};

/// Provider of ledger entries for a date window.
///
/// Implementations typically query the accounts-payable/receivable store for
/// payments whose reference date falls inside the statement period (the
/// engine widens the window by its pre-filter margin before calling this).
#[async_trait]
pub trait LedgerEntrySource: Send + Sync {
    /// Fetch all entries with a reference date in `[start, end]`
    async fn fetch_entries(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReconciliationResult<LedgerEntries>;
}
