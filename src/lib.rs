//! # Reconciliation Core
//!
//! A bank reconciliation matching engine: pairs the transactions of a parsed
//! bank statement with the internal ledger payments of the same period.
//!
//! ## Features
//!
//! - **Statement validation**: normalizes transactions, skips malformed rows,
//!   and checks opening + credits - debits against the closing balance
//! - **Tolerance-gated scoring**: amount and date act as hard gates; surviving
//!   pairs score on amount, date proximity, and description similarity
//! - **Deterministic assignment**: greedy maximum-weight matching with total
//!   tie-break ordering, so reruns over the same snapshot are identical
//! - **Classification**: Matched (auto-accepted), Suggested (needs human
//!   confirmation), or Unmatched, with a bank-fee heuristic for small
//!   unmatched debits
//! - **Exact arithmetic**: all monetary values are `BigDecimal`; no
//!   floating-point accumulation in sums
//!
//! ## Quick Start
//!
//! ```rust
//! use reconciliation_core::{reconcile, ReconciliationConfig, LedgerEntries, Statement};
//!
//! # fn run(statement: &Statement, entries: &LedgerEntries) {
//! let report = reconcile(statement, entries, ReconciliationConfig::default()).unwrap();
//! println!(
//!     "{} matched, {} suggested, {} unmatched",
//!     report.summary.matched, report.summary.suggested, report.summary.unmatched
//! );
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod matching;
pub mod report;
pub mod statement;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use engine::*;
pub use matching::*;
pub use report::*;
pub use statement::*;
pub use traits::*;
pub use types::*;
