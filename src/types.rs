//! Core types and data structures for the reconciliation engine
//!
//! Wire-facing types carry `#[serde(rename)]` attributes so that serialized
//! JSON matches the upstream ingestion contract (Portuguese field names),
//! while the Rust API stays in English.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a statement transaction as reported by the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money leaving the account
    #[serde(rename = "debito")]
    Debit,
    /// Money entering the account
    #[serde(rename = "credito")]
    Credit,
}

impl TransactionKind {
    /// Returns the ledger-entry direction this transaction kind may pair with.
    /// Debits reconcile against payments made; credits against payments received.
    pub fn matching_entry_kind(&self) -> LedgerEntryKind {
        match self {
            TransactionKind::Debit => LedgerEntryKind::PaymentMade,
            TransactionKind::Credit => LedgerEntryKind::PaymentReceived,
        }
    }
}

/// Direction of an internal ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerEntryKind {
    /// Accounts-payable settlement (money out)
    #[serde(rename = "pagamento_efetuado")]
    PaymentMade,
    /// Accounts-receivable settlement (money in)
    #[serde(rename = "pagamento_recebido")]
    PaymentReceived,
}

/// The period a statement covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPeriod {
    #[serde(rename = "data_inicio")]
    pub start: NaiveDate,
    #[serde(rename = "data_fim")]
    pub end: NaiveDate,
}

impl StatementPeriod {
    /// Number of calendar days the period spans.
    ///
    /// Signed: an inverted period (`end` before `start`) yields a negative
    /// count. The engine does not reorder the period for the caller; the
    /// negative value is carried into the statement summary so the anomaly
    /// stays visible downstream.
    pub fn days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }
}

/// A single transaction line as extracted from the bank statement.
///
/// Extraction upstream is lossy, so the fields the matcher depends on are
/// optional here; rows missing any of them are skipped (and counted) by the
/// statement validator rather than failing the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementTransaction {
    #[serde(rename = "data")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: Option<BigDecimal>,
    #[serde(rename = "tipo")]
    pub kind: Option<TransactionKind>,
    /// Running balance after this transaction, when the statement reports it
    #[serde(rename = "saldo_apos", skip_serializing_if = "Option::is_none")]
    pub balance_after: Option<BigDecimal>,
}

/// A parsed bank statement for one account and period.
///
/// Created once per ingested file; the engine treats it as immutable input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(rename = "banco")]
    pub bank: String,
    #[serde(rename = "conta")]
    pub account: String,
    #[serde(rename = "agencia", default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(rename = "periodo")]
    pub period: StatementPeriod,
    #[serde(rename = "saldo_inicial")]
    pub opening_balance: BigDecimal,
    #[serde(rename = "saldo_final")]
    pub closing_balance: BigDecimal,
    #[serde(rename = "transacoes")]
    pub transactions: Vec<StatementTransaction>,
}

/// An internal accounts-payable/receivable record supplied by the ledger
/// repository. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    #[serde(rename = "data")]
    pub reference_date: NaiveDate,
    #[serde(rename = "contraparte", default)]
    pub counterparty: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: BigDecimal,
    /// Source document reference (accounts-payable/receivable id), if any
    #[serde(rename = "origem", default, skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,
    /// Entries already reconciled in a previous run are never offered as
    /// candidates again
    #[serde(rename = "conciliado", default)]
    pub reconciled: bool,
}

impl LedgerEntry {
    /// Text the description scorer compares against: counterparty plus the
    /// free-text description of the entry.
    pub fn match_text(&self) -> String {
        if self.description.is_empty() {
            self.counterparty.clone()
        } else if self.counterparty.is_empty() {
            self.description.clone()
        } else {
            format!("{} {}", self.counterparty, self.description)
        }
    }
}

/// Ledger entries for the statement period, grouped by direction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntries {
    #[serde(rename = "pagamentos_efetuados", default)]
    pub payments_made: Vec<LedgerEntry>,
    #[serde(rename = "pagamentos_recebidos", default)]
    pub payments_received: Vec<LedgerEntry>,
}

impl LedgerEntries {
    /// Entries for the given direction
    pub fn entries_for(&self, kind: LedgerEntryKind) -> &[LedgerEntry] {
        match kind {
            LedgerEntryKind::PaymentMade => &self.payments_made,
            LedgerEntryKind::PaymentReceived => &self.payments_received,
        }
    }

    /// Total number of entries across both directions
    pub fn len(&self) -> usize {
        self.payments_made.len() + self.payments_received.len()
    }

    /// True when no entries were supplied for the period
    pub fn is_empty(&self) -> bool {
        self.payments_made.is_empty() && self.payments_received.is_empty()
    }
}

/// Scored pairing of one statement transaction with one ledger entry.
///
/// Ephemeral: produced by the scoring engine, consumed by the global matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    /// Position of the transaction in the original statement sequence
    pub transaction_index: usize,
    pub ledger_entry_id: String,
    pub amount_score: f64,
    pub date_score: f64,
    pub description_score: f64,
    pub total_score: f64,
    /// Absolute difference in calendar days, kept for deterministic tie-breaks
    pub date_delta_days: i64,
}

/// Final classification of a statement transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Auto-accepted pairing (score at or above the auto-match threshold)
    #[serde(rename = "conciliado")]
    Matched,
    /// Pairing found but below the threshold; needs human confirmation
    #[serde(rename = "possivel_match")]
    Suggested,
    /// No eligible ledger entry remained for this transaction
    #[serde(rename = "divergencia")]
    Unmatched,
}

/// Per-transaction outcome of a reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "transacao_index")]
    pub transaction_index: usize,
    pub classification: Classification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_entry_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Heuristic annotation for unmatched transactions (e.g. likely bank fee)
    #[serde(rename = "observacao", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Errors that can occur in the reconciliation engine.
///
/// Malformed transactions, balance mismatches, and empty ledger sets are
/// recovered conditions surfaced in the report, not errors; only invalid
/// configuration and upstream source failures are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ReconciliationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Ledger source error: {0}")]
    Source(String),
}

/// Result type for reconciliation operations
pub type ReconciliationResult<T> = Result<T, ReconciliationError>;
