//! Statement validation: normalizes transactions and checks balance integrity
//!
//! Validation is a pure transform. Rows that cannot be matched (missing date,
//! amount, or direction, or a non-positive amount) are skipped and counted,
//! never fatal. A balance mismatch is likewise only a warning flag; matching
//! still runs so the caller can decide what to block downstream.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ReconciliationConfig;
use crate::types::{Statement, TransactionKind};

/// A statement transaction that passed validation, with all fields the
/// matcher depends on resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTransaction {
    /// Position in the original statement sequence. Stable across skips, so
    /// report indices always refer back to the ingested statement.
    pub index: usize,
    pub date: NaiveDate,
    pub description: String,
    pub amount: BigDecimal,
    pub kind: TransactionKind,
}

/// Aggregate totals for a validated statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    #[serde(rename = "total_debitos")]
    pub total_debits: BigDecimal,
    #[serde(rename = "total_creditos")]
    pub total_credits: BigDecimal,
    #[serde(rename = "quantidade_debitos")]
    pub debit_count: usize,
    #[serde(rename = "quantidade_creditos")]
    pub credit_count: usize,
    /// Closing balance implied by the transactions: opening + credits - debits
    #[serde(rename = "saldo_calculado")]
    pub computed_closing: BigDecimal,
    /// Calendar days the statement period spans; negative when the statement
    /// reports an inverted period (see [`StatementPeriod::days`](crate::types::StatementPeriod::days))
    #[serde(rename = "dias_periodo")]
    pub period_days: i64,
}

/// Output of statement validation: the transactions worth matching plus
/// integrity signals for the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedStatement {
    pub transactions: Vec<ValidatedTransaction>,
    /// Rows rejected for missing or non-positive fields
    pub skipped: usize,
    /// Whether opening + credits - debits equals the closing balance within
    /// the configured epsilon
    pub balance_reconciled: bool,
    pub summary: StatementSummary,
}

/// Validates and normalizes a parsed statement
pub struct StatementValidator<'c> {
    config: &'c ReconciliationConfig,
}

impl<'c> StatementValidator<'c> {
    pub fn new(config: &'c ReconciliationConfig) -> Self {
        Self { config }
    }

    /// Run validation over the statement. Pure: no I/O, the input is not
    /// modified.
    pub fn validate(&self, statement: &Statement) -> ValidatedStatement {
        let zero = BigDecimal::from(0);
        let mut transactions = Vec::with_capacity(statement.transactions.len());
        let mut skipped = 0usize;
        let mut total_debits = zero.clone();
        let mut total_credits = zero.clone();
        let mut debit_count = 0usize;
        let mut credit_count = 0usize;

        for (index, raw) in statement.transactions.iter().enumerate() {
            let (date, amount, kind) = match (&raw.date, &raw.amount, &raw.kind) {
                (Some(date), Some(amount), Some(kind)) if *amount > zero => {
                    (*date, amount.clone(), *kind)
                }
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            match kind {
                TransactionKind::Debit => {
                    total_debits += &amount;
                    debit_count += 1;
                }
                TransactionKind::Credit => {
                    total_credits += &amount;
                    credit_count += 1;
                }
            }

            transactions.push(ValidatedTransaction {
                index,
                date,
                description: raw.description.trim().to_string(),
                amount,
                kind,
            });
        }

        let computed_closing = &statement.opening_balance + &total_credits - &total_debits;
        let balance_reconciled = (&computed_closing - &statement.closing_balance).abs()
            <= self.config.balance_epsilon;

        ValidatedStatement {
            transactions,
            skipped,
            balance_reconciled,
            summary: StatementSummary {
                total_debits,
                total_credits,
                debit_count,
                credit_count,
                computed_closing,
                period_days: statement.period.days(),
            },
        }
    }
}
