//! Basic reconciliation usage example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use reconciliation_core::utils::MemoryLedgerSource;
use reconciliation_core::{
    Classification, LedgerEntry, ReconciliationConfig, ReconciliationEngine, Statement,
    StatementPeriod, StatementTransaction, TransactionKind,
};
use std::str::FromStr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏦 Reconciliation Core - Basic Example\n");

    // 1. The parsed bank statement, as delivered by the ingestion service
    println!("📄 Statement: Banco Alfa, account 12345-6, January 2024");
    let statement = Statement {
        bank: "Banco Alfa".to_string(),
        account: "12345-6".to_string(),
        branch: Some("0001".to_string()),
        period: StatementPeriod {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        },
        opening_balance: BigDecimal::from_str("10000.00")?,
        closing_balance: BigDecimal::from_str("2787.10")?,
        transactions: vec![
            transaction("2024-01-15", "TED FORNECEDOR ABC LTDA", "8500.00", TransactionKind::Debit),
            transaction("2024-01-18", "PIX RECEB TECH SOLUTIONS", "5500.00", TransactionKind::Credit),
            transaction("2024-01-21", "BOLETO SERVICOS TECH XYZ", "4200.00", TransactionKind::Debit),
            transaction("2024-01-31", "TARIFA MANUTENCAO CONTA", "12.90", TransactionKind::Debit),
        ],
    };

    // 2. Ledger entries for the period, served through the source seam
    let mut source = MemoryLedgerSource::new();
    source.add_payment_made(entry("lanc-001", "2024-01-15", "Fornecedor ABC LTDA", "8500.00"));
    source.add_payment_received(entry("lanc-002", "2024-01-18", "Tech Solutions LTDA", "5500.00"));
    source.add_payment_made(entry("lanc-003", "2024-01-20", "Servicos Tech XYZ", "4200.00"));

    // 3. Reconcile
    let engine = ReconciliationEngine::new(ReconciliationConfig::default());
    let report = engine.reconcile_with_source(&statement, &source).await?;

    println!(
        "\n💵 Balance check: opening + credits - debits = {} ({})",
        report.statement_summary.computed_closing,
        if report.balance_reconciled { "reconciled" } else { "MISMATCH" }
    );

    println!("\n🔎 Results:");
    for result in &report.matches {
        let tx = &statement.transactions[result.transaction_index];
        let label = match result.classification {
            Classification::Matched => "✓ matched",
            Classification::Suggested => "? suggested",
            Classification::Unmatched => "✗ unmatched",
        };
        print!("  {} | {:<28}", label, tx.description);
        if let Some(id) = &result.ledger_entry_id {
            print!(" -> {} (score {:.0})", id, result.score.unwrap_or(0.0));
        }
        if let Some(note) = &result.note {
            print!(" [{note}]");
        }
        println!();
    }

    println!(
        "\n📊 Summary: {} matched, {} suggested, {} unmatched ({:.0}% auto-reconciled)",
        report.summary.matched,
        report.summary.suggested,
        report.summary.unmatched,
        report.summary.match_rate * 100.0
    );

    Ok(())
}

fn transaction(
    date: &str,
    description: &str,
    amount: &str,
    kind: TransactionKind,
) -> StatementTransaction {
    StatementTransaction {
        date: Some(NaiveDate::from_str(date).unwrap()),
        description: description.to_string(),
        amount: Some(BigDecimal::from_str(amount).unwrap()),
        kind: Some(kind),
        balance_after: None,
    }
}

fn entry(id: &str, date: &str, counterparty: &str, amount: &str) -> LedgerEntry {
    LedgerEntry {
        id: id.to_string(),
        reference_date: NaiveDate::from_str(date).unwrap(),
        counterparty: counterparty.to_string(),
        description: String::new(),
        amount: BigDecimal::from_str(amount).unwrap(),
        source_ref: None,
        reconciled: false,
    }
}
