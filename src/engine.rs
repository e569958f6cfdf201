//! Reconciliation engine: wires validation, indexing, scoring, assignment,
//! and classification into the single entry point
//!
//! The pipeline is an explicit sequence of pure transforms. Validation and
//! pair scoring have no cross-pair dependencies; the global assignment pass
//! is the only stage that needs the complete candidate set. Given the same
//! statement and ledger snapshot, a rerun produces an identical report.

use std::collections::HashSet;

use chrono::Duration;

use crate::config::ReconciliationConfig;
use crate::matching::{
    CandidateIndex, Categorizer, GlobalMatcher, ScoringEngine, TextSimilarity,
    TokenOverlapSimilarity,
};
use crate::report::ReconciliationReport;
use crate::statement::StatementValidator;
use crate::traits::LedgerEntrySource;
use crate::types::{LedgerEntries, MatchCandidate, ReconciliationResult, Statement};

/// Matches a bank statement against the period's ledger entries.
///
/// Holds the tolerance configuration and the description-similarity
/// implementation; both are fixed for the lifetime of the engine so repeated
/// runs behave identically.
pub struct ReconciliationEngine {
    config: ReconciliationConfig,
    similarity: Box<dyn TextSimilarity>,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new(ReconciliationConfig::default())
    }
}

impl ReconciliationEngine {
    /// Engine with the default token-overlap similarity
    pub fn new(config: ReconciliationConfig) -> Self {
        Self::with_similarity(config, Box::new(TokenOverlapSimilarity))
    }

    /// Engine with a custom description-similarity implementation
    pub fn with_similarity(config: ReconciliationConfig, similarity: Box<dyn TextSimilarity>) -> Self {
        Self { config, similarity }
    }

    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }

    /// Reconcile a statement against an already-fetched ledger snapshot.
    ///
    /// Fails only on invalid configuration. An empty ledger set, malformed
    /// statement rows, and a balance mismatch are all normal, reportable
    /// outcomes.
    pub fn reconcile(
        &self,
        statement: &Statement,
        ledger_entries: &LedgerEntries,
    ) -> ReconciliationResult<ReconciliationReport> {
        self.config.validate()?;

        let validated = StatementValidator::new(&self.config).validate(statement);

        let index = CandidateIndex::build(ledger_entries);
        let scorer = ScoringEngine::new(&self.config, self.similarity.as_ref());

        // Score every transaction against its windowed candidates. Each pair
        // is independent; only the assignment pass below needs global state.
        let mut candidates: Vec<MatchCandidate> = Vec::new();
        let mut with_candidates: HashSet<usize> = HashSet::new();
        for tx in &validated.transactions {
            let eligible = index.candidates_within(
                tx.kind.matching_entry_kind(),
                tx.date,
                self.config.prefilter_window_days,
            );
            for entry in eligible {
                if let Some(candidate) = scorer.score_pair(tx, entry) {
                    with_candidates.insert(candidate.transaction_index);
                    candidates.push(candidate);
                }
            }
        }

        let assignments = GlobalMatcher::assign(candidates);
        let results = Categorizer::new(&self.config).classify(
            &validated.transactions,
            &assignments,
            &with_candidates,
        );

        Ok(ReconciliationReport::build(&validated, results))
    }

    /// Fetch ledger entries for the statement period (widened by the
    /// pre-filter margin so edge-of-period transactions see their
    /// candidates) and reconcile against them.
    pub async fn reconcile_with_source<S: LedgerEntrySource>(
        &self,
        statement: &Statement,
        source: &S,
    ) -> ReconciliationResult<ReconciliationReport> {
        self.config.validate()?;

        let margin = Duration::days(self.config.prefilter_window_days);
        let entries = source
            .fetch_entries(statement.period.start - margin, statement.period.end + margin)
            .await?;

        self.reconcile(statement, &entries)
    }
}

/// One-shot entry point: `reconcile(statement, ledger_entries, config)`.
/// Equivalent to building a default-similarity engine and running it once.
pub fn reconcile(
    statement: &Statement,
    ledger_entries: &LedgerEntries,
    config: ReconciliationConfig,
) -> ReconciliationResult<ReconciliationReport> {
    ReconciliationEngine::new(config).reconcile(statement, ledger_entries)
}
