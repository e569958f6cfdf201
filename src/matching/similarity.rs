//! Description similarity capability
//!
//! The business rule only says "text similarity", so the concrete function
//! sits behind a single-method trait. The default is token overlap; swapping
//! in edit distance or embedding similarity later does not touch the scorer.

use std::collections::HashSet;

/// Scores how alike two free-text descriptions are, in `[0, 1]`
pub trait TextSimilarity: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Token overlap coefficient: `|A ∩ B| / min(|A|, |B|)` over normalized
/// tokens.
///
/// The overlap coefficient (rather than Jaccard) means a short counterparty
/// name fully contained in a long bank description still scores 1.0, which
/// is the common shape of statement text ("PIX TRANSF FORNECEDOR ABC LTDA"
/// vs "ABC Ltda").
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenOverlapSimilarity;

impl TextSimilarity for TokenOverlapSimilarity {
    fn score(&self, a: &str, b: &str) -> f64 {
        let tokens_a = tokenize(a);
        let tokens_b = tokenize(b);

        if tokens_a.is_empty() || tokens_b.is_empty() {
            return 0.0;
        }

        let common = tokens_a.intersection(&tokens_b).count();
        common as f64 / tokens_a.len().min(tokens_b.len()) as f64
    }
}

/// Splits into lowercase, diacritics-folded alphanumeric tokens. Single
/// characters are dropped; they are almost always noise (separators, currency
/// markers, list bullets) in statement text.
fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .map(fold_diacritics)
        .filter(|token| token.chars().count() >= 2)
        .collect()
}

/// Maps accented Latin characters common in pt-BR bank text to their ASCII
/// base so "cartão" and "cartao" tokenize identically.
fn fold_diacritics(token: &str) -> String {
    token
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
