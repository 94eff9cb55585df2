// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization.
//!
//! Whitespace splitting and nothing else: no stemming, no punctuation
//! stripping, no case folding. Callers lowercase before they get here.

/// Split a query into whitespace-separated tokens, in order.
///
/// Runs of whitespace never produce empty tokens.
pub fn tokenize(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Rebuild the cumulative prefixes of a token sequence.
///
/// `["intro", "to", "cs"]` yields `"intro"`, `"intro to"`, `"intro to cs"`.
/// Tokens are rejoined with single spaces regardless of the original spacing.
pub fn cumulative_prefixes(tokens: &[&str]) -> Vec<String> {
    let mut prefixes = Vec::with_capacity(tokens.len());
    let mut prefix = String::new();
    for token in tokens {
        if !prefix.is_empty() {
            prefix.push(' ');
        }
        prefix.push_str(token);
        prefixes.push(prefix.clone());
    }
    prefixes
}
