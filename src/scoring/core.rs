// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance scores.
//!
//! Each record gets an integer score built from two kinds of hits, counted
//! separately in the title and in the description:
//!
//! - **token hits**: each query token found as a substring of the field
//! - **prefix hits**: each cumulative prefix of the query ("intro", "intro to",
//!   "intro to cs") found as a substring of the field
//!
//! Every hit adds the field's weight. Prefix hits are what make word order
//! count: "intro to cs" scores higher against "Intro to CS" than against
//! "CS: to intro", even though both contain all three tokens.
//!
//! # Field dominance
//!
//! With the default weights a title hit is worth ten description hits. That
//! ratio is configuration, not an invariant; the only hard guarantee is that
//! a field with weight 0 contributes nothing.

use crate::config::SearchConfig;
use crate::dataset::Dataset;
use crate::tokenize::cumulative_prefixes;
use crate::types::{Course, ScoredCourse};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which record field a hit landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
}

/// Weight per hit for a field.
pub fn field_weight(field: Field, config: &SearchConfig) -> u32 {
    match field {
        Field::Title => config.title_weight,
        Field::Description => config.description_weight,
    }
}

/// A tokenized query with its cumulative prefixes precomputed.
///
/// Built once per query, shared across every record scored.
#[derive(Debug, Clone)]
pub struct QueryTerms<'q> {
    tokens: Vec<&'q str>,
    prefixes: Vec<String>,
}

impl<'q> QueryTerms<'q> {
    pub fn new(tokens: Vec<&'q str>) -> Self {
        let prefixes = cumulative_prefixes(&tokens);
        Self { tokens, prefixes }
    }

    pub fn tokens(&self) -> &[&'q str] {
        &self.tokens
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Count token hits plus prefix hits in already-lowercased `text`.
///
/// Empty tokens and prefixes count for nothing.
pub fn field_hits(text: &str, terms: &QueryTerms<'_>) -> u32 {
    let token_hits = terms
        .tokens
        .iter()
        .filter(|token| !token.is_empty() && text.contains(**token))
        .count();
    let prefix_hits = terms
        .prefixes
        .iter()
        .filter(|prefix| !prefix.is_empty() && text.contains(prefix.as_str()))
        .count();
    (token_hits + prefix_hits) as u32
}

/// Per-field hit counts for one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub title_hits: u32,
    pub description_hits: u32,
}

impl ScoreBreakdown {
    /// Weighted total. Saturates rather than wrapping on absurd weights.
    pub fn total(&self, config: &SearchConfig) -> u32 {
        let title = self
            .title_hits
            .saturating_mul(field_weight(Field::Title, config));
        let description = self
            .description_hits
            .saturating_mul(field_weight(Field::Description, config));
        title.saturating_add(description)
    }
}

/// Hit counts for one course. A missing or empty description yields 0 there.
pub fn explain_course(course: &Course, terms: &QueryTerms<'_>) -> ScoreBreakdown {
    let title_hits = field_hits(&course.title.to_lowercase(), terms);
    let description_hits = course
        .description_text()
        .map_or(0, |description| field_hits(&description.to_lowercase(), terms));
    ScoreBreakdown {
        title_hits,
        description_hits,
    }
}

/// Relevance score for one course.
pub fn score_course(course: &Course, terms: &QueryTerms<'_>, config: &SearchConfig) -> u32 {
    explain_course(course, terms).total(config)
}

/// Score every course, in dataset order.
///
/// The parallel build uses an indexed iterator, so output order (and therefore
/// tie-breaking downstream) is identical to the sequential build.
pub fn score_all(
    dataset: &Dataset,
    terms: &QueryTerms<'_>,
    config: &SearchConfig,
) -> Vec<ScoredCourse> {
    #[cfg(feature = "parallel")]
    {
        dataset
            .courses()
            .par_iter()
            .map(|course| ScoredCourse::new(course.id, score_course(course, terms, config)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        dataset
            .iter()
            .map(|course| ScoredCourse::new(course.id, score_course(course, terms, config)))
            .collect()
    }
}
