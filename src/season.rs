// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Season filtering.
//!
//! A query that names one or more seasons ("compilers autumn") keeps only the
//! courses offered in at least one of them. Named seasons are OR'd, never
//! AND'd. A query naming no season filters nothing. Input order is kept.

use std::collections::BTreeSet;

use crate::types::Course;

/// Seasons from `vocabulary` that appear as whole tokens in the query.
///
/// Returned in vocabulary order, each at most once.
pub fn requested_seasons<'v>(tokens: &[&str], vocabulary: &'v BTreeSet<String>) -> Vec<&'v str> {
    vocabulary
        .iter()
        .filter(|season| tokens.contains(&season.as_str()))
        .map(String::as_str)
        .collect()
}

/// Is `course` offered in any of `seasons`? Always true when `seasons` is empty.
pub fn offered_in_any(course: &Course, seasons: &[&str]) -> bool {
    seasons.is_empty() || seasons.iter().any(|season| course.offered_in(season))
}

/// Keep courses offered in any of `seasons`. An empty `seasons` keeps all.
pub fn filter_by_season<'a>(courses: Vec<&'a Course>, seasons: &[&str]) -> Vec<&'a Course> {
    if seasons.is_empty() {
        return courses;
    }
    courses
        .into_iter()
        .filter(|course| offered_in_any(course, seasons))
        .collect()
}

/// How many courses are offered in each season of the vocabulary.
pub fn offering_counts<'a, I>(courses: I, vocabulary: &BTreeSet<String>) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Course> + Clone,
{
    vocabulary
        .iter()
        .map(|season| {
            let count = courses
                .clone()
                .into_iter()
                .filter(|course| course.offered_in(season))
                .count();
            (season.clone(), count)
        })
        .collect()
}
