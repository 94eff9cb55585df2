// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking pipeline.
//!
//! Debug-mode assertions (`debug_assert!`), free in release builds. They
//! catch a broken pipeline at the step that broke it rather than as a subtly
//! wrong result list.
//!
//! | Contract                      | Invariant                                   |
//! |-------------------------------|---------------------------------------------|
//! | `check_ranked_order`          | scores descending, ties in dataset order    |
//! | `check_no_zero_scores`        | ranked list holds no zero scores            |
//! | `check_results_from_dataset`  | every result is a record of the dataset     |

use crate::dataset::Dataset;
use crate::types::{Course, ScoredCourse};

/// Ranked list is sorted by score descending, ties broken by dataset position.
#[inline]
pub fn check_ranked_order(ranked: &[ScoredCourse], dataset: &Dataset) {
    for (i, pair) in ranked.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        debug_assert!(
            a.score >= b.score,
            "Contract violation: ranked[{}].score {} < ranked[{}].score {}",
            i,
            a.score,
            i + 1,
            b.score
        );
        if a.score == b.score {
            debug_assert!(
                dataset.position(a.id) < dataset.position(b.id),
                "Contract violation: tie between {} and {} not in dataset order",
                a.id,
                b.id
            );
        }
    }
}

/// No ranked entry may carry a zero score.
#[inline]
pub fn check_no_zero_scores(ranked: &[ScoredCourse]) {
    debug_assert!(
        ranked.iter().all(|s| s.score > 0),
        "Contract violation: zero-score entry survived ranking"
    );
}

/// Every result must be a record owned by `dataset` (no fabrication).
#[inline]
pub fn check_results_from_dataset(results: &[&Course], dataset: &Dataset) {
    for course in results {
        debug_assert!(
            dataset
                .get(course.id)
                .is_some_and(|owned| std::ptr::eq(owned, *course)),
            "Contract violation: result {} is not a record of the dataset",
            course.id
        );
    }
}
