// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: turning raw scores into an ordered hit list.
//!
//! Sort order is score descending. Equal scores keep the order the scorer
//! produced them in, which is dataset order, because the sort is stable.
//! Zero scores are dropped after sorting.

use crate::types::ScoredCourse;
use std::cmp::Ordering;

/// Compare two scored courses for ranking (higher score first).
///
/// Deliberately says nothing about ties; callers rely on a stable sort to
/// keep dataset order.
pub fn compare_scored(a: &ScoredCourse, b: &ScoredCourse) -> Ordering {
    b.score.cmp(&a.score)
}

/// Sort by score descending (stable), then drop every zero score.
pub fn rank(mut scored: Vec<ScoredCourse>) -> Vec<ScoredCourse> {
    scored.sort_by(compare_scored);
    scored.retain(|s| s.score > 0);
    scored
}
