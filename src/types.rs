// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records we rank, and the transient pairs we rank them with.
//!
//! | Type           | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `CourseId`     | Stable identifier, unique within one dataset     |
//! | `Course`       | One catalog entry, read-only input               |
//! | `ScoredCourse` | (id, score) pair, created and dropped per query  |
//!
//! # Invariants
//!
//! - **CourseId**: unique within a `Dataset`. Not dense, not positional. Scoring
//!   is keyed by id, never by where a record sits in the input.
//! - **Course.description**: `None` and `Some("")` mean the same thing to the
//!   scorer. Neither may fault it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe course identifier.
///
/// Keeps a dataset id from being mixed up with a sequence position, which is
/// exactly the confusion that breaks when ids stop being `1..=N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct CourseId(pub i64);

impl CourseId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for CourseId {
    fn from(id: i64) -> Self {
        CourseId(id)
    }
}

impl From<CourseId> for i64 {
    fn from(id: CourseId) -> Self {
        id.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// COURSE RECORDS
// =============================================================================

/// A single course in the catalog.
///
/// Field names match the dataset wire format one-to-one, so a `Vec<Course>`
/// serializes straight back into the list-of-objects shape callers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    /// Department + number, e.g. "CS 121". Matched case-insensitively.
    pub course_code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Season labels the course is offered in.
    #[serde(default)]
    pub quarters: Vec<String>,
    /// Any other keys the dataset carries, passed through untouched.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Course {
    /// Description text, with the empty string folded into `None`.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Is this course offered in `season`? Labels compare ASCII-case-insensitively.
    pub fn offered_in(&self, season: &str) -> bool {
        self.quarters.iter().any(|q| q.eq_ignore_ascii_case(season))
    }
}

/// A course id paired with its accumulated relevance score.
///
/// Lives only for the duration of one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredCourse {
    pub id: CourseId,
    pub score: u32,
}

impl ScoredCourse {
    pub fn new(id: CourseId, score: u32) -> Self {
        Self { id, score }
    }
}
