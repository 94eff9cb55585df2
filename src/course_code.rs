// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Course-code fast path.
//!
//! A query shaped like "cs 121" (exactly two tokens, the second starting with
//! a digit) is treated as a code lookup and answered by substring match on
//! `course_code`, skipping relevance scoring and season filtering entirely.
//!
//! Known limitation: the shape test is a heuristic. A genuine two-word title
//! query whose second word starts with a digit ("web 2.0") takes this path too.

use crate::types::Course;

/// Does this token sequence look like a course code?
pub fn is_course_code_query(tokens: &[&str]) -> bool {
    match tokens {
        [_, second] => second.chars().next().is_some_and(char::is_numeric),
        _ => false,
    }
}

/// Every course whose lowercased `course_code` contains `query`, in input order.
///
/// `query` is matched verbatim, including its original spacing.
pub fn match_course_codes<'a, I>(courses: I, query: &str) -> Vec<&'a Course>
where
    I: IntoIterator<Item = &'a Course>,
{
    courses
        .into_iter()
        .filter(|course| course.course_code.to_lowercase().contains(query))
        .collect()
}
