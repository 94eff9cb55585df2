// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the pieces meet.
//!
//! Tokenizer, course-code matcher, scorer, ranking and season filter are all
//! small on their own. The pipeline decides which of them run, and in what
//! order, for a given query.

mod pipeline;

pub use pipeline::*;
