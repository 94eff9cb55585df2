// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how courses get their numbers, and their order.
//!
//! Title hits outweigh description hits, and queries that reproduce a phrase
//! from the title in order outrank the same words shuffled.

mod core;
pub mod ranking;

pub use self::core::*;
