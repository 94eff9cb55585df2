// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for dataset loading.
//!
//! Garbage bytes must produce an error, never a panic. Whatever does load must
//! have unique ids and survive a serialize/parse cycle with the same count.

#![no_main]

use coursedex::Dataset;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|bytes: &[u8]| {
    let Ok(dataset) = Dataset::from_json_slice(bytes) else {
        return;
    };

    for (position, course) in dataset.iter().enumerate() {
        assert_eq!(dataset.position(course.id), Some(position));
    }

    let reencoded = serde_json::to_vec(dataset.courses()).expect("courses serialize");
    let reparsed = Dataset::from_json_slice(&reencoded).expect("re-encoded dataset parses");
    assert_eq!(reparsed.len(), dataset.len());
});
