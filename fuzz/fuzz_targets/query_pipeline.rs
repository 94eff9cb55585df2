// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary catalogs and arbitrary queries. The pipeline must never panic,
//! must only return records of the dataset, and must keep relevance hits in
//! descending score order.

#![no_main]

use arbitrary::Arbitrary;
use coursedex::{Course, CourseId, Dataset, MatchPath, QueryPipeline};
use libfuzzer_sys::fuzz_target;
use serde_json::Map;

#[derive(Debug, Arbitrary)]
struct Record {
    course_code: String,
    title: String,
    description: Option<String>,
    quarters: Vec<String>,
}

#[derive(Debug, Arbitrary)]
struct Input {
    records: Vec<Record>,
    query: String,
}

fuzz_target!(|input: Input| {
    let courses: Vec<Course> = input
        .records
        .into_iter()
        .enumerate()
        .map(|(i, r)| Course {
            id: CourseId(i as i64),
            course_code: r.course_code,
            title: r.title,
            description: r.description,
            quarters: r.quarters,
            extra: Map::new(),
        })
        .collect();
    let Ok(dataset) = Dataset::new(courses) else {
        return;
    };

    let query = input.query.to_lowercase();
    let outcome = QueryPipeline::default().search(&dataset, &query);

    for hit in &outcome.hits {
        assert!(dataset.get(hit.course.id).is_some());
    }
    if outcome.path == MatchPath::Relevance {
        for pair in outcome.hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
});
