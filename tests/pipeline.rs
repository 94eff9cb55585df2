//! End-to-end pipeline tests over the fixture catalog.
//!
//! Expected orders are worked out by hand from the fixture text: a title hit
//! is worth 100, a description hit 10, and every single-term hit counts twice
//! (once as a token, once as the first cumulative prefix).

mod common;

use common::{codes, ids, CATALOG};
use coursedex::{process, Error, MatchPath, QueryPipeline, SearchConfig};

// ============================================================================
// EMPTY QUERY
// ============================================================================

#[test]
fn test_empty_query_returns_whole_catalog_in_order() {
    let results = process(&CATALOG, "");
    assert_eq!(ids(&results), vec![101, 7, 3000, 42, 5, 64, 65, 8]);
}

// ============================================================================
// RELEVANCE
// ============================================================================

#[test]
fn test_title_hit_outranks_description_hit() {
    let outcome = QueryPipeline::default().search(&CATALOG, "compilers");
    assert_eq!(outcome.path, MatchPath::Relevance);
    assert_eq!(ids(&outcome.courses()), vec![64, 65]);

    let scores: Vec<Option<u32>> = outcome.hits.iter().map(|h| h.score).collect();
    assert_eq!(scores, vec![Some(220), Some(20)]);
}

#[test]
fn test_phrase_in_title_beats_phrase_in_description() {
    let outcome = QueryPipeline::default().search(&CATALOG, "machine learning");
    assert_eq!(ids(&outcome.courses()), vec![42, 7, 3000]);

    let scores: Vec<Option<u32>> = outcome.hits.iter().map(|h| h.score).collect();
    assert_eq!(scores, vec![Some(410), Some(40), Some(40)]);
}

#[test]
fn test_ties_follow_dataset_order_not_id_order() {
    // 7 precedes 3000 in the file, and both titles hold the whole phrase.
    let results = process(&CATALOG, "artificial intelligence");
    assert_eq!(ids(&results), vec![7, 3000]);
}

#[test]
fn test_reversed_phrase_scores_lower() {
    let pipeline = QueryPipeline::default();
    let forward = pipeline.rank(&CATALOG, "artificial intelligence");
    let reversed = pipeline.rank(&CATALOG, "intelligence artificial");

    assert_eq!(forward[0].score, 400);
    assert_eq!(reversed[0].score, 300);
}

#[test]
fn test_null_and_empty_descriptions_are_skipped() {
    // Course 5 has a null description, course 8 an empty one.
    let results = process(&CATALOG, "modern");
    assert_eq!(ids(&results), vec![5, 101]);

    let results = process(&CATALOG, "history");
    assert_eq!(ids(&results), vec![8]);
}

#[test]
fn test_zero_scores_are_dropped() {
    assert!(process(&CATALOG, "quantum").is_empty());
}

#[test]
fn test_single_token_code_is_not_a_code_lookup() {
    let outcome = QueryPipeline::default().search(&CATALOG, "cs121");
    assert_eq!(outcome.path, MatchPath::Relevance);
    assert!(outcome.is_empty());
}

// ============================================================================
// SEASONS
// ============================================================================

#[test]
fn test_season_keeps_only_offered_courses() {
    let results = process(&CATALOG, "machine learning spring");
    assert_eq!(ids(&results), vec![42, 3000]);

    let results = process(&CATALOG, "machine learning winter");
    assert_eq!(ids(&results), vec![7]);
}

#[test]
fn test_season_with_no_offerings_empties_results() {
    assert!(process(&CATALOG, "machine learning summer").is_empty());
}

#[test]
fn test_multiple_seasons_are_ored() {
    let outcome = QueryPipeline::default().search(&CATALOG, "machine learning spring winter");
    assert_eq!(outcome.seasons, vec!["spring".to_string(), "winter".to_string()]);
    assert_eq!(ids(&outcome.courses()), vec![42, 7, 3000]);
}

// ============================================================================
// COURSE CODES
// ============================================================================

#[test]
fn test_course_code_lookup() {
    let outcome = QueryPipeline::default().search(&CATALOG, "cs 121");
    assert_eq!(outcome.path, MatchPath::CourseCode);
    assert_eq!(codes(&outcome.courses()), vec!["CS 121"]);
    assert!(outcome.hits.iter().all(|h| h.score.is_none()));
}

#[test]
fn test_course_code_prefix_matches_in_dataset_order() {
    let results = process(&CATALOG, "cs 1");
    assert_eq!(codes(&results), vec!["CS 106A", "CS 121", "CS 143"]);
}

#[test]
fn test_course_code_lookup_ignores_quarters() {
    // HIST 1211 is offered in no quarter at all.
    let results = process(&CATALOG, "hist 12");
    assert_eq!(ids(&results), vec![8]);
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_weights_change_order() {
    let default_order = process(&CATALOG, "principles");
    assert_eq!(ids(&default_order), vec![3000, 101, 64]);

    let config = SearchConfig {
        title_weight: 1,
        description_weight: 1000,
        ..SearchConfig::default()
    };
    let pipeline = QueryPipeline::new(config).unwrap();
    let flipped = pipeline.process(&CATALOG, "principles");
    assert_eq!(ids(&flipped), vec![101, 64, 3000]);
}

#[test]
fn test_config_from_json_feeds_pipeline() {
    let config = SearchConfig::from_json(r#"{"seasons": ["winter"]}"#).unwrap();
    let pipeline = QueryPipeline::new(config).unwrap();

    // "spring" is now an ordinary word, "winter" still filters.
    assert_eq!(ids(&pipeline.process(&CATALOG, "machine learning spring")), vec![42, 7, 3000]);
    assert_eq!(ids(&pipeline.process(&CATALOG, "machine learning winter")), vec![7]);
}

// ============================================================================
// RAW JSON
// ============================================================================

#[test]
fn test_process_json_preserves_extra_fields() {
    let raw = std::fs::read_to_string(common::CATALOG_FIXTURE).unwrap();
    let courses = QueryPipeline::default().process_json(&raw, "supervised").unwrap();
    assert_eq!(courses.len(), 1);

    let value = serde_json::to_value(&courses[0]).unwrap();
    assert_eq!(value["units"], 4);
    assert_eq!(value["course_code"], "CS 229");
}

#[test]
fn test_process_json_rejects_duplicate_ids() {
    let raw = r#"[
        {"id": 1, "course_code": "A 1", "title": "One"},
        {"id": 1, "course_code": "A 2", "title": "Two"}
    ]"#;
    let err = QueryPipeline::default().process_json(raw, "one").unwrap_err();
    assert!(matches!(err, Error::DuplicateId(_)));
    assert_eq!(err.code(), "DUPLICATE_ID");
}

#[test]
fn test_process_json_rejects_non_array() {
    let err = QueryPipeline::default()
        .process_json(r#"{"id": 1}"#, "x")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDataset(_)));
}

#[test]
fn test_process_json_reports_record_index() {
    let raw = r#"[
        {"id": 1, "course_code": "A 1", "title": "One"},
        {"id": 2, "course_code": "A 2"}
    ]"#;
    let err = QueryPipeline::default().process_json(raw, "one").unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { index: 1, .. }));
    assert!(err.to_string().contains("title"));
}
