// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline.
//!
//! ```text
//! query ──▶ empty? ──yes──▶ whole dataset, input order
//!             │no
//!             ▼
//!          tokenize ──▶ "cs 121" shape? ──yes──▶ course-code matches (done)
//!                              │no
//!                              ▼
//!          score every course ──▶ stable sort desc ──▶ drop zeros
//!                              ──▶ resolve ids ──▶ season filter
//! ```
//!
//! Each call is a pure function of (dataset, query). The pipeline holds only
//! its configuration and can be shared across threads freely.

use serde::Serialize;

use crate::config::SearchConfig;
use crate::contracts::{check_no_zero_scores, check_ranked_order, check_results_from_dataset};
use crate::course_code::{is_course_code_query, match_course_codes};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::scoring::{ranking, score_all, QueryTerms};
use crate::season::{offered_in_any, requested_seasons};
use crate::tokenize::tokenize;
use crate::types::{Course, ScoredCourse};

/// Which branch of the pipeline answered a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPath {
    /// Empty query: the whole dataset, unranked.
    Browse,
    /// Course-code fast path: substring match on `course_code`.
    CourseCode,
    /// Relevance scoring, then season filtering.
    Relevance,
}

/// One result row. `score` is set only on the relevance path.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'d> {
    pub course: &'d Course,
    pub score: Option<u32>,
}

/// Everything a query produced, for callers that want more than the list.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'d> {
    pub path: MatchPath,
    /// Seasons named in the query that were applied as a filter.
    pub seasons: Vec<String>,
    pub hits: Vec<Hit<'d>>,
}

impl<'d> SearchOutcome<'d> {
    pub fn courses(&self) -> Vec<&'d Course> {
        self.hits.iter().map(|hit| hit.course).collect()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryPipeline {
    config: SearchConfig,
}

impl QueryPipeline {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Rank `dataset` against an already-lowercased `query`.
    ///
    /// Results borrow from `dataset`; nothing is copied or invented.
    pub fn process<'d>(&self, dataset: &'d Dataset, query: &str) -> Vec<&'d Course> {
        self.search(dataset, query).courses()
    }

    /// Validate a raw JSON dataset, then process it. Owned results, ready to
    /// serialize.
    pub fn process_json(&self, raw_dataset: &str, query: &str) -> Result<Vec<Course>> {
        let dataset = Dataset::from_json_str(raw_dataset)?;
        Ok(self.process(&dataset, query).into_iter().cloned().collect())
    }

    /// Scored, sorted, zero-free pairs for the relevance path, before season
    /// filtering. Ignores the course-code fast path.
    pub fn rank(&self, dataset: &Dataset, query: &str) -> Vec<ScoredCourse> {
        let terms = QueryTerms::new(tokenize(query));
        let ranked = ranking::rank(score_all(dataset, &terms, &self.config));
        check_ranked_order(&ranked, dataset);
        check_no_zero_scores(&ranked);
        ranked
    }

    /// Run the full pipeline and report which path answered.
    pub fn search<'d>(&self, dataset: &'d Dataset, query: &str) -> SearchOutcome<'d> {
        if query.is_empty() {
            return SearchOutcome {
                path: MatchPath::Browse,
                seasons: Vec::new(),
                hits: dataset
                    .iter()
                    .map(|course| Hit {
                        course,
                        score: None,
                    })
                    .collect(),
            };
        }

        let tokens = tokenize(query);

        if is_course_code_query(&tokens) {
            let hits: Vec<Hit<'d>> = match_course_codes(dataset, query)
                .into_iter()
                .map(|course| Hit {
                    course,
                    score: None,
                })
                .collect();
            tracing::debug!(query, matches = hits.len(), "course-code fast path");
            return SearchOutcome {
                path: MatchPath::CourseCode,
                seasons: Vec::new(),
                hits,
            };
        }

        let seasons = requested_seasons(&tokens, &self.config.seasons);
        let ranked = self.rank(dataset, query);
        let scored_count = ranked.len();

        let mut hits: Vec<Hit<'d>> = ranked
            .iter()
            .filter_map(|scored| {
                dataset.get(scored.id).map(|course| Hit {
                    course,
                    score: Some(scored.score),
                })
            })
            .collect();
        hits.retain(|hit| offered_in_any(hit.course, &seasons));

        if cfg!(debug_assertions) {
            let courses: Vec<&Course> = hits.iter().map(|hit| hit.course).collect();
            check_results_from_dataset(&courses, dataset);
        }

        tracing::debug!(
            query,
            courses = dataset.len(),
            matched = scored_count,
            kept = hits.len(),
            seasons = ?seasons,
            "relevance path"
        );

        SearchOutcome {
            path: MatchPath::Relevance,
            seasons: seasons.into_iter().map(str::to_string).collect(),
            hits,
        }
    }
}

/// Process with the default configuration.
pub fn process<'d>(dataset: &'d Dataset, query: &str) -> Vec<&'d Course> {
    QueryPipeline::default().process(dataset, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::{make_course, make_course_in, make_course_with_description, sample_courses};
    use crate::types::CourseId;

    fn ids(courses: &[&Course]) -> Vec<i64> {
        courses.iter().map(|c| c.id.get()).collect()
    }

    fn sample() -> Dataset {
        Dataset::new(sample_courses()).unwrap()
    }

    #[test]
    fn test_empty_query_returns_dataset_unchanged() {
        let dataset = sample();
        let outcome = QueryPipeline::default().search(&dataset, "");
        assert_eq!(outcome.path, MatchPath::Browse);
        assert_eq!(ids(&outcome.courses()), vec![1, 2]);
        assert!(outcome.hits.iter().all(|h| h.score.is_none()));
    }

    #[test]
    fn test_intro_matches_first_course_only() {
        let dataset = sample();
        assert_eq!(ids(&process(&dataset, "intro")), vec![1]);
    }

    #[test]
    fn test_spring_ai_finds_nothing() {
        // "ai" is not a contiguous substring of "artificial intelligence",
        // and "spring" appears in no title or description.
        let dataset = sample();
        assert!(process(&dataset, "spring ai").is_empty());
    }

    #[test]
    fn test_spring_intelligence_keeps_spring_course() {
        let dataset = sample();
        assert_eq!(ids(&process(&dataset, "spring intelligence")), vec![2]);
    }

    #[test]
    fn test_whitespace_only_query_is_empty_result() {
        let dataset = sample();
        let outcome = QueryPipeline::default().search(&dataset, "   ");
        assert_eq!(outcome.path, MatchPath::Relevance);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_course_code_fast_path() {
        let dataset = Dataset::new(vec![
            make_course_in(1, "Intro", &["autumn"]),
            Course {
                course_code: "CS 121".into(),
                ..make_course_in(2, "Graphics", &["spring"])
            },
        ])
        .unwrap();

        let outcome = QueryPipeline::default().search(&dataset, "cs 121");
        assert_eq!(outcome.path, MatchPath::CourseCode);
        assert_eq!(ids(&outcome.courses()), vec![2]);
    }

    #[test]
    fn test_fast_path_skips_season_filter() {
        let dataset = Dataset::new(vec![Course {
            course_code: "SPRING 1".into(),
            ..make_course_in(1, "Gardening", &["autumn"])
        }])
        .unwrap();

        // Two tokens, second numeric: code lookup, "spring" is not a season here.
        assert_eq!(ids(&process(&dataset, "spring 1")), vec![1]);
    }

    #[test]
    fn test_single_token_code_uses_scoring() {
        let dataset = Dataset::new(vec![make_course(1, "CS121", "Programming")]).unwrap();
        let outcome = QueryPipeline::default().search(&dataset, "cs121");
        assert_eq!(outcome.path, MatchPath::Relevance);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_title_outranks_description() {
        let dataset = Dataset::new(vec![
            make_course_with_description(1, "A", "Seminar", "graph theory"),
            make_course_with_description(2, "B", "Graph Theory", "seminar"),
        ])
        .unwrap();
        assert_eq!(ids(&process(&dataset, "graph")), vec![2, 1]);
    }

    #[test]
    fn test_ties_keep_dataset_order_with_sparse_ids() {
        let dataset = Dataset::new(vec![
            make_course(900, "A", "Databases"),
            make_course(3, "B", "Networks"),
            make_course(42, "C", "Databases II"),
        ])
        .unwrap();
        assert_eq!(ids(&process(&dataset, "databases")), vec![900, 42]);
    }

    #[test]
    fn test_season_filter_overrides_score() {
        let dataset = Dataset::new(vec![
            make_course_in(1, "Intro", &["spring"]),
            make_course_in(2, "Intro intro intro", &["autumn"]),
        ])
        .unwrap();
        let outcome = QueryPipeline::default().search(&dataset, "intro spring");
        assert_eq!(outcome.seasons, vec!["spring".to_string()]);
        assert_eq!(ids(&outcome.courses()), vec![1]);
    }

    #[test]
    fn test_relevance_hits_carry_scores() {
        let dataset = sample();
        let outcome = QueryPipeline::default().search(&dataset, "intro");
        assert_eq!(outcome.hits[0].score, Some(200));
    }

    #[test]
    fn test_rank_reports_pairs_before_season_filter() {
        let dataset = Dataset::new(vec![
            make_course_in(1, "Intro", &["spring"]),
            make_course_in(2, "Intro", &["autumn"]),
        ])
        .unwrap();
        let ranked = QueryPipeline::default().rank(&dataset, "intro spring");
        let ranked_ids: Vec<CourseId> = ranked.iter().map(|s| s.id).collect();
        assert_eq!(ranked_ids, vec![CourseId(1), CourseId(2)]);
    }

    #[test]
    fn test_custom_season_vocabulary() {
        let config = SearchConfig {
            seasons: ["fall".to_string()].into_iter().collect(),
            ..SearchConfig::default()
        };
        let pipeline = QueryPipeline::new(config).unwrap();
        let dataset = Dataset::new(vec![
            make_course_in(1, "Compilers", &["fall"]),
            make_course_in(2, "Compilers", &["spring"]),
        ])
        .unwrap();

        assert_eq!(ids(&pipeline.process(&dataset, "compilers fall")), vec![1]);
        // "spring" is no longer a season keyword, just an unmatched token.
        assert_eq!(ids(&pipeline.process(&dataset, "compilers spring")), vec![1, 2]);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SearchConfig {
            seasons: ["Spring".to_string()].into_iter().collect(),
            ..SearchConfig::default()
        };
        assert!(matches!(
            QueryPipeline::new(config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_process_json_rejects_malformed_record() {
        let raw = r#"[{"id": 1, "title": "No code"}]"#;
        let err = QueryPipeline::default().process_json(raw, "code").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn test_process_json_returns_owned_courses() {
        let raw = r#"[
            {"id": 5, "course_code": "A", "title": "Databases"},
            {"id": 6, "course_code": "B", "title": "Networks"}
        ]"#;
        let courses = QueryPipeline::default().process_json(raw, "networks").unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, CourseId(6));
    }
}
