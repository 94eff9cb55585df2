//! Relevance ranking for course-catalog queries.
//!
//! Given a dataset of course records and a free-text query, produce the
//! subset of records that match, ordered by relevance.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ dataset.rs  │────▶│  search/     │────▶│  server.rs   │
//! │ (validate,  │     │ (QueryPipe-  │     │  cli/        │
//! │ fingerprint)│     │  line)       │     │  (surfaces)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                       │    │    │
//!          ┌────────────┘    │    └─────────────┐
//!          ▼                 ▼                  ▼
//! ┌────────────────┐ ┌────────────────┐ ┌────────────────┐
//! │ course_code.rs │ │ scoring/       │ │ season.rs      │
//! │ (fast path)    │ │ (score, rank)  │ │ (OR filter)    │
//! └────────────────┘ └────────────────┘ └────────────────┘
//!                          │
//!                          ▼
//!                    ┌────────────┐
//!                    │ tokenize.rs│
//!                    └────────────┘
//! ```
//!
//! # Ranking rules
//!
//! | Step          | Module        | Rule                                          |
//! |---------------|---------------|-----------------------------------------------|
//! | empty query   | `search`      | whole dataset, input order                    |
//! | course code   | `course_code` | 2 tokens, 2nd starts with a digit             |
//! | scoring       | `scoring`     | title hit 100, description hit 10, per term   |
//! | ranking       | `scoring`     | stable sort descending, zero scores dropped   |
//! | seasons       | `season`      | keep courses offered in any named season      |
//!
//! # Usage
//!
//! ```
//! use coursedex::{Dataset, QueryPipeline};
//!
//! let raw = r#"[
//!     {"id": 1, "course_code": "CS121", "title": "Intro to Computer Science",
//!      "description": "basics of programming", "quarters": ["autumn", "winter"]},
//!     {"id": 2, "course_code": "CS221", "title": "Artificial Intelligence",
//!      "description": "", "quarters": ["spring"]}
//! ]"#;
//!
//! let dataset = Dataset::from_json_str(raw).unwrap();
//! let results = QueryPipeline::default().process(&dataset, "intro");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].course_code, "CS121");
//! ```

pub mod config;
pub mod contracts;
pub mod course_code;
pub mod dataset;
pub mod error;
pub mod scoring;
mod search;
pub mod season;
pub mod tokenize;
mod types;

#[cfg(feature = "server")]
pub mod server;

#[doc(hidden)]
pub mod testing;

pub use config::SearchConfig;
pub use dataset::Dataset;
pub use error::{Error, ErrorPayload, Result};
pub use search::{process, Hit, MatchPath, QueryPipeline, SearchOutcome};
pub use types::{Course, CourseId, ScoredCourse};
