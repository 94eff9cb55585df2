//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::LazyLock;

use coursedex::{Course, Dataset};

// Re-export canonical test utilities from coursedex::testing
pub use coursedex::testing::{make_course, make_course_in, make_course_with_description};

// ============================================================================
// FIXTURES
// ============================================================================

/// Path to the small hand-written catalog used across integration tests.
pub const CATALOG_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/catalog.json");

/// The fixture catalog, parsed once.
pub static CATALOG: LazyLock<Dataset> = LazyLock::new(|| {
    Dataset::from_file(std::path::Path::new(CATALOG_FIXTURE)).expect("fixture catalog must load")
});

// ============================================================================
// HELPERS
// ============================================================================

/// Ids of `courses`, in order.
pub fn ids(courses: &[&Course]) -> Vec<i64> {
    courses.iter().map(|course| course.id.get()).collect()
}

/// Codes of `courses`, in order.
pub fn codes<'a>(courses: &[&'a Course]) -> Vec<&'a str> {
    courses.iter().map(|course| course.course_code.as_str()).collect()
}
