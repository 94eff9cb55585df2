//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use serde_json::Map;

use crate::types::{Course, CourseId};

/// Create a course with a title and nothing else.
pub fn make_course(id: i64, course_code: &str, title: &str) -> Course {
    Course {
        id: CourseId(id),
        course_code: course_code.to_string(),
        title: title.to_string(),
        description: None,
        quarters: vec![],
        extra: Map::new(),
    }
}

/// Create a course with a description.
pub fn make_course_with_description(
    id: i64,
    course_code: &str,
    title: &str,
    description: &str,
) -> Course {
    Course {
        description: Some(description.to_string()),
        ..make_course(id, course_code, title)
    }
}

/// Create a course offered in the given quarters.
pub fn make_course_in(id: i64, title: &str, quarters: &[&str]) -> Course {
    Course {
        quarters: quarters.iter().map(|q| (*q).to_string()).collect(),
        ..make_course(id, &format!("TEST {}", id), title)
    }
}

/// The two-course catalog used in the documentation examples.
pub fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            description: Some("basics of programming".to_string()),
            quarters: vec!["autumn".to_string(), "winter".to_string()],
            ..make_course(1, "CS121", "Intro to Computer Science")
        },
        Course {
            description: Some(String::new()),
            quarters: vec!["spring".to_string()],
            ..make_course(2, "CS221", "Artificial Intelligence")
        },
    ]
}
