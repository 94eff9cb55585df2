// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validated, immutable course collections.
//!
//! A `Dataset` can only be built through a validating constructor, so holding
//! one means: every record has an integer `id`, a string `course_code` and a
//! string `title`, and no two records share an id. The pipeline relies on this
//! and never re-checks.
//!
//! Record-level problems are fatal. A bad record is reported with its index,
//! never skipped, since silently dropping it would skew every ranking.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Course, CourseId};

/// An ordered, read-only snapshot of the catalog.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    courses: Vec<Course>,
    positions: HashMap<CourseId, usize>,
    fingerprint: u32,
}

impl Dataset {
    /// Wrap already-typed courses, enforcing id uniqueness.
    pub fn new(courses: Vec<Course>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(courses.len());
        for (position, course) in courses.iter().enumerate() {
            if positions.insert(course.id, position).is_some() {
                return Err(Error::DuplicateId(course.id));
            }
        }
        Ok(Self {
            courses,
            positions,
            fingerprint: 0,
        })
    }

    /// Parse a JSON array of course objects.
    ///
    /// The fingerprint is the CRC32 of `bytes`, so two loads of the same file
    /// compare equal without comparing records.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        let Value::Array(entries) = value else {
            return Err(Error::InvalidDataset(format!(
                "expected a JSON array of courses, got {}",
                kind_of(&value)
            )));
        };

        let courses = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| course_from_value(index, entry))
            .collect::<Result<Vec<_>>>()?;

        let mut dataset = Self::new(courses)?;
        dataset.fingerprint = fingerprint(bytes);
        Ok(dataset)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Self::from_json_slice(raw.as_bytes())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let dataset = Self::from_json_slice(&bytes)?;
        tracing::info!(
            path = %path.display(),
            courses = dataset.len(),
            fingerprint = format_args!("{:08x}", dataset.fingerprint),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Records in input order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Resolve an id to its record.
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.position(id).map(|position| &self.courses[position])
    }

    /// Input position of the record with this id.
    pub fn position(&self, id: CourseId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// CRC32 of the source bytes; 0 for datasets built in memory.
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}

/// CRC32 over raw dataset bytes.
pub fn fingerprint(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

fn malformed(index: usize, reason: impl Into<String>) -> Error {
    Error::MalformedRecord {
        index,
        reason: reason.into(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn take_string(fields: &mut Map<String, Value>, index: usize, key: &str) -> Result<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(malformed(
            index,
            format!("`{}` must be a string, got {}", key, kind_of(&other)),
        )),
        None => Err(malformed(index, format!("missing field `{}`", key))),
    }
}

/// Build one `Course`, checking field presence and types by hand so the
/// error can say exactly which record and which field is wrong.
fn course_from_value(index: usize, value: Value) -> Result<Course> {
    let Value::Object(mut fields) = value else {
        return Err(malformed(
            index,
            format!("expected an object, got {}", kind_of(&value)),
        ));
    };

    let id = match fields.remove("id") {
        Some(v) => v.as_i64().ok_or_else(|| {
            malformed(index, format!("`id` must be an integer, got {}", v))
        })?,
        None => return Err(malformed(index, "missing field `id`")),
    };
    let course_code = take_string(&mut fields, index, "course_code")?;
    let title = take_string(&mut fields, index, "title")?;

    let description = match fields.remove("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            return Err(malformed(
                index,
                format!("`description` must be a string or null, got {}", kind_of(&other)),
            ))
        }
    };

    let quarters = match fields.remove("quarters") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(malformed(
                    index,
                    format!("`quarters` entries must be strings, got {}", kind_of(&other)),
                )),
            })
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(malformed(
                index,
                format!("`quarters` must be an array, got {}", kind_of(&other)),
            ))
        }
    };

    Ok(Course {
        id: CourseId(id),
        course_code,
        title,
        description,
        quarters,
        extra: fields,
    })
}
