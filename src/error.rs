// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Only input problems are errors. An empty query and a query with no matches
//! are both valid results, not failures.

use serde::Serialize;
use thiserror::Error;

use crate::types::CourseId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("duplicate course id: {0}")]
    DuplicateId(CourseId),

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Wire shape of an error, for the HTTP layer.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "MALFORMED_RECORD",
            Self::DuplicateId(_) => "DUPLICATE_ID",
            Self::InvalidDataset(_) => "INVALID_DATASET",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }

    /// Caller-side input problem, as opposed to an environment failure.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}
