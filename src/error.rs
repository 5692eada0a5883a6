//! Error types for record parsing, configuration and buffer handling.

use thiserror::Error;

/// Failure of a coordinate projection collaborator.
#[derive(Debug, Error)]
#[error("cannot project ({lon}, {lat}): {reason}")]
pub struct ProjectionError {
    pub lon: f64,
    pub lat: f64,
    pub reason: String,
}

/// A raw trip record that does not match the expected schema.
#[derive(Debug, Error)]
pub enum MalformedRecordError {
    #[error("record has {found} fields, need at least {expected}")]
    MissingField { expected: usize, found: usize },
    #[error("no timestamp in field {index}: '{field}'")]
    MissingTimestamp { index: usize, field: String },
    #[error("unparseable timestamp '{value}'")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("field {index} is not a valid number: '{value}'")]
    InvalidNumber { index: usize, value: String },
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid {axis} must be positive")]
    EmptyGrid { axis: &'static str },
    #[error("buckets_per_hour must be within 1..=60, got {0}")]
    Resolution(u32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccumulatorError {
    #[error("histogram shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: Vec<usize>,
        right: Vec<usize>,
    },
}
