//! Errors
//!
//! Custom error types used throughout the `id3-tree` crate.
use thiserror::Error;

/// Errors that can occur while building a decision tree.
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// A dataset with zero records was passed where records are required.
    #[error("Dataset contains no records.")]
    EmptyDataset,
    /// Records of one dataset do not share the same length.
    #[error("Record {row} has {found} values, expected {expected}.")]
    ArityMismatch { row: usize, expected: usize, found: usize },
    /// Attribute list and dataset columns disagree, or an index fell outside the attribute columns.
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
    /// Unable to serialize the tree.
    #[error("Unable to write tree: {0}")]
    UnableToWrite(String),
    /// Unable to parse a configuration.
    #[error("Unable to read configuration: {0}")]
    UnableToRead(String),
}
