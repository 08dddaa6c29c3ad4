//! Error types for the upload portal.
//!
//! - [`ValidationFailure`] - a submission rule failed; its `Display` is the
//!   exact message shown to the user
//! - [`ConfettiError`] - a particle could not be placed in the page
//!
//! Neither is fatal. Validation failures block a single submission attempt
//! and confetti errors only cost a particle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Failure of one submission rule.
///
/// Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationFailure {
    /// No file chosen.
    #[error("Please select a file to upload.")]
    MissingFile,

    /// Extension outside the allow-list.
    #[error("Invalid file type. Allowed types: .log, .pdf, .csv, .zip.")]
    InvalidFileType,

    /// File larger than [`crate::config::MAX_FILE_SIZE`].
    #[error("File size exceeds 16MB limit.")]
    FileTooLarge,

    /// Log date/time left empty.
    #[error("Please enter log date/time.")]
    MissingLogDatetime,

    /// Uploader name empty or whitespace.
    #[error("Please enter uploader name.")]
    MissingUploaderName,
}

// =============================================================================
// Confetti Errors
// =============================================================================

/// Errors raised by a [`crate::confetti::ConfettiHost`].
#[derive(Debug, Error)]
pub enum ConfettiError {
    /// The host could not create or insert the particle.
    #[error("Failed to insert particle: {0}")]
    Insert(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result of running the submission rules.
pub type ValidationResult<T> = Result<T, ValidationFailure>;

/// Result of confetti host operations.
pub type ConfettiResult<T> = Result<T, ConfettiError>;
