//! # Upload Portal - client-side guard
//!
//! Host-independent logic behind the log upload portal's browser script:
//! checking the upload form before the browser submits it, and planning the
//! confetti burst on the confirmation page.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  FormState  │────▶│  validate   │────▶│   Verdict   │
//! │ (from DOM)  │     │ (5 rules)   │     │ allow/block │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Limits, element ids and timings
//! - [`error`] - Validation failures and confetti errors
//! - [`models`] - Selected file, form state, status line
//! - [`validation`] - Ordered submission rules
//! - [`confetti`] - Particle generation and removal scheduling

pub mod config;
pub mod error;
pub mod models;
pub mod validation;
pub mod confetti;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfettiError, ConfettiResult, ValidationFailure, ValidationResult};

pub use models::{file_extension, format_kib, FileStatus, FormState, SelectedFile, StatusTone};

pub use validation::{
    accept_attribute,
    is_allowed_extension,
    validate,
    ValidationRule,
    Verdict,
    RULES,
};

pub use confetti::{
    schedule_launch,
    ConfettiEmitter,
    ConfettiHost,
    ConfettiPiece,
    Particle,
    Scheduler,
};
