//! Submission rules for the upload form.
//!
//! Rules run in a fixed order and stop at the first failure:
//!
//! 1. [`ValidationRule::FilePresent`]
//! 2. [`ValidationRule::AllowedExtension`]
//! 3. [`ValidationRule::SizeLimit`]
//! 4. [`ValidationRule::LogDatetimePresent`]
//! 5. [`ValidationRule::UploaderNamePresent`]
//!
//! # Example
//!
//! ```
//! use upload_portal::{validate, FormState, SelectedFile, ValidationFailure};
//!
//! let state = FormState::new(Some(SelectedFile::new("image.png", 10)), "2024-05-01T10:00", "Alice");
//! assert_eq!(validate(&state), Err(ValidationFailure::InvalidFileType));
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ALLOWED_EXTENSIONS, MAX_FILE_SIZE};
use crate::error::{ValidationFailure, ValidationResult};
use crate::models::FormState;

/// One check over the form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationRule {
    FilePresent,
    AllowedExtension,
    SizeLimit,
    LogDatetimePresent,
    UploaderNamePresent,
}

/// Rules in evaluation order.
pub const RULES: [ValidationRule; 5] = [
    ValidationRule::FilePresent,
    ValidationRule::AllowedExtension,
    ValidationRule::SizeLimit,
    ValidationRule::LogDatetimePresent,
    ValidationRule::UploaderNamePresent,
];

impl ValidationRule {
    /// Failure this rule reports.
    pub fn failure(&self) -> ValidationFailure {
        match self {
            ValidationRule::FilePresent => ValidationFailure::MissingFile,
            ValidationRule::AllowedExtension => ValidationFailure::InvalidFileType,
            ValidationRule::SizeLimit => ValidationFailure::FileTooLarge,
            ValidationRule::LogDatetimePresent => ValidationFailure::MissingLogDatetime,
            ValidationRule::UploaderNamePresent => ValidationFailure::MissingUploaderName,
        }
    }

    /// Runs the rule on its own.
    ///
    /// File rules after [`ValidationRule::FilePresent`] fail when no file is
    /// present; [`validate`] never reaches them in that case.
    pub fn check(&self, state: &FormState) -> ValidationResult<()> {
        let passed = match self {
            ValidationRule::FilePresent => state.file.is_some(),
            ValidationRule::AllowedExtension => state
                .file
                .as_ref()
                .is_some_and(|file| is_allowed_extension(&file.extension())),
            ValidationRule::SizeLimit => state
                .file
                .as_ref()
                .is_some_and(|file| file.size_bytes <= MAX_FILE_SIZE),
            ValidationRule::LogDatetimePresent => !state.log_datetime.is_empty(),
            ValidationRule::UploaderNamePresent => !state.uploader_name.trim().is_empty(),
        };

        if passed {
            Ok(())
        } else {
            Err(self.failure())
        }
    }
}

/// Whether a lowercase extension is in the allow-list.
pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension)
}

/// Value for the file input's `accept` attribute, e.g. `.log,.pdf,.csv,.zip`.
pub fn accept_attribute() -> String {
    ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

/// Runs every rule in order and returns the first failure.
pub fn validate(state: &FormState) -> ValidationResult<()> {
    for rule in RULES {
        if let Err(failure) = rule.check(state) {
            log::debug!("Rule {:?} failed: {}", rule, failure);
            return Err(failure);
        }
    }
    Ok(())
}

// =============================================================================
// Verdict
// =============================================================================

/// Outcome of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Let the browser submit the form.
    Allow,
    /// Cancel the submission and show the failure.
    Block(ValidationFailure),
}

impl Verdict {
    /// Evaluates the form state.
    pub fn evaluate(state: &FormState) -> Self {
        validate(state).into()
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    /// Message to surface when blocked.
    pub fn message(&self) -> Option<String> {
        match self {
            Verdict::Allow => None,
            Verdict::Block(failure) => Some(failure.to_string()),
        }
    }
}

impl From<ValidationResult<()>> for Verdict {
    fn from(result: ValidationResult<()>) -> Self {
        match result {
            Ok(()) => Verdict::Allow,
            Err(failure) => Verdict::Block(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectedFile;

    const MIB: u64 = 1024 * 1024;

    fn filled(file: Option<SelectedFile>) -> FormState {
        FormState::new(file, "2024-05-01T10:00", "Alice")
    }

    #[test]
    fn test_valid_log_upload_is_allowed() {
        let state = filled(Some(SelectedFile::new("server.log", 2048)));
        assert_eq!(validate(&state), Ok(()));
        assert!(Verdict::evaluate(&state).is_allowed());
    }

    #[test]
    fn test_missing_file() {
        let verdict = Verdict::evaluate(&filled(None));
        assert_eq!(verdict, Verdict::Block(ValidationFailure::MissingFile));
        assert_eq!(
            verdict.message().as_deref(),
            Some("Please select a file to upload.")
        );
    }

    #[test]
    fn test_png_is_rejected() {
        let state = filled(Some(SelectedFile::new("image.png", 2048)));
        assert_eq!(
            Verdict::evaluate(&state).message().as_deref(),
            Some("Invalid file type. Allowed types: .log, .pdf, .csv, .zip.")
        );
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        for name in ["REPORT.PDF", "Data.Csv", "bundle.ZiP", "app.LOG"] {
            let state = filled(Some(SelectedFile::new(name, 1)));
            assert_eq!(validate(&state), Ok(()), "{name} should pass");
        }
    }

    #[test]
    fn test_name_without_dot_fails_allow_list() {
        // "log" has no dot, so the whole name is the extension and it passes;
        // any other dotless name is rejected.
        let state = filled(Some(SelectedFile::new("logfile", 1)));
        assert_eq!(validate(&state), Err(ValidationFailure::InvalidFileType));

        let state = filled(Some(SelectedFile::new("LOG", 1)));
        assert_eq!(validate(&state), Ok(()));
    }

    #[test]
    fn test_size_limit_boundary() {
        let at_limit = filled(Some(SelectedFile::new("data.csv", 16 * MIB)));
        assert_eq!(validate(&at_limit), Ok(()));

        let over = filled(Some(SelectedFile::new("data.csv", 16 * MIB + 1)));
        assert_eq!(validate(&over), Err(ValidationFailure::FileTooLarge));
    }

    #[test]
    fn test_seventeen_mib_csv_is_blocked() {
        let state = filled(Some(SelectedFile::new("data.csv", 17 * MIB)));
        assert_eq!(
            Verdict::evaluate(&state).message().as_deref(),
            Some("File size exceeds 16MB limit.")
        );
    }

    #[test]
    fn test_size_rule_over_range() {
        for size in [0, 1, MIB, 16 * MIB - 1, 16 * MIB] {
            let state = filled(Some(SelectedFile::new("a.zip", size)));
            assert!(ValidationRule::SizeLimit.check(&state).is_ok());
        }
        for size in [16 * MIB + 1, 17 * MIB, u64::MAX] {
            let state = filled(Some(SelectedFile::new("a.zip", size)));
            assert_eq!(
                ValidationRule::SizeLimit.check(&state),
                Err(ValidationFailure::FileTooLarge)
            );
        }
    }

    #[test]
    fn test_first_failure_wins() {
        // Fails file presence, and every later rule too.
        let state = FormState::new(None, "", "   ");
        assert_eq!(validate(&state), Err(ValidationFailure::MissingFile));

        // Wrong type and too large: type is reported.
        let state = filled(Some(SelectedFile::new("movie.mkv", 100 * MIB)));
        assert_eq!(validate(&state), Err(ValidationFailure::InvalidFileType));

        // Too large and no date: size is reported.
        let state = FormState::new(Some(SelectedFile::new("a.pdf", 20 * MIB)), "", "Bob");
        assert_eq!(validate(&state), Err(ValidationFailure::FileTooLarge));
    }

    #[test]
    fn test_missing_log_datetime() {
        let state = FormState::new(Some(SelectedFile::new("a.log", 1)), "", "Alice");
        assert_eq!(validate(&state), Err(ValidationFailure::MissingLogDatetime));
    }

    #[test]
    fn test_whitespace_uploader_is_empty() {
        let state = FormState::new(Some(SelectedFile::new("a.log", 1)), "2024-05-01T10:00", "   ");
        assert_eq!(validate(&state), Err(ValidationFailure::MissingUploaderName));

        let state = FormState::new(Some(SelectedFile::new("a.log", 1)), "2024-05-01T10:00", " Al ");
        assert_eq!(validate(&state), Ok(()));
    }

    #[test]
    fn test_description_is_not_required() {
        let state = filled(Some(SelectedFile::new("a.log", 1))).with_description("");
        assert!(Verdict::evaluate(&state).is_allowed());
    }

    #[test]
    fn test_rules_are_ordered_like_failures() {
        let failures: Vec<_> = RULES.iter().map(|rule| rule.failure()).collect();
        assert_eq!(
            failures,
            vec![
                ValidationFailure::MissingFile,
                ValidationFailure::InvalidFileType,
                ValidationFailure::FileTooLarge,
                ValidationFailure::MissingLogDatetime,
                ValidationFailure::MissingUploaderName,
            ]
        );
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".log,.pdf,.csv,.zip");
    }
}
