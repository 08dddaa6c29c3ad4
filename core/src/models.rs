//! Domain models for the upload form.
//!
//! - [`SelectedFile`] - what the file picker reports
//! - [`FormState`] - snapshot of the form at submission time
//! - [`FileStatus`] - what the status line shows after a selection change

use serde::{Deserialize, Serialize};

use crate::config::{STATUS_COLOR_EMPTY, STATUS_COLOR_SELECTED};

// =============================================================================
// Selected File
// =============================================================================

/// A file picked in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    /// File name as reported by the picker (no directory part).
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Lowercased text after the last `.`, or the whole name when there is
    /// no dot at all.
    pub fn extension(&self) -> String {
        file_extension(&self.name)
    }

    /// Size in KiB with two decimals, e.g. `"2.00"`.
    pub fn size_kib(&self) -> String {
        format_kib(self.size_bytes)
    }
}

/// Lowercased substring after the last `.` of `name`.
///
/// `"archive.tar.GZ"` gives `"gz"`, `"README"` gives `"readme"` and
/// `"notes."` gives an empty string.
pub fn file_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => name.to_lowercase(),
    }
}

/// Formats a byte count as KiB with two decimals, rounding ties upwards.
pub fn format_kib(bytes: u64) -> String {
    // Integer arithmetic keeps tie rounding exact (128 B -> "0.13").
    let hundredths = (u128::from(bytes) * 100 + 512) / 1024;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

// =============================================================================
// Form State
// =============================================================================

/// Values of the upload form read at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub file: Option<SelectedFile>,
    /// Raw value of the date/time input.
    pub log_datetime: String,
    pub uploader_name: String,
    /// Free text, never validated.
    #[serde(default)]
    pub description: String,
}

impl FormState {
    pub fn new(
        file: Option<SelectedFile>,
        log_datetime: impl Into<String>,
        uploader_name: impl Into<String>,
    ) -> Self {
        Self {
            file,
            log_datetime: log_datetime.into(),
            uploader_name: uploader_name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// =============================================================================
// File Status
// =============================================================================

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    /// A file is ready.
    Positive,
    /// Nothing picked.
    Neutral,
}

impl StatusTone {
    /// CSS color for the status text.
    pub fn color(&self) -> &'static str {
        match self {
            StatusTone::Positive => STATUS_COLOR_SELECTED,
            StatusTone::Neutral => STATUS_COLOR_EMPTY,
        }
    }
}

/// Status line content after the file picker changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    Selected { name: String, size_kib: String },
    Empty,
}

impl FileStatus {
    /// Status for the current picker selection.
    pub fn from_selection(file: Option<&SelectedFile>) -> Self {
        match file {
            Some(file) => FileStatus::Selected {
                name: file.name.clone(),
                size_kib: file.size_kib(),
            },
            None => FileStatus::Empty,
        }
    }

    /// Text for the status line.
    pub fn text(&self) -> String {
        match self {
            FileStatus::Selected { name, size_kib } => {
                format!("Selected: {} ({} KB)", name, size_kib)
            }
            FileStatus::Empty => "No file selected".to_string(),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            FileStatus::Selected { .. } => StatusTone::Positive,
            FileStatus::Empty => StatusTone::Neutral,
        }
    }
}
