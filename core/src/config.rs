//! Portal configuration.
//!
//! Limits, element ids and animation timings shared by the guard and the
//! confetti emitter. These are compile-time constants: the page markup and
//! the upload endpoint are owned by the hosting server.

/// Maximum accepted file size (in bytes).
///
/// 16 MiB. Only enforced client-side; the upload server must apply its own
/// limit.
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Accepted file extensions, lowercase, without the leading dot.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["log", "pdf", "csv", "zip"];

/// Form action the browser posts to once every rule passes.
pub const UPLOAD_ENDPOINT: &str = "/upload";

// =============================================================================
// Element ids
// =============================================================================

/// File picker `<input type="file">`.
pub const FILE_INPUT_ID: &str = "file";

/// Status line under the file picker.
pub const FILE_INFO_ID: &str = "fileInfo";

/// The upload `<form>`.
pub const UPLOAD_FORM_ID: &str = "uploadForm";

/// Log date/time input.
pub const LOG_DATETIME_ID: &str = "log_datetime";

/// Uploader name input.
pub const UPLOADER_NAME_ID: &str = "uploader_name";

/// Optional free-text description.
pub const DESCRIPTION_ID: &str = "description";

/// Container present only on the confirmation page.
pub const CONFETTI_CONTAINER_ID: &str = "confetti-container";

// =============================================================================
// File status display
// =============================================================================

/// Status color once a file is picked.
pub const STATUS_COLOR_SELECTED: &str = "#4caf50";

/// Status color while nothing is picked.
pub const STATUS_COLOR_EMPTY: &str = "#666";

// =============================================================================
// Confetti
// =============================================================================

/// Particles spawned per launch.
pub const CONFETTI_COUNT: usize = 30;

/// Particle colors.
pub const CONFETTI_PALETTE: [&str; 5] = ["#FFC107", "#FF5722", "#4CAF50", "#2196F3", "#9C27B0"];

/// CSS class carried by every particle.
pub const CONFETTI_CLASS: &str = "confetti";

/// Upper bound (exclusive) of the per-particle animation delay, in seconds.
pub const CONFETTI_MAX_DELAY_SECS: f64 = 0.7;

/// Delay between page initialization and the launch, in milliseconds.
pub const CONFETTI_LAUNCH_DELAY_MS: u32 = 200;

/// Lifetime of a particle once inserted, in milliseconds.
pub const CONFETTI_LIFETIME_MS: u32 = 3000;
