//! UI Components for the Upload Portal.
//!
//! # Layout Components
//! - [`Hero`] - Portal title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - Upload form with file status and submission checks
//! - [`ConfirmationPage`] - Success page hosting the confetti container

mod hero;
mod upload;
mod confirmation;
mod footer;

pub use hero::*;
pub use upload::*;
pub use confirmation::*;
pub use footer::*;
