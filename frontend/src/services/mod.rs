//! Browser services.
//!
//! # Services
//!
//! - [`confetti`] - Confetti container and timer bindings for the
//!   confirmation page

pub mod confetti;

pub use confetti::*;
