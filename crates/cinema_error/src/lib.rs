//! Error types for Cinema Studio.
//!
//! This crate provides the foundation error types used throughout the Cinema Studio workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cinema_error::{CinemaResult, TaxonomyError, TaxonomyErrorKind};
//!
//! fn parse_focal(mm: u16) -> CinemaResult<u16> {
//!     Err(TaxonomyError::new(TaxonomyErrorKind::UnsupportedFocalLength(mm)))?
//! }
//!
//! match parse_focal(42) {
//!     Ok(mm) => println!("Got: {}mm", mm),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod gemini;
mod json;
mod studio;
mod taxonomy;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{CinemaError, CinemaErrorKind, CinemaResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use studio::{StudioError, StudioErrorKind};
pub use taxonomy::{TaxonomyError, TaxonomyErrorKind};
