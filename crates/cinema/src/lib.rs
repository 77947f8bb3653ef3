//! Cinema Studio - cinematography prompts for generative image models.
//!
//! Pick a camera body, lens, focal length and camera angle, describe the scene,
//! and Cinema Studio composes a single director's prompt and sends it to a
//! Gemini image model.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use cinema::{CameraBody, FocalLength, GeminiImageClient, LensType, ShotConfiguration, Studio};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut studio = Studio::new(GeminiImageClient::new()?);
//! let shot = ShotConfiguration::builder()
//!     .camera(CameraBody::Imax)
//!     .lens(LensType::PanavisionC)
//!     .focal_length(FocalLength::Mm18)
//!     .subject("a caravan crossing salt flats at dusk")
//!     .build()?;
//!
//! let settings = *studio.generate(&shot).await?.settings();
//! println!("{} ({})", studio.status(), settings);
//! # Ok(())
//! # }
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini image models (default)
//! - `api` - Enables tests that call the real API
//!
//! # Architecture
//!
//! - `cinema_error` - Error types
//! - `cinema_core` - Shot catalogs and data types
//! - `cinema_composer` - Prompt composition
//! - `cinema_interface` - `ImageGenerator` trait
//! - `cinema_models` - Provider implementations
//! - `cinema_studio` - Studio session, shot reel and configuration
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod guide;
mod listing;
pub mod telemetry;

pub use commands::{CatalogKind, Cli, Commands, OutputFormat, ShotArgs};
pub use guide::{GuideSection, SHOOTING_GUIDE};
pub use listing::{CatalogEntry, catalog_entries, focal_entries};

pub use cinema_composer::*;
pub use cinema_core::*;
pub use cinema_error::*;
pub use cinema_interface::*;
#[cfg(feature = "gemini")]
pub use cinema_models::*;
pub use cinema_studio::*;
