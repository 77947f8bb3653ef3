//! Prompt composition for Cinema Studio.
//!
//! Turns a [`ShotConfiguration`](cinema_core::ShotConfiguration) into the single
//! natural-language instruction sent to the image model. Composition is a pure
//! function of the configuration and the static taxonomy: no clock, no
//! randomness, no I/O.
//!
//! # Examples
//!
//! ```
//! use cinema_composer::{compose_prompt, focal_length_label};
//! use cinema_core::{FocalLength, ShotConfiguration};
//!
//! let shot = ShotConfiguration::builder()
//!     .focal_length(FocalLength::Mm135)
//!     .subject("an astronaut's visor reflecting Earth")
//!     .build()
//!     .unwrap();
//!
//! let prompt = compose_prompt(&shot);
//! assert!(prompt.starts_with("MASTER_CINEMA_FRAME."));
//! assert!(prompt.contains("close-up portrait optics (135mm)"));
//! assert_eq!(focal_length_label(FocalLength::Mm135), "CLOSE-UP PORTRAIT");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fragments;
mod sections;

pub use fragments::{
    ANAMORPHIC_FRAGMENT, ATMOSPHERE_LINE, CLOSING_LINE, HEADER_LINE, SPHERICAL_FRAGMENT,
    anamorphic_fragment, focal_length_label, physics_fragment,
};
pub use sections::{PromptSections, compose_prompt};
