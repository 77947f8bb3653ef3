//! Trait definitions for Cinema Studio image backends.
//!
//! The studio never talks to a provider directly. It hands a
//! [`GenerationRequest`] to whatever [`ImageGenerator`] it was built with and
//! gets a [`GeneratedImage`](cinema_core::GeneratedImage) back.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod request;
mod traits;

pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError};
pub use traits::ImageGenerator;
