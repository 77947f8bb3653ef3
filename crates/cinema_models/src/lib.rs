//! Image provider integrations for Cinema Studio.
//!
//! Each provider lives behind its own feature flag and implements
//! [`ImageGenerator`](cinema_interface::ImageGenerator).
//!
//! # Available Providers
//!
//! - **Gemini** (Google image models) - Enable with `gemini` feature (default)
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use cinema_composer::compose_prompt;
//! use cinema_core::ShotConfiguration;
//! use cinema_interface::{GenerationRequest, ImageGenerator};
//! use cinema_models::GeminiImageClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiImageClient::new()?;
//! let shot = ShotConfiguration::builder()
//!     .subject("a lighthouse in a storm")
//!     .build()?;
//! let request = GenerationRequest::from_shot(&shot, compose_prompt(&shot));
//! let image = client.generate_image(&request).await?;
//! println!("{}", image.to_data_url().len());
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    Candidate, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiContent, GeminiImageClient, GeminiPart,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig, InlineData,
    PromptFeedback, extract_image,
};
