//! The image generation contract.

use crate::GenerationRequest;
use async_trait::async_trait;
use cinema_core::GeneratedImage;
use cinema_error::CinemaResult;

/// Backend that turns a composed prompt into an image.
///
/// Implementations attach the reference images before the prompt text and
/// return the first image the provider produces.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image for the request.
    async fn generate_image(&self, req: &GenerationRequest) -> CinemaResult<GeneratedImage>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-3-pro-image-preview").
    fn model_name(&self) -> &str;

    /// Maximum number of reference images per request.
    fn max_reference_images(&self) -> usize {
        14
    }

    /// Reference image formats the provider accepts (MIME types).
    fn supported_reference_formats(&self) -> &[&'static str] {
        &["image/png", "image/jpeg", "image/webp", "image/heic", "image/heif"]
    }
}
