//! Provider-neutral generation requests.

use cinema_core::{AspectRatio, ImageSize, ReferenceImage, ShotConfiguration};
use cinema_error::BuilderError;
use serde::{Deserialize, Serialize};

/// Everything a backend needs to render one shot.
///
/// # Examples
///
/// ```
/// use cinema_core::{AspectRatio, ShotConfiguration};
/// use cinema_interface::GenerationRequest;
///
/// let shot = ShotConfiguration::builder()
///     .aspect_ratio(AspectRatio::Vertical)
///     .subject("a dancer mid-leap")
///     .build()
///     .unwrap();
///
/// let req = GenerationRequest::from_shot(&shot, "MASTER_CINEMA_FRAME.");
/// assert_eq!(req.prompt_text(), "MASTER_CINEMA_FRAME.");
/// assert_eq!(*req.aspect_ratio(), AspectRatio::Vertical);
/// assert!(req.model().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Fully composed prompt
    prompt_text: String,
    /// Images sent ahead of the prompt
    #[builder(default)]
    #[serde(skip)]
    reference_images: Vec<ReferenceImage>,
    /// Frame aspect ratio
    #[builder(default)]
    aspect_ratio: AspectRatio,
    /// Output size
    #[builder(default)]
    image_size: ImageSize,
    /// Model override; the backend's own model when unset
    #[builder(default)]
    model: Option<String>,
}

impl GenerationRequest {
    /// Creates a new builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Request for a shot whose prompt has already been composed.
    pub fn from_shot(config: &ShotConfiguration, prompt_text: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            reference_images: config.reference_images().clone(),
            aspect_ratio: *config.aspect_ratio(),
            image_size: *config.image_size(),
            model: None,
        }
    }

    /// Same request, rendered by a specific model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

impl From<GenerationRequestBuilderError> for BuilderError {
    #[track_caller]
    fn from(err: GenerationRequestBuilderError) -> Self {
        BuilderError::from(err.to_string())
    }
}
