//! Gemini image generation client.

use crate::gemini::{GenerateContentRequest, GenerateContentResponse, extract_image};
use async_trait::async_trait;
use cinema_core::GeneratedImage;
use cinema_error::{CinemaResult, GeminiError, GeminiErrorKind};
use cinema_interface::{GenerationRequest, ImageGenerator};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Model used when neither the client nor the request names one.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Root of the Generative Language REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini image generation client.
///
/// # Examples
///
/// ```
/// use cinema_interface::ImageGenerator;
/// use cinema_models::{DEFAULT_MODEL, GeminiImageClient};
///
/// let client = GeminiImageClient::with_api_key("test-key").unwrap();
/// assert_eq!(client.model_name(), DEFAULT_MODEL);
///
/// let client = client.with_model("gemini-2.5-flash-image");
/// assert_eq!(client.model_name(), "gemini-2.5-flash-image");
/// ```
#[derive(Debug, Clone)]
pub struct GeminiImageClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiImageClient {
    /// Creates a client using the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key is not set or is blank
    /// - The HTTP client cannot be initialized
    #[instrument(skip_all)]
    pub fn new() -> CinemaResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::with_api_key(api_key)
    }

    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn with_api_key(api_key: impl Into<String>) -> CinemaResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Uses a different default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Points the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// API root the client posts to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full `generateContent` URL for a model.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl ImageGenerator for GeminiImageClient {
    #[instrument(skip(self, req), fields(model = tracing::field::Empty, references = req.reference_images().len()))]
    async fn generate_image(&self, req: &GenerationRequest) -> CinemaResult<GeneratedImage> {
        let model = req.model().as_deref().unwrap_or(&self.model);
        tracing::Span::current().record("model", model);

        let body = GenerateContentRequest::from(req);
        let url = self.endpoint(model);
        debug!(
            url = %url,
            aspect_ratio = %req.aspect_ratio(),
            image_size = %req.image_size(),
            "Sending Gemini generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini returned an error status");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string())))?;
        debug!(candidates = parsed.candidates().len(), "Gemini response parsed");

        let image = extract_image(&parsed)?;
        info!(
            mime_type = %image.mime_type(),
            bytes = image.data().len(),
            "Image received"
        );
        Ok(image)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
