//! Mock image generator for testing.

use async_trait::async_trait;
use cinema_core::GeneratedImage;
use cinema_error::{CinemaError, CinemaResult, GeminiError, GeminiErrorKind};
use cinema_interface::{GenerationRequest, ImageGenerator};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return this image
    Image(GeneratedImage),
    /// Always fail with this error
    Error(GeminiErrorKind),
    /// Return these results in order, then fail
    Sequence(Vec<Result<GeneratedImage, GeminiErrorKind>>),
}

/// Mock generator that records every request it receives.
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockImageGenerator {
    /// Always returns a tiny PNG.
    pub fn new_success() -> Self {
        Self::new_with_behavior(MockBehavior::Image(GeneratedImage::new(
            "image/png",
            vec![0x89, 0x50, 0x4E, 0x47],
        )))
    }

    /// Always fails with `error`.
    #[allow(dead_code)]
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Replays `results` in order.
    #[allow(dead_code)]
    pub fn new_sequence(results: Vec<Result<GeneratedImage, GeminiErrorKind>>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(results))
    }

    /// Custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of generate_image calls.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Copy of every request received, oldest first.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn fail(kind: GeminiErrorKind) -> CinemaResult<GeneratedImage> {
        Err(CinemaError::from(GeminiError::new(kind)))
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_image(&self, req: &GenerationRequest) -> CinemaResult<GeneratedImage> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        match &self.behavior {
            MockBehavior::Image(image) => Ok(image.clone()),
            MockBehavior::Error(kind) => Self::fail(kind.clone()),
            MockBehavior::Sequence(results) => match results.get(call) {
                Some(Ok(image)) => Ok(image.clone()),
                Some(Err(kind)) => Self::fail(kind.clone()),
                None => Self::fail(GeminiErrorKind::ApiRequest(format!(
                    "Mock sequence exhausted (call {} beyond {} results)",
                    call + 1,
                    results.len()
                ))),
            },
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image"
    }

    fn max_reference_images(&self) -> usize {
        3
    }
}
