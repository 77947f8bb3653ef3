//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Field names follow the REST API's camelCase JSON.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cinema_core::{AspectRatio, GeneratedImage, ImageSize};
use cinema_error::{GeminiError, GeminiErrorKind};
use cinema_interface::GenerationRequest;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Base64 payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type, e.g. "image/png"
    mime_type: String,
    /// Base64-encoded bytes
    data: String,
}

impl InlineData {
    /// Creates inline data from an already-encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

/// One part of a content block: text or inline data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPart {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Inline binary payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    /// Set on intermediate "thinking" output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thought: Option<bool>,
}

impl GeminiPart {
    /// A text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// An inline data part.
    pub fn from_inline(data: InlineData) -> Self {
        Self {
            inline_data: Some(data),
            ..Self::default()
        }
    }

    fn is_thought(&self) -> bool {
        self.thought.unwrap_or(false)
    }
}

/// A block of parts from one role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiContent {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Ordered parts
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// Output frame settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Frame aspect ratio, serialized as "16:9" etc.
    aspect_ratio: AspectRatio,
    /// Output size, serialized as "1K" etc.
    image_size: ImageSize,
}

/// Generation settings sent with every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Modalities the model may answer with
    response_modalities: Vec<String>,
    /// Output frame settings
    image_config: ImageConfig,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// A single user turn
    contents: Vec<GeminiContent>,
    /// Output settings
    generation_config: GenerationConfig,
}

impl From<&GenerationRequest> for GenerateContentRequest {
    /// Reference images go first, the prompt text last.
    fn from(req: &GenerationRequest) -> Self {
        let mut parts: Vec<GeminiPart> = req
            .reference_images()
            .iter()
            .map(|image| {
                GeminiPart::from_inline(InlineData::new(image.mime_type(), image.to_base64()))
            })
            .collect();
        parts.push(GeminiPart::from_text(req.prompt_text()));

        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: *req.aspect_ratio(),
                    image_size: *req.image_size(),
                },
            },
        }
    }
}

/// One candidate answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Answer content, absent when generation was stopped early
    #[serde(default)]
    content: Option<GeminiContent>,
    /// Why generation stopped, e.g. "STOP" or "SAFETY"
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Prompt-level feedback, present when the prompt itself was blocked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Block reason, e.g. "SAFETY"
    #[serde(default)]
    block_reason: Option<String>,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate answers
    #[serde(default)]
    candidates: Vec<Candidate>,
    /// Prompt feedback
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

/// Pulls the first image out of a response.
///
/// Only the first candidate is inspected. Thought parts are skipped.
///
/// # Errors
///
/// - `EmptyResponse` when there are no candidates
/// - `NoImageInResponse` when the first candidate carries no inline data
/// - `Base64Decode` when the payload is not valid base64
pub fn extract_image(response: &GenerateContentResponse) -> Result<GeneratedImage, GeminiError> {
    let Some(candidate) = response.candidates.first() else {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            tracing::warn!(block_reason = reason, "Prompt was blocked");
        }
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    };

    let inline = candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter(|part| !part.is_thought())
        .find_map(|part| part.inline_data.as_ref());

    let Some(inline) = inline else {
        let reason = candidate
            .finish_reason
            .clone()
            .unwrap_or_else(|| "unknown".to_string());
        return Err(GeminiError::new(GeminiErrorKind::NoImageInResponse(reason)));
    };

    let bytes = STANDARD
        .decode(inline.data.as_bytes())
        .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;

    Ok(GeneratedImage::new(inline.mime_type.clone(), bytes))
}
