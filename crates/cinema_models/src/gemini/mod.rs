//! Gemini image models over the `generateContent` REST endpoint.

mod client;
mod dto;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiImageClient};
pub use dto::{
    Candidate, GeminiContent, GeminiPart, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, ImageConfig, InlineData, PromptFeedback, extract_image,
};
