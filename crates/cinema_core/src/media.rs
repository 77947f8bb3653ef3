//! Image payloads that travel alongside a prompt.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reference image attached to a generation request.
///
/// The composer never looks inside; the bytes are forwarded unchanged to the
/// image model ahead of the prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct ReferenceImage {
    /// Handle used to remove the image before generating
    id: Uuid,
    /// MIME type, e.g. "image/png"
    mime_type: String,
    /// Raw image bytes
    data: Vec<u8>,
}

impl ReferenceImage {
    /// Wraps raw bytes with a fresh id.
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Bytes encoded as standard base64, as inline-data APIs expect.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}

/// An image returned by the image model.
///
/// # Examples
///
/// ```
/// use cinema_core::GeneratedImage;
///
/// let image = GeneratedImage::new("image/png", vec![0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw==");
/// assert_eq!(image.file_extension(), "png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedImage {
    /// MIME type reported by the provider
    mime_type: String,
    /// Decoded image bytes
    data: Vec<u8>,
}

impl GeneratedImage {
    /// Wraps decoded image bytes.
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// `data:` URL suitable for embedding the image directly.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }

    /// File extension matching the MIME type.
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}
