//! Loading reference images from disk.

use cinema_core::ReferenceImage;
use cinema_error::{CinemaResult, StudioError, StudioErrorKind};
use std::path::Path;
use tracing::{debug, instrument};

/// MIME type for an image path, judged by extension.
///
/// # Examples
///
/// ```
/// use cinema_studio::mime_type_for;
///
/// assert_eq!(mime_type_for("stills/hero.JPG"), Some("image/jpeg"));
/// assert_eq!(mime_type_for("notes.txt"), None);
/// ```
pub fn mime_type_for(path: impl AsRef<Path>) -> Option<&'static str> {
    let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

/// Reads an image file into a reference image.
///
/// # Errors
///
/// Returns `ReferenceRead` if the extension is not a known image type or the
/// file cannot be read.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub async fn load_reference(path: impl AsRef<Path>) -> CinemaResult<ReferenceImage> {
    let path = path.as_ref();
    let mime_type = mime_type_for(path).ok_or_else(|| {
        StudioError::new(StudioErrorKind::ReferenceRead(format!(
            "{}: not a supported image type",
            path.display()
        )))
    })?;

    let data = tokio::fs::read(path).await.map_err(|e| {
        StudioError::new(StudioErrorKind::ReferenceRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    debug!(mime_type, bytes = data.len(), "Reference image loaded");
    Ok(ReferenceImage::new(mime_type, data))
}
