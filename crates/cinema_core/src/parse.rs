//! Parsing free text into catalog members.
//!
//! Identifiers (`COOKE_S4`) and display names (`Cooke S4 / S4i`) are both
//! accepted, ignoring ASCII case and surrounding whitespace.

use crate::{AspectRatio, CameraAngle, CameraBody, FocalLength, ImageSize, LensType};
use cinema_error::{TaxonomyError, TaxonomyErrorKind};
use std::str::FromStr;

#[track_caller]
fn lookup<T: FromStr>(
    text: &str,
    unknown: impl FnOnce(String) -> TaxonomyErrorKind,
) -> Result<T, TaxonomyError> {
    match text.trim().parse() {
        Ok(member) => Ok(member),
        Err(_) => Err(TaxonomyError::new(unknown(text.to_string()))),
    }
}

/// Camera body from an identifier or display name.
///
/// # Examples
///
/// ```
/// use cinema_core::{CameraBody, parse_camera};
///
/// assert_eq!(parse_camera("imax").unwrap(), CameraBody::Imax);
/// assert_eq!(parse_camera("Sony CineAlta VENICE").unwrap(), CameraBody::SonyVenice);
/// assert!(parse_camera("BOLEX").is_err());
/// ```
#[track_caller]
pub fn parse_camera(text: &str) -> Result<CameraBody, TaxonomyError> {
    lookup(text, TaxonomyErrorKind::UnknownCamera)
}

/// Lens type from an identifier or display name.
#[track_caller]
pub fn parse_lens(text: &str) -> Result<LensType, TaxonomyError> {
    lookup(text, TaxonomyErrorKind::UnknownLens)
}

/// Camera angle from an identifier or display name.
#[track_caller]
pub fn parse_angle(text: &str) -> Result<CameraAngle, TaxonomyError> {
    lookup(text, TaxonomyErrorKind::UnknownAngle)
}

/// Focal length from `85` or `85mm`.
#[track_caller]
pub fn parse_focal_length(text: &str) -> Result<FocalLength, TaxonomyError> {
    text.parse()
}

/// Aspect ratio from `16:9` style text.
#[track_caller]
pub fn parse_aspect_ratio(text: &str) -> Result<AspectRatio, TaxonomyError> {
    lookup(text, TaxonomyErrorKind::UnknownAspectRatio)
}

/// Output size from `1K`, `2K` or `4K`.
#[track_caller]
pub fn parse_image_size(text: &str) -> Result<ImageSize, TaxonomyError> {
    lookup(text, TaxonomyErrorKind::UnknownImageSize)
}
