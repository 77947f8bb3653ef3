//! Catalog traits and ordered member listings.

use crate::{AspectRatio, CameraAngle, CameraBody, FocalLength, ImageSize, LensType};
use strum::IntoEnumIterator;

/// A closed catalog of shot choices with static metadata per member.
///
/// Implementors map every member to its record with an exhaustive `match`,
/// which keeps the lookup total and constant-time.
pub trait Catalog: Copy + IntoEnumIterator + 'static {
    /// Metadata record attached to each member.
    type Spec: SpecSheet + 'static;

    /// Stable identifier used in config files and JSON (e.g. `ARRI_ALEXA_35`).
    fn id(&self) -> &'static str;

    /// Metadata record for this member.
    fn spec(&self) -> &'static Self::Spec;

    /// All members in declaration order.
    fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// Tooltip text shared by every catalog's metadata record.
pub trait SpecSheet {
    /// Short description of the member.
    fn description(&self) -> &'static str;

    /// Evocative detail about the look it produces.
    fn detail(&self) -> &'static str;

    /// When to reach for it.
    fn usage(&self) -> &'static str;

    /// Prompt fragment inserted verbatim into the composed prompt, if any.
    fn prompt(&self) -> Option<&'static str> {
        None
    }
}

/// Camera bodies in declaration order.
pub fn all_camera_bodies() -> Vec<CameraBody> {
    CameraBody::all()
}

/// Lens types in declaration order.
pub fn all_lens_types() -> Vec<LensType> {
    LensType::all()
}

/// Camera angles in declaration order.
pub fn all_camera_angles() -> Vec<CameraAngle> {
    CameraAngle::all()
}

/// Focal lengths, shortest first.
pub fn all_focal_lengths() -> Vec<FocalLength> {
    FocalLength::all()
}

/// Aspect ratios in the order the studio offers them.
pub fn all_aspect_ratios() -> Vec<AspectRatio> {
    AspectRatio::iter().collect()
}

/// Output sizes, smallest first.
pub fn all_image_sizes() -> Vec<ImageSize> {
    ImageSize::iter().collect()
}
