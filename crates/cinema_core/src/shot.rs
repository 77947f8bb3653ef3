//! Shot configuration and the records kept for generated shots.

use crate::{
    AspectRatio, CameraAngle, CameraBody, FocalLength, GeneratedImage, ImageSize, LensType,
    ReferenceImage,
};
use chrono::{DateTime, Utc};
use cinema_error::{BuilderError, BuilderErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every cinematographic choice for one generation request.
///
/// Built fresh from the current selections right before each request and never
/// mutated afterwards. Fields left unset on the builder take the studio
/// defaults (ARRI ALEXA 35, Zeiss Ultra Prime, 35mm, eye level, spherical,
/// 16:9 at 1K).
///
/// # Examples
///
/// ```
/// use cinema_core::{CameraAngle, CameraBody, FocalLength, LensType, ShotConfiguration};
///
/// let shot = ShotConfiguration::builder()
///     .camera(CameraBody::ArriAlexa35)
///     .lens(LensType::CookeS4)
///     .focal_length(FocalLength::Mm85)
///     .angle(CameraAngle::ThreeQuarter)
///     .subject("a lone detective in rain")
///     .build()
///     .unwrap();
///
/// assert_eq!(shot.active_angle(), Some(CameraAngle::ThreeQuarter));
/// assert_eq!(shot.subject(), "a lone detective in rain");
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
#[builder(default, setter(into))]
#[serde(default)]
pub struct ShotConfiguration {
    /// Camera body
    camera: CameraBody,
    /// Lens family
    lens: LensType,
    /// Focal length
    focal_length: FocalLength,
    /// Whether the angle line is part of the prompt
    angle_enabled: bool,
    /// Selected angle, only meaningful when `angle_enabled`
    angle: CameraAngle,
    /// Free-text camera position appended to the angle line
    custom_angle: String,
    /// Anamorphic rather than spherical rendering
    anamorphic: bool,
    /// Scene description, used verbatim
    subject: String,
    /// Frame aspect ratio
    aspect_ratio: AspectRatio,
    /// Output size
    image_size: ImageSize,
    /// Reference images forwarded unchanged
    #[serde(skip)]
    reference_images: Vec<ReferenceImage>,
}

impl Default for ShotConfiguration {
    fn default() -> Self {
        Self {
            camera: CameraBody::ArriAlexa35,
            lens: LensType::ZeissUltra,
            focal_length: FocalLength::Mm35,
            angle_enabled: true,
            angle: CameraAngle::EyeLevel,
            custom_angle: String::new(),
            anamorphic: false,
            subject: String::new(),
            aspect_ratio: AspectRatio::Widescreen,
            image_size: ImageSize::OneK,
            reference_images: Vec::new(),
        }
    }
}

impl ShotConfiguration {
    /// Creates a new builder seeded with the studio defaults.
    pub fn builder() -> ShotConfigurationBuilder {
        ShotConfigurationBuilder::default()
    }

    /// The angle that shapes the prompt, if angles are enabled.
    pub fn active_angle(&self) -> Option<CameraAngle> {
        self.angle_enabled.then_some(self.angle)
    }

    /// Custom camera position text, if any was typed.
    pub fn custom_position(&self) -> Option<&str> {
        let trimmed = self.custom_angle.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Display snapshot of the settings, detached from this configuration.
    pub fn settings(&self) -> ShotSettings {
        ShotSettings::from(self)
    }
}

impl From<ShotConfigurationBuilderError> for BuilderError {
    #[track_caller]
    fn from(err: ShotConfigurationBuilderError) -> Self {
        match err {
            ShotConfigurationBuilderError::UninitializedField(field) => {
                BuilderError::new(BuilderErrorKind::MissingField(field.to_string()))
            }
            ShotConfigurationBuilderError::ValidationError(msg) => BuilderError::from(msg),
        }
    }
}

/// The subset of a shot configuration shown next to a generated image.
///
/// Copied out of the configuration so later selection changes cannot alter
/// past results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShotSettings {
    /// Camera body
    pub camera: CameraBody,
    /// Lens family
    pub lens: LensType,
    /// Focal length
    pub focal_length: FocalLength,
    /// Angle, when angles were enabled
    pub angle: Option<CameraAngle>,
    /// Frame aspect ratio
    pub aspect_ratio: AspectRatio,
    /// Output size
    pub image_size: ImageSize,
}

impl From<&ShotConfiguration> for ShotSettings {
    fn from(config: &ShotConfiguration) -> Self {
        Self {
            camera: config.camera,
            lens: config.lens,
            focal_length: config.focal_length,
            angle: config.active_angle(),
            aspect_ratio: config.aspect_ratio,
            image_size: config.image_size,
        }
    }
}

impl std::fmt::Display for ShotSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} • {} • {}", self.camera, self.lens, self.focal_length)?;
        if let Some(angle) = self.angle {
            write!(f, " • {}", angle)?;
        }
        write!(f, " • {} @ {}", self.aspect_ratio, self.image_size)
    }
}

/// A successfully generated shot, as kept in the shot reel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedShot {
    /// Unique shot id
    id: Uuid,
    /// The returned image
    image: GeneratedImage,
    /// Scene description the user typed
    original_prompt: String,
    /// Full prompt sent to the model
    composed_prompt: String,
    /// Settings the shot was taken with
    settings: ShotSettings,
    /// When the shot was captured
    created_at: DateTime<Utc>,
}

impl GeneratedShot {
    /// Records a new shot, stamped with a fresh id and the current time.
    pub fn new(
        image: GeneratedImage,
        original_prompt: impl Into<String>,
        composed_prompt: impl Into<String>,
        settings: ShotSettings,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            original_prompt: original_prompt.into(),
            composed_prompt: composed_prompt.into(),
            settings,
            created_at: Utc::now(),
        }
    }

    /// File name the image is saved under, e.g. `<id>.png`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.id, self.image.file_extension())
    }
}
