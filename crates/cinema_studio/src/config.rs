//! Studio configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from cinema.toml)
//! - `~/.config/cinema/cinema.toml`
//! - `./cinema.toml`

use cinema_core::{
    AspectRatio, CameraAngle, CameraBody, FocalLength, ImageSize, LensType, ShotConfiguration,
    ShotConfigurationBuilder,
};
use cinema_error::{CinemaResult, ConfigError};
use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../cinema.toml");

/// Initial selections for new shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ShotDefaults {
    /// Camera body
    camera: CameraBody,
    /// Lens family
    lens: LensType,
    /// Focal length in millimeters
    focal_length: FocalLength,
    /// Whether the angle line is included
    angle_enabled: bool,
    /// Camera angle
    angle: CameraAngle,
    /// Anamorphic rendering
    anamorphic: bool,
    /// Frame aspect ratio
    aspect_ratio: AspectRatio,
    /// Output size
    image_size: ImageSize,
}

impl Default for ShotDefaults {
    fn default() -> Self {
        let shot = ShotConfiguration::default();
        Self {
            camera: *shot.camera(),
            lens: *shot.lens(),
            focal_length: *shot.focal_length(),
            angle_enabled: *shot.angle_enabled(),
            angle: *shot.angle(),
            anamorphic: *shot.anamorphic(),
            aspect_ratio: *shot.aspect_ratio(),
            image_size: *shot.image_size(),
        }
    }
}

/// Studio configuration.
///
/// # Examples
///
/// ```
/// use cinema_core::CameraBody;
/// use cinema_studio::StudioConfig;
///
/// let config = StudioConfig::bundled().unwrap();
/// assert_eq!(config.model(), "gemini-3-pro-image-preview");
/// assert_eq!(*config.defaults().camera(), CameraBody::ArriAlexa35);
///
/// let shot = config.default_configuration().subject("a foggy pier").build().unwrap();
/// assert_eq!(*shot.camera(), CameraBody::ArriAlexa35);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct StudioConfig {
    /// Gemini model used for generation
    model: String,
    /// Directory captured shots are written to
    output_dir: PathBuf,
    /// Initial shot selections
    #[serde(default)]
    defaults: ShotDefaults,
}

impl StudioConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed, or names
    /// a value outside the shot catalogs.
    #[instrument]
    pub fn load() -> CinemaResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Self::bundled_source();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/cinema/cinema.toml");
            debug!(path = %home_config.display(), "Checking home config");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("cinema").required(false));

        Self::finish(builder, "layered configuration")
    }

    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file is malformed.
    pub fn bundled() -> CinemaResult<Self> {
        Self::finish(Self::bundled_source(), "bundled cinema.toml")
    }

    /// Bundled defaults overridden by a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CinemaResult<Self> {
        let path = path.as_ref();
        let builder = Self::bundled_source().add_source(File::from(path));
        Self::finish(builder, path.display().to_string())
    }

    /// Builder for a shot seeded with the configured selections.
    pub fn default_configuration(&self) -> ShotConfigurationBuilder {
        let defaults = &self.defaults;
        let mut builder = ShotConfiguration::builder();
        builder
            .camera(defaults.camera)
            .lens(defaults.lens)
            .focal_length(defaults.focal_length)
            .angle_enabled(defaults.angle_enabled)
            .angle(defaults.angle)
            .anamorphic(defaults.anamorphic)
            .aspect_ratio(defaults.aspect_ratio)
            .image_size(defaults.image_size);
        builder
    }

    fn bundled_source() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>, origin: impl Into<String>) -> CinemaResult<Self> {
        let origin = origin.into();
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read config: {}", e)).with_origin(&origin))?
            .try_deserialize()
            .map_err(|e| {
                ConfigError::new(format!("Failed to deserialize config: {}", e)).with_origin(&origin)
            })?;

        debug!(
            model = %config.model,
            output_dir = %config.output_dir.display(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
