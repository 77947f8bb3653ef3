//! CLI command definitions for the `cinema` binary.

use crate::{
    AspectRatio, BuilderError, CameraAngle, CameraBody, CinemaResult, FocalLength, ImageSize,
    LensType, ReferenceImage, ShotConfiguration, StudioConfig, parse_angle, parse_aspect_ratio,
    parse_camera, parse_focal_length, parse_image_size, parse_lens,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Cinema Studio - compose cinematography prompts and render them with Gemini
#[derive(Parser, Debug)]
#[command(name = "cinema")]
#[command(about = "Compose cinematography prompts and render them with Gemini image models", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the usual search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cameras, lenses, angles, focal lengths, ratios or sizes
    Catalog {
        /// Which catalog to list (all when omitted)
        kind: Option<CatalogKind>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the composed prompt without rendering
    Prompt {
        /// Shot selections
        #[command(flatten)]
        shot: ShotArgs,

        /// Print each prompt section under a heading
        #[arg(long)]
        sections: bool,
    },

    /// Compose, render with Gemini and save the shot
    #[cfg(feature = "gemini")]
    Generate {
        /// Shot selections
        #[command(flatten)]
        shot: ShotArgs,

        /// Reference image to send ahead of the prompt (repeatable)
        #[arg(long = "reference", value_name = "FILE")]
        references: Vec<PathBuf>,

        /// Directory to save the shot in (defaults to output_dir from config)
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Gemini model (defaults to model from config)
        #[arg(long)]
        model: Option<String>,
    },

    /// Print the director's guide
    Guide,
}

/// Catalog selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    /// Camera bodies
    Cameras,
    /// Lenses
    Lenses,
    /// Camera angles
    Angles,
    /// Focal lengths
    Focal,
    /// Aspect ratios
    Ratios,
    /// Output sizes
    Sizes,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Human,
    /// JSON
    Json,
}

/// Shot selections shared by `prompt` and `generate`.
///
/// Anything left out falls back to the `[defaults]` table of the config.
#[derive(Args, Debug, Clone)]
pub struct ShotArgs {
    /// Camera body, by id or name (e.g. ARRI_ALEXA_35)
    #[arg(long, value_parser = parse_camera)]
    pub camera: Option<CameraBody>,

    /// Lens, by id or name (e.g. COOKE_S4)
    #[arg(long, value_parser = parse_lens)]
    pub lens: Option<LensType>,

    /// Focal length in millimeters (8, 12, 18, 25, 35, 50, 75, 85, 100, 135)
    #[arg(long, value_parser = parse_focal_length)]
    pub focal: Option<FocalLength>,

    /// Camera angle, by id or name (e.g. THREE_QUARTER)
    #[arg(long, value_parser = parse_angle, conflicts_with = "no_angle")]
    pub angle: Option<CameraAngle>,

    /// Leave the camera angle out of the prompt
    #[arg(long)]
    pub no_angle: bool,

    /// Free-text camera position appended to the angle
    #[arg(long, value_name = "TEXT")]
    pub custom_angle: Option<String>,

    /// Anamorphic bokeh and flares
    #[arg(long, conflicts_with = "spherical")]
    pub anamorphic: bool,

    /// Spherical rendering, overriding an anamorphic default
    #[arg(long)]
    pub spherical: bool,

    /// Aspect ratio (16:9, 4:3, 1:1, 9:16, 3:4)
    #[arg(long, value_parser = parse_aspect_ratio)]
    pub ratio: Option<AspectRatio>,

    /// Output size (1K, 2K, 4K)
    #[arg(long, value_parser = parse_image_size)]
    pub size: Option<ImageSize>,

    /// Scene description
    #[arg(required = true, num_args = 1.., value_name = "SUBJECT")]
    pub subject: Vec<String>,
}

impl ShotArgs {
    /// Shot from these selections over the configured defaults.
    pub fn to_configuration(
        &self,
        config: &StudioConfig,
        reference_images: Vec<ReferenceImage>,
    ) -> CinemaResult<ShotConfiguration> {
        let defaults = config.defaults();
        let angle_enabled = if self.no_angle {
            false
        } else {
            self.angle.is_some() || *defaults.angle_enabled()
        };
        let anamorphic = if self.spherical {
            false
        } else {
            self.anamorphic || *defaults.anamorphic()
        };

        let mut builder = config.default_configuration();
        builder
            .angle_enabled(angle_enabled)
            .anamorphic(anamorphic)
            .custom_angle(self.custom_angle.clone().unwrap_or_default())
            .subject(self.subject.join(" "))
            .reference_images(reference_images);
        if let Some(camera) = self.camera {
            builder.camera(camera);
        }
        if let Some(lens) = self.lens {
            builder.lens(lens);
        }
        if let Some(focal) = self.focal {
            builder.focal_length(focal);
        }
        if let Some(angle) = self.angle {
            builder.angle(angle);
        }
        if let Some(ratio) = self.ratio {
            builder.aspect_ratio(ratio);
        }
        if let Some(size) = self.size {
            builder.image_size(size);
        }

        Ok(builder.build().map_err(BuilderError::from)?)
    }
}
