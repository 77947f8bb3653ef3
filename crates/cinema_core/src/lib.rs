//! Shot taxonomy and core data types for Cinema Studio.
//!
//! This crate holds the closed catalogs a shot is assembled from (camera bodies,
//! lenses, camera angles, focal lengths, aspect ratios and output sizes) together
//! with their descriptive metadata, and the value types that flow between the
//! prompt composer, the image providers and the studio.
//!
//! Every catalog is a plain enum whose metadata lives in an exhaustive `match`,
//! so adding a member without describing it fails to compile.
//!
//! # Examples
//!
//! ```
//! use cinema_core::{all_lens_types, Catalog, LensType, SpecSheet};
//!
//! assert_eq!(all_lens_types().len(), 10);
//! let cooke = LensType::CookeS4;
//! assert_eq!(cooke.to_string(), "Cooke S4 / S4i");
//! assert!(cooke.spec().prompt.contains("Cooke Look"));
//! assert!(!cooke.spec().usage().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod angle;
mod camera;
mod catalog;
mod focal;
mod format;
mod lens;
mod media;
mod parse;
mod shot;

pub use angle::{AngleSpec, CameraAngle};
pub use camera::{CameraBody, CameraSpec};
pub use catalog::{
    Catalog, SpecSheet, all_aspect_ratios, all_camera_angles, all_camera_bodies,
    all_focal_lengths, all_image_sizes, all_lens_types,
};
pub use focal::{FocalGroup, FocalLength, FocalSpec};
pub use format::{AspectRatio, ImageSize};
pub use lens::{LensSpec, LensType};
pub use media::{GeneratedImage, ReferenceImage};
pub use parse::{
    parse_angle, parse_aspect_ratio, parse_camera, parse_focal_length, parse_image_size,
    parse_lens,
};
pub use shot::{
    GeneratedShot, ShotConfiguration, ShotConfigurationBuilder, ShotConfigurationBuilderError,
    ShotSettings,
};
