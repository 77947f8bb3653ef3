//! Studio session, shot reel and configuration for Cinema Studio.
//!
//! [`Studio`] is the host around the prompt composer: it validates a shot,
//! composes the prompt, hands it to an [`ImageGenerator`](cinema_interface::ImageGenerator)
//! and files the result in its [`ShotReel`], keeping a one-line [`StudioStatus`]
//! for the user along the way.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod reel;
mod reference;
mod status;
mod studio;

pub use config::{ShotDefaults, StudioConfig};
pub use reel::ShotReel;
pub use reference::{load_reference, mime_type_for};
pub use status::{StudioStatus, failure_message};
pub use studio::Studio;
