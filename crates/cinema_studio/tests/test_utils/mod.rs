//! Test utilities for studio tests.

pub mod mock_generator;

#[allow(unused_imports)]
pub use mock_generator::{MockBehavior, MockImageGenerator};

use cinema_core::{ShotConfiguration, ShotConfigurationBuilder};

/// Builder for a shot with a usable subject.
#[allow(dead_code)]
pub fn shot(subject: &str) -> ShotConfigurationBuilder {
    let mut builder = ShotConfiguration::builder();
    builder.subject(subject);
    builder
}
