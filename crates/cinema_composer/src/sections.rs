//! The composed prompt, line by line.

use crate::fragments::{
    ATMOSPHERE_LINE, CLOSING_LINE, HEADER_LINE, anamorphic_fragment, physics_fragment,
};
use cinema_core::{Catalog, ShotConfiguration};

/// Every line of a composed prompt, kept separately.
///
/// The `Display` impl joins the lines with newlines in prompt order, skipping
/// the angle line when angles are disabled.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PromptSections {
    /// Fixed opening tag
    #[getter(skip)]
    header: &'static str,
    /// Camera body and its description
    camera: String,
    /// Lens, its description and the focal length
    optics: String,
    /// Angle fragment plus any custom position
    angle: Option<String>,
    /// Focal physics, lens fragment and bokeh fragment
    physics: String,
    /// Fixed lighting boilerplate
    #[getter(skip)]
    atmosphere: &'static str,
    /// Scene description
    subject: String,
    /// Fixed fidelity boilerplate
    #[getter(skip)]
    closing: &'static str,
}

impl PromptSections {
    /// Fixed opening tag.
    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Fixed lighting boilerplate.
    pub fn atmosphere(&self) -> &'static str {
        self.atmosphere
    }

    /// Fixed fidelity boilerplate.
    pub fn closing(&self) -> &'static str {
        self.closing
    }

    /// Lines in prompt order.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![self.header, self.camera.as_str(), self.optics.as_str()];
        if let Some(angle) = &self.angle {
            lines.push(angle);
        }
        lines.extend([
            self.physics.as_str(),
            self.atmosphere,
            self.subject.as_str(),
            self.closing,
        ]);
        lines
    }
}

impl From<&ShotConfiguration> for PromptSections {
    fn from(config: &ShotConfiguration) -> Self {
        let camera = config.camera();
        let lens = config.lens();
        let focal = *config.focal_length();

        let angle = config.active_angle().map(|angle| {
            let mut line = format!("Camera Angle: {}", angle.spec().prompt);
            if let Some(position) = config.custom_position() {
                line.push_str(", custom position: ");
                line.push_str(position);
            }
            line
        });

        Self {
            header: HEADER_LINE,
            camera: format!("Shot on {} ({}).", camera, camera.spec().description),
            optics: format!(
                "Optics: {} ({}) at {}mm.",
                lens,
                lens.spec().description,
                focal.millimeters()
            ),
            angle,
            physics: format!(
                "Optical Physics: {} {} {}",
                physics_fragment(focal),
                lens.spec().prompt,
                anamorphic_fragment(*config.anamorphic())
            ),
            atmosphere: ATMOSPHERE_LINE,
            subject: format!("Subject: {}", config.subject()),
            closing: CLOSING_LINE,
        }
    }
}

impl std::fmt::Display for PromptSections {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Composes the full prompt for a shot configuration.
///
/// Pure and deterministic: identical configurations always produce
/// byte-identical prompts. Reference images are not part of the text.
#[tracing::instrument(level = "trace", skip(config), fields(camera = %config.camera(), focal = %config.focal_length()))]
pub fn compose_prompt(config: &ShotConfiguration) -> String {
    PromptSections::from(config).to_string()
}
