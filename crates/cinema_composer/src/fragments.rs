//! Fixed prompt literals and the focal-length fragments.

use cinema_core::{FocalGroup, FocalLength};

/// Opening tag marking the prompt as a cinema-frame instruction.
pub const HEADER_LINE: &str = "MASTER_CINEMA_FRAME.";

/// Lighting and color-science boilerplate.
pub const ATMOSPHERE_LINE: &str =
    "Atmosphere: Professional cinematic lighting, volumetric shadows, film-grade color science.";

/// Fidelity and film-grain boilerplate that closes every prompt.
pub const CLOSING_LINE: &str =
    "Highest fidelity, 8k raw, authentic film grain, master cinematography.";

/// Rendering fragment when the anamorphic toggle is on.
pub const ANAMORPHIC_FRAGMENT: &str = "subtle anamorphic 2x characteristics, slight oval bokeh in out-of-focus areas, gentle horizontal anamorphic lens flares, classic cinemascope optical rendering.";

/// Rendering fragment for ordinary spherical glass.
pub const SPHERICAL_FRAGMENT: &str =
    "spherical lens rendering, round circular bokeh, clean professional glass optics.";

/// Optical physics description for a focal length.
///
/// Close-up focal lengths embed their millimeter value.
pub fn physics_fragment(focal: FocalLength) -> String {
    match focal.group() {
        FocalGroup::Panorama => "extremely wide panoramic vista, expansive field of view, epic scale, straight horizons, immersive panorama, rectilinear wide.".to_string(),
        FocalGroup::UltraWide => "ultra-wide rectilinear angle, vast spatial depth, professional wide-angle cinema optics, clean edges.".to_string(),
        FocalGroup::Wide => "wide-angle cinema perspective, great field of depth, establishing shot, cinematic clarity.".to_string(),
        FocalGroup::Medium => "medium shot perspective, natural human field of view, standard cinema framing, balanced depth.".to_string(),
        FocalGroup::HalfBodyPortrait => "half-body portrait framing, beautiful subject-to-background separation, shallow depth of field, creamy bokeh.".to_string(),
        FocalGroup::CloseUpPortrait => format!(
            "close-up portrait optics ({}mm), extreme lens compression, tight facial detail, massive background blur, shallow focus on the eyes.",
            focal.millimeters()
        ),
    }
}

/// Short on-screen classification of a focal length.
///
/// Uses the same grouping as [`physics_fragment`].
pub fn focal_length_label(focal: FocalLength) -> &'static str {
    match focal.group() {
        FocalGroup::Panorama => "PANORAMA WIDE",
        FocalGroup::UltraWide => "ULTRA-WIDE",
        FocalGroup::Wide => "WIDE",
        FocalGroup::Medium => "MEDIUM SHOT",
        FocalGroup::HalfBodyPortrait => "PORTRAIT HALF-BODY",
        FocalGroup::CloseUpPortrait => "CLOSE-UP PORTRAIT",
    }
}

/// Bokeh and flare fragment for the anamorphic toggle.
pub fn anamorphic_fragment(anamorphic: bool) -> &'static str {
    if anamorphic {
        ANAMORPHIC_FRAGMENT
    } else {
        SPHERICAL_FRAGMENT
    }
}
