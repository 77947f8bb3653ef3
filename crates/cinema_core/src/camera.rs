//! Camera bodies.

use crate::{Catalog, SpecSheet};
use serde::{Deserialize, Serialize};

/// Camera body the shot is framed on.
///
/// Determines color science and dynamic range in the composed prompt.
///
/// # Examples
///
/// ```
/// use cinema_core::{Catalog, CameraBody};
///
/// let alexa: CameraBody = "ARRI_ALEXA_35".parse().unwrap();
/// assert_eq!(alexa, CameraBody::ArriAlexa35);
/// assert_eq!(alexa.to_string(), "ARRI ALEXA 35");
/// assert_eq!("arri alexa 35".parse::<CameraBody>().unwrap(), alexa);
/// assert_eq!(alexa.spec().icon, "🎥");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum CameraBody {
    /// Large-format film
    #[strum(to_string = "IMAX Film Camera", serialize = "IMAX")]
    Imax,
    /// 8K digital
    #[serde(rename = "RED_VRAPTOR")]
    #[strum(to_string = "RED V-RAPTOR (VV / S35)", serialize = "RED_VRAPTOR")]
    RedVraptor,
    /// Full-frame digital
    #[strum(to_string = "Sony CineAlta VENICE", serialize = "SONY_VENICE")]
    SonyVenice,
    /// Digital cinema reference
    #[serde(rename = "ARRI_ALEXA_35")]
    #[strum(to_string = "ARRI ALEXA 35", serialize = "ARRI_ALEXA_35")]
    ArriAlexa35,
    /// 16mm film
    #[serde(rename = "ARRI_16SR")]
    #[strum(to_string = "ARRI Arriflex 16SR (16mm Film)", serialize = "ARRI_16SR")]
    Arri16sr,
    /// Large-format digital
    #[serde(rename = "PANAVISION_DXL2")]
    #[strum(to_string = "Panavision Millennium DXL2", serialize = "PANAVISION_DXL2")]
    PanavisionDxl2,
}

/// Tooltip metadata for a camera body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraSpec {
    /// What kind of camera this is
    pub description: &'static str,
    /// The look it is known for
    pub detail: &'static str,
    /// Typical productions
    pub usage: &'static str,
    /// Glyph shown next to the name
    pub icon: &'static str,
}

impl SpecSheet for CameraSpec {
    fn description(&self) -> &'static str {
        self.description
    }

    fn detail(&self) -> &'static str {
        self.detail
    }

    fn usage(&self) -> &'static str {
        self.usage
    }
}

impl Catalog for CameraBody {
    type Spec = CameraSpec;

    fn id(&self) -> &'static str {
        match self {
            CameraBody::Imax => "IMAX",
            CameraBody::RedVraptor => "RED_VRAPTOR",
            CameraBody::SonyVenice => "SONY_VENICE",
            CameraBody::ArriAlexa35 => "ARRI_ALEXA_35",
            CameraBody::Arri16sr => "ARRI_16SR",
            CameraBody::PanavisionDxl2 => "PANAVISION_DXL2",
        }
    }

    fn spec(&self) -> &'static CameraSpec {
        match self {
            CameraBody::Imax => &CameraSpec {
                description: "Large-format film camera (65/70mm or IMAX-certified)",
                detail: "Extremely sharp imagery with dense detail and a true big-screen feel",
                usage: "Epic set pieces and blockbusters",
                icon: "🎞️",
            },
            CameraBody::RedVraptor => &CameraSpec {
                description: "Modern 8K digital cinema camera",
                detail: "Razor-sharp image with punchy contrast",
                usage: "Action, sci-fi and high-end commercials",
                icon: "🔴",
            },
            CameraBody::SonyVenice => &CameraSpec {
                description: "High-end full-frame cinema camera",
                detail: "Natural color across a wide range of recording formats",
                usage: "Feature films, TV commercials and drama",
                icon: "🎬",
            },
            CameraBody::ArriAlexa35 => &CameraSpec {
                description: "Hollywood-standard cinema color science",
                detail: "Very high dynamic range with smooth highlight roll-off",
                usage: "Narrative features, emotional scenes and complex lighting",
                icon: "🎥",
            },
            CameraBody::Arri16sr => &CameraSpec {
                description: "Classic 16mm film camera",
                detail: "Visible film grain with a vintage, true-to-life texture",
                usage: "Indie, documentary and flashback sequences",
                icon: "📼",
            },
            CameraBody::PanavisionDxl2 => &CameraSpec {
                description: "Premium large-format cinema camera",
                detail: "Luxurious image with a strong sense of depth",
                usage: "Big-budget feature films",
                icon: "📹",
            },
        }
    }
}
