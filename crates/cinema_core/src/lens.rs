//! Cinema lenses.

use crate::{Catalog, SpecSheet};
use serde::{Deserialize, Serialize};

/// Lens family mounted on the camera.
///
/// Each lens carries a prompt fragment describing its rendering, which the
/// composer inserts verbatim into the optical physics line.
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
pub enum LensType {
    /// Clinical spherical prime
    #[strum(to_string = "Zeiss Ultra Prime", serialize = "ZEISS_ULTRA")]
    ZeissUltra,
    /// Warm spherical prime
    #[serde(rename = "COOKE_S4")]
    #[strum(to_string = "Cooke S4 / S4i", serialize = "COOKE_S4")]
    CookeS4,
    /// Modern ARRI prime
    #[strum(to_string = "ARRI Signature Prime", serialize = "ARRI_SIGNATURE")]
    ArriSignature,
    /// Vintage glow
    #[serde(rename = "CANON_K35")]
    #[strum(to_string = "Canon K-35", serialize = "CANON_K35")]
    CanonK35,
    /// Classic 2x anamorphic
    #[strum(to_string = "Panavision C-Series", serialize = "PANAVISION_C")]
    PanavisionC,
    /// Modern anamorphic
    #[strum(to_string = "Hawk V-Lite", serialize = "HAWK_VLITE")]
    HawkVlite,
    /// Neutral cine prime
    #[strum(to_string = "JDC Xtal Xpress", serialize = "JDC_XTAL")]
    JdcXtal,
    /// Creative tilt/swirl
    #[strum(to_string = "Lensbaby", serialize = "LENSBABY")]
    Lensbaby,
    /// Antique swirly bokeh
    #[strum(to_string = "Petzval", serialize = "PETZVAL")]
    Petzval,
    /// Close-focus macro
    #[strum(to_string = "Laowa Macro", serialize = "LAOWA_MACRO")]
    LaowaMacro,
}

/// Tooltip metadata and prompt fragment for a lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LensSpec {
    /// Lens family in a few words
    pub description: &'static str,
    /// Character of the rendering
    pub detail: &'static str,
    /// Where it shines
    pub usage: &'static str,
    /// Text inserted verbatim into the optical physics line
    pub prompt: &'static str,
}

impl SpecSheet for LensSpec {
    fn description(&self) -> &'static str {
        self.description
    }

    fn detail(&self) -> &'static str {
        self.detail
    }

    fn usage(&self) -> &'static str {
        self.usage
    }

    fn prompt(&self) -> Option<&'static str> {
        Some(self.prompt)
    }
}

impl Catalog for LensType {
    type Spec = LensSpec;

    fn id(&self) -> &'static str {
        match self {
            LensType::ZeissUltra => "ZEISS_ULTRA",
            LensType::CookeS4 => "COOKE_S4",
            LensType::ArriSignature => "ARRI_SIGNATURE",
            LensType::CanonK35 => "CANON_K35",
            LensType::PanavisionC => "PANAVISION_C",
            LensType::HawkVlite => "HAWK_VLITE",
            LensType::JdcXtal => "JDC_XTAL",
            LensType::Lensbaby => "LENSBABY",
            LensType::Petzval => "PETZVAL",
            LensType::LaowaMacro => "LAOWA_MACRO",
        }
    }

    fn spec(&self) -> &'static LensSpec {
        match self {
            LensType::ZeissUltra => &LensSpec {
                description: "Very sharp spherical lens",
                detail: "Clean, faithful rendering",
                usage: "Modern looks that need tight control",
                prompt: "Zeiss Ultra Prime sharpness, neutral colors, clinical precision, high contrast.",
            },
            LensType::CookeS4 => &LensSpec {
                description: "Spherical lens famous for the \"Cooke Look\"",
                detail: "Warm, soft, flattering skin tones",
                usage: "Romance and character-driven stories",
                prompt: "Cooke S4i 'Cooke Look', warm organic skin tones, gentle highlights, silky textures.",
            },
            LensType::ArriSignature => &LensSpec {
                description: "ARRI's premium large-format prime",
                detail: "Very sharp yet cinematically soft",
                usage: "Modern digital cinema",
                prompt: "ARRI Signature Prime look, natural creamy textures, modern cinematic clarity.",
            },
            LensType::CanonK35 => &LensSpec {
                description: "Legendary vintage lens",
                detail: "Soft light with a gentle glow and filmic color",
                usage: "Nostalgic moods",
                prompt: "Canon K-35 vintage glow, nostalgic low contrast, golden era film aesthetic, halation.",
            },
            LensType::PanavisionC => &LensSpec {
                description: "2x anamorphic lens",
                detail: "Oval bokeh and signature horizontal flares",
                usage: "Classic Hollywood widescreen",
                prompt: "Panavision C-Series anamorphic, heavy oval bokeh, horizontal blue lens flares.",
            },
            LensType::HawkVlite => &LensSpec {
                description: "Modern anamorphic lens",
                detail: "Light, tidy flares with less distortion than Panavision",
                usage: "Anamorphic looks for digital cinema",
                prompt: "Hawk V-Lite anamorphic rendering, modern anamorphic squeeze, sharp centers.",
            },
            LensType::JdcXtal => &LensSpec {
                description: "Standard cine lens",
                detail: "Neutral image that is easy to control",
                usage: "Indie films and television",
                prompt: "JDC Xtal Xpress neutrality, clean professional cinema optics, balanced color.",
            },
            LensType::Lensbaby => &LensSpec {
                description: "Creative effects lens",
                detail: "Swirling, off-center, dreamy bokeh",
                usage: "Emotional and artistic scenes",
                prompt: "Lensbaby artistic tilt-shift, swirly dream-like bokeh, selective radial focus.",
            },
            LensType::Petzval => &LensSpec {
                description: "Classic portrait lens",
                detail: "Strong swirling bokeh with soft edges",
                usage: "Vintage, dream-like styles",
                prompt: "Petzval swirly circular bokeh, vintage soft edges, central sharpness, antique feel.",
            },
            LensType::LaowaMacro => &LensSpec {
                description: "Macro lens",
                detail: "Captures the tiniest details up close",
                usage: "Textures, objects and product details",
                prompt: "Laowa Macro extreme detail, microscopic texture focus, sharp foreground detail.",
            },
        }
    }
}
