//! Camera angles.

use crate::{Catalog, SpecSheet};
use serde::{Deserialize, Serialize};

/// Camera placement relative to the subject.
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
pub enum CameraAngle {
    /// Bird's-eye
    #[strum(to_string = "Top-Down (Aerial / Flycam)", serialize = "TOP_DOWN")]
    TopDown,
    /// Looking down on the subject
    #[strum(to_string = "High Angle", serialize = "HIGH_ANGLE")]
    HighAngle,
    /// Neutral, front on
    #[strum(to_string = "Eye-Level (Front View)", serialize = "EYE_LEVEL")]
    EyeLevel,
    /// Hero shot from the ground
    #[strum(to_string = "Ultra Low Angle (Hero Shot)", serialize = "LOW_ANGLE")]
    LowAngle,
    /// Lateral view
    #[strum(to_string = "Side Profile", serialize = "SIDE_PROFILE")]
    SideProfile,
    /// 45 degrees
    #[strum(to_string = "Three-Quarter Angle", serialize = "THREE_QUARTER")]
    ThreeQuarter,
    /// Following the subject
    #[strum(to_string = "From Behind", serialize = "FROM_BEHIND")]
    FromBehind,
    /// Dialogue coverage
    #[strum(to_string = "Over-the-Shoulder", serialize = "OVER_SHOULDER")]
    OverShoulder,
}

/// Tooltip metadata and prompt fragment for a camera angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AngleSpec {
    /// Where the camera sits
    pub description: &'static str,
    /// Emotional effect
    pub detail: &'static str,
    /// Typical scenes
    pub usage: &'static str,
    /// Text inserted verbatim into the camera angle line
    pub prompt: &'static str,
}

impl SpecSheet for AngleSpec {
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

impl Catalog for CameraAngle {
    type Spec = AngleSpec;

    fn id(&self) -> &'static str {
        match self {
            CameraAngle::TopDown => "TOP_DOWN",
            CameraAngle::HighAngle => "HIGH_ANGLE",
            CameraAngle::EyeLevel => "EYE_LEVEL",
            CameraAngle::LowAngle => "LOW_ANGLE",
            CameraAngle::SideProfile => "SIDE_PROFILE",
            CameraAngle::ThreeQuarter => "THREE_QUARTER",
            CameraAngle::FromBehind => "FROM_BEHIND",
            CameraAngle::OverShoulder => "OVER_SHOULDER",
        }
    }

    fn spec(&self) -> &'static AngleSpec {
        match self {
            CameraAngle::TopDown => &AngleSpec {
                description: "Shot from high above looking straight down (bird's-eye / flycam)",
                detail: "Takes in the whole setting and conveys vast scale",
                usage: "Architecture, landscapes or mapping out a location",
                prompt: "top-down aerial view, bird's-eye perspective, flycam shot, high altitude photography.",
            },
            CameraAngle::HighAngle => &AngleSpec {
                description: "Camera above the character looking down",
                detail: "The character looks small or vulnerable against the setting",
                usage: "Stressing isolation or powerlessness",
                prompt: "high-angle shot, looking down at the character, camera tilted downwards.",
            },
            CameraAngle::EyeLevel => &AngleSpec {
                description: "Camera at eye height, facing the subject",
                detail: "Honest and neutral, as if the viewer were standing there",
                usage: "Dialogue and straightforward character introductions",
                prompt: "eye-level shot, front view perspective, neutral camera height, human-eye view.",
            },
            CameraAngle::LowAngle => &AngleSpec {
                description: "Low camera looking up (hero angle)",
                detail: "The character looks powerful, imposing and striking",
                usage: "Action, superheroes or key characters",
                prompt: "ultra low-angle shot, hero shot, looking up at the subject, camera on ground, dramatic power dynamic.",
            },
            CameraAngle::SideProfile => &AngleSpec {
                description: "Camera beside the subject",
                detail: "Emphasizes facial contours or the direction of movement",
                usage: "Contemplative moments or characters on the move",
                prompt: "side profile view, side-on perspective, profile shot, lateral view.",
            },
            CameraAngle::ThreeQuarter => &AngleSpec {
                description: "Three-quarter view (45 degrees)",
                detail: "The most flattering portrait angle, with the best modelling and depth",
                usage: "Classic cinematic portraits",
                prompt: "three-quarter angle, 45-degree view, volumetric lighting on facial features, depth perception.",
            },
            CameraAngle::FromBehind => &AngleSpec {
                description: "Camera behind the subject",
                detail: "Builds curiosity or shares the character's point of view",
                usage: "A character stepping into a new world",
                prompt: "view from behind, back view, over-the-shoulder-less back shot, following the subject.",
            },
            CameraAngle::OverShoulder => &AngleSpec {
                description: "Camera over a shoulder",
                detail: "The classic dialogue angle, tying the space together",
                usage: "Conversations or close interaction between two people",
                prompt: "over-the-shoulder shot, shallow focus on the subject, person's shoulder in foreground.",
            },
        }
    }
}
