//! Focal lengths and their framing groups.

use crate::{Catalog, SpecSheet};
use cinema_error::{TaxonomyError, TaxonomyErrorKind};
use serde::{Deserialize, Serialize};

/// Focal length in millimeters, restricted to the studio's prime set.
///
/// # Examples
///
/// ```
/// use cinema_core::{FocalGroup, FocalLength};
///
/// let portrait = FocalLength::try_from(85u16).unwrap();
/// assert_eq!(portrait, FocalLength::Mm85);
/// assert_eq!(portrait.millimeters(), 85);
/// assert_eq!(portrait.group(), FocalGroup::HalfBodyPortrait);
/// assert!(FocalLength::try_from(40u16).is_err());
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
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(try_from = "u16", into = "u16")]
pub enum FocalLength {
    /// 8mm
    Mm8,
    /// 12mm
    Mm12,
    /// 18mm
    Mm18,
    /// 25mm
    Mm25,
    /// 35mm
    Mm35,
    /// 50mm
    Mm50,
    /// 75mm
    Mm75,
    /// 85mm
    Mm85,
    /// 100mm
    Mm100,
    /// 135mm
    Mm135,
}

impl FocalLength {
    /// Focal length in millimeters.
    pub fn millimeters(self) -> u16 {
        match self {
            FocalLength::Mm8 => 8,
            FocalLength::Mm12 => 12,
            FocalLength::Mm18 => 18,
            FocalLength::Mm25 => 25,
            FocalLength::Mm35 => 35,
            FocalLength::Mm50 => 50,
            FocalLength::Mm75 => 75,
            FocalLength::Mm85 => 85,
            FocalLength::Mm100 => 100,
            FocalLength::Mm135 => 135,
        }
    }

    /// Framing group this focal length falls into.
    pub fn group(self) -> FocalGroup {
        match self {
            FocalLength::Mm8 => FocalGroup::Panorama,
            FocalLength::Mm12 => FocalGroup::UltraWide,
            FocalLength::Mm18 => FocalGroup::Wide,
            FocalLength::Mm25 | FocalLength::Mm35 => FocalGroup::Medium,
            FocalLength::Mm50 | FocalLength::Mm75 | FocalLength::Mm85 => {
                FocalGroup::HalfBodyPortrait
            }
            FocalLength::Mm100 | FocalLength::Mm135 => FocalGroup::CloseUpPortrait,
        }
    }
}

impl std::fmt::Display for FocalLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}mm", self.millimeters())
    }
}

impl TryFrom<u16> for FocalLength {
    type Error = TaxonomyError;

    #[track_caller]
    fn try_from(mm: u16) -> Result<Self, Self::Error> {
        match mm {
            8 => Ok(FocalLength::Mm8),
            12 => Ok(FocalLength::Mm12),
            18 => Ok(FocalLength::Mm18),
            25 => Ok(FocalLength::Mm25),
            35 => Ok(FocalLength::Mm35),
            50 => Ok(FocalLength::Mm50),
            75 => Ok(FocalLength::Mm75),
            85 => Ok(FocalLength::Mm85),
            100 => Ok(FocalLength::Mm100),
            135 => Ok(FocalLength::Mm135),
            other => Err(TaxonomyError::new(
                TaxonomyErrorKind::UnsupportedFocalLength(other),
            )),
        }
    }
}

impl From<FocalLength> for u16 {
    fn from(focal: FocalLength) -> Self {
        focal.millimeters()
    }
}

impl std::str::FromStr for FocalLength {
    type Err = TaxonomyError;

    /// Accepts `85` or `85mm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches("mm").trim();
        let mm: u16 = digits.parse().map_err(|_| {
            TaxonomyError::new(TaxonomyErrorKind::MalformedFocalLength(s.to_string()))
        })?;
        FocalLength::try_from(mm)
    }
}

/// How much of the subject a focal length frames.
///
/// Both the prompt's physics description and the on-screen label are derived
/// from this grouping, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
pub enum FocalGroup {
    /// 8mm
    Panorama,
    /// 12mm
    UltraWide,
    /// 18mm
    Wide,
    /// 25-35mm
    Medium,
    /// 50-85mm
    HalfBodyPortrait,
    /// 100mm and longer
    CloseUpPortrait,
}

/// Tooltip metadata for a focal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocalSpec {
    /// Framing group
    pub group: FocalGroup,
    /// Field of view in a few words
    pub description: &'static str,
    /// What the framing feels like
    pub detail: &'static str,
    /// Typical shots
    pub usage: &'static str,
}

impl SpecSheet for FocalSpec {
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

impl Catalog for FocalLength {
    type Spec = FocalSpec;

    fn id(&self) -> &'static str {
        match self {
            FocalLength::Mm8 => "8",
            FocalLength::Mm12 => "12",
            FocalLength::Mm18 => "18",
            FocalLength::Mm25 => "25",
            FocalLength::Mm35 => "35",
            FocalLength::Mm50 => "50",
            FocalLength::Mm75 => "75",
            FocalLength::Mm85 => "85",
            FocalLength::Mm100 => "100",
            FocalLength::Mm135 => "135",
        }
    }

    fn spec(&self) -> &'static FocalSpec {
        match self.group() {
            FocalGroup::Panorama => &FocalSpec {
                group: FocalGroup::Panorama,
                description: "Panoramic field of view",
                detail: "Straight horizons and epic scale",
                usage: "Vistas and sweeping landscapes",
            },
            FocalGroup::UltraWide => &FocalSpec {
                group: FocalGroup::UltraWide,
                description: "Ultra-wide rectilinear view",
                detail: "Vast spatial depth with clean edges",
                usage: "Interiors and dramatic architecture",
            },
            FocalGroup::Wide => &FocalSpec {
                group: FocalGroup::Wide,
                description: "Wide-angle cinema perspective",
                detail: "Deep field with cinematic clarity",
                usage: "Establishing shots",
            },
            FocalGroup::Medium => &FocalSpec {
                group: FocalGroup::Medium,
                description: "Natural human field of view",
                detail: "Balanced depth with standard cinema framing",
                usage: "Medium shots and walk-and-talks",
            },
            FocalGroup::HalfBodyPortrait => &FocalSpec {
                group: FocalGroup::HalfBodyPortrait,
                description: "Half-body portrait framing",
                detail: "Subject separated from a creamy, shallow background",
                usage: "Character portraits from the waist up",
            },
            FocalGroup::CloseUpPortrait => &FocalSpec {
                group: FocalGroup::CloseUpPortrait,
                description: "Close-up portrait optics",
                detail: "Extreme compression with massive background blur",
                usage: "Tight facial close-ups",
            },
        }
    }
}
