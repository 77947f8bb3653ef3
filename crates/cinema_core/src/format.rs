//! Output frame formats.

use serde::{Deserialize, Serialize};

/// Frame aspect ratio requested from the image model.
///
/// # Examples
///
/// ```
/// use cinema_core::AspectRatio;
///
/// let ratio: AspectRatio = "9:16".parse().unwrap();
/// assert_eq!(ratio, AspectRatio::Vertical);
/// assert_eq!(ratio.to_string(), "9:16");
/// assert!(ratio.is_portrait());
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
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum AspectRatio {
    /// 16:9
    #[default]
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Widescreen,
    /// 4:3
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    Standard,
    /// 1:1
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
    /// 9:16
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Vertical,
    /// 3:4
    #[serde(rename = "3:4")]
    #[strum(serialize = "3:4")]
    Portrait,
}

impl AspectRatio {
    /// Width and height terms of the ratio.
    pub fn terms(self) -> (u8, u8) {
        match self {
            AspectRatio::Widescreen => (16, 9),
            AspectRatio::Standard => (4, 3),
            AspectRatio::Square => (1, 1),
            AspectRatio::Vertical => (9, 16),
            AspectRatio::Portrait => (3, 4),
        }
    }

    /// Whether the frame is taller than it is wide.
    pub fn is_portrait(self) -> bool {
        let (w, h) = self.terms();
        h > w
    }
}

/// Output resolution tier requested from the image model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(ascii_case_insensitive)]
pub enum ImageSize {
    /// About 1024px on the long edge
    #[default]
    #[serde(rename = "1K")]
    #[strum(serialize = "1K")]
    OneK,
    /// About 2048px on the long edge
    #[serde(rename = "2K")]
    #[strum(serialize = "2K")]
    TwoK,
    /// About 4096px on the long edge
    #[serde(rename = "4K")]
    #[strum(serialize = "4K")]
    FourK,
}
