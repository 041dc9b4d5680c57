//! Shared types used across brandprep.
//! Includes `AssetKind` (which branch an image belongs to) and the small
//! geometry records `Dimensions` and `CropRect` reported back to callers.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Logo,
    Mark,
}

impl AssetKind {
    /// Fixed output filename inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Logo => "solidus-logo.png",
            AssetKind::Mark => "solidus-mark.png",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Logo => write!(f, "logo"),
            AssetKind::Mark => write!(f, "mark"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Square region cut out of a source image, top-left anchored.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub side: u32,
}

/// One asset written (or produced in memory) by a pipeline run.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: Option<std::path::PathBuf>,
    pub source: Dimensions,
    pub output: Dimensions,
    /// Region of the source kept before the final resize (mark only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropRect>,
}
