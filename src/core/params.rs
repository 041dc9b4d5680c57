use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_LOGO_SOURCE: &str = "/home/joao/Downloads/solidus_logo.png";
pub const DEFAULT_MARK_SOURCE: &str = "/home/joao/Downloads/solidus_small_logo.png";
pub const DEFAULT_OUTPUT_DIR: &str = "public/assets";
pub const DEFAULT_LOGO_WIDTH: u32 = 720;
pub const DEFAULT_MARK_SIZE: u32 = 64;
pub const DEFAULT_MARK_CROP_RATIO: f64 = 0.72;

/// Reject crop ratios outside (0, 1], including NaN and infinities.
pub fn validate_crop_ratio(ratio: f64) -> Result<()> {
    if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
        return Err(Error::InvalidArgument {
            arg: "mark_crop_ratio",
            value: ratio.to_string(),
        });
    }
    Ok(())
}

/// Generation parameters suitable for config files and the CLI.
///
/// Missing fields in a JSON config fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetParams {
    pub logo_source: PathBuf,
    pub mark_source: PathBuf,
    pub output_dir: PathBuf,
    /// Target logo width in pixels; height follows the aspect ratio
    pub logo_width: u32,
    /// Side of the square mark in pixels
    pub mark_size: u32,
    /// Fraction of the shorter source side kept by the mark crop, in (0, 1]
    pub mark_crop_ratio: f64,
}

impl Default for AssetParams {
    fn default() -> Self {
        Self {
            logo_source: PathBuf::from(DEFAULT_LOGO_SOURCE),
            mark_source: PathBuf::from(DEFAULT_MARK_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            logo_width: DEFAULT_LOGO_WIDTH,
            mark_size: DEFAULT_MARK_SIZE,
            mark_crop_ratio: DEFAULT_MARK_CROP_RATIO,
        }
    }
}

impl AssetParams {
    /// Read parameters from a JSON file. Absent keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.logo_width == 0 {
            return Err(Error::ZeroSize { arg: "logo_width" });
        }
        if self.mark_size == 0 {
            return Err(Error::ZeroSize { arg: "mark_size" });
        }
        validate_crop_ratio(self.mark_crop_ratio)
    }

    pub fn logo_output(&self) -> PathBuf {
        self.output_dir.join(crate::types::AssetKind::Logo.file_name())
    }

    pub fn mark_output(&self) -> PathBuf {
        self.output_dir.join(crate::types::AssetKind::Mark.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_values() {
        let p = AssetParams::default();
        assert_eq!(p.output_dir, PathBuf::from("public/assets"));
        assert_eq!(p.logo_width, 720);
        assert_eq!(p.mark_size, 64);
        assert_eq!(p.mark_crop_ratio, 0.72);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_zero_sizes() {
        let p = AssetParams { logo_width: 0, ..Default::default() };
        assert!(matches!(p.validate(), Err(Error::ZeroSize { arg: "logo_width" })));

        let p = AssetParams { mark_size: 0, ..Default::default() };
        assert!(matches!(p.validate(), Err(Error::ZeroSize { arg: "mark_size" })));
    }

    #[test]
    fn rejects_out_of_range_ratio() {
        for ratio in [0.0, -0.5, 1.01, f64::NAN, f64::INFINITY] {
            let p = AssetParams { mark_crop_ratio: ratio, ..Default::default() };
            assert!(
                matches!(p.validate(), Err(Error::InvalidArgument { arg: "mark_crop_ratio", .. })),
                "ratio {ratio} should be rejected"
            );
        }
        let p = AssetParams { mark_crop_ratio: 1.0, ..Default::default() };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand.json");
        fs::write(&path, r#"{ "logo_width": 512, "output_dir": "dist/brand" }"#).unwrap();

        let p = AssetParams::from_json_file(&path).unwrap();
        assert_eq!(p.logo_width, 512);
        assert_eq!(p.output_dir, PathBuf::from("dist/brand"));
        assert_eq!(p.mark_size, DEFAULT_MARK_SIZE);
        assert_eq!(p.logo_source, PathBuf::from(DEFAULT_LOGO_SOURCE));
    }

    #[test]
    fn output_paths_use_fixed_names() {
        let p = AssetParams { output_dir: PathBuf::from("out"), ..Default::default() };
        assert_eq!(p.logo_output(), PathBuf::from("out/solidus-logo.png"));
        assert_eq!(p.mark_output(), PathBuf::from("out/solidus-mark.png"));
    }
}
