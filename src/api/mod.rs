//! High-level, ergonomic library API: generate both brand assets on disk, or run
//! a single transform on an in-memory image. Prefer these entrypoints over the
//! low-level processing modules when integrating brandprep.
use std::fs;
use std::path::PathBuf;

use image::{DynamicImage, RgbaImage};
use serde::Serialize;
use tracing::info;

use crate::core::params::AssetParams;
use crate::core::processing::pipeline::{generate_logo, generate_mark, process_logo, process_mark};
use crate::error::Result;
use crate::io::reader::ensure_source_exists;
use crate::io::writers::manifest::{Manifest, write_manifest};
use crate::types::{AssetKind, GeneratedAsset};

/// Outcome of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub logo: GeneratedAsset,
    pub mark: GeneratedAsset,
    pub manifest: Option<PathBuf>,
}

/// Produce the logo and mark for `params`, optionally followed by the manifest.
///
/// The output directory is created first. Both sources must exist before any
/// image is decoded. A failure in the mark branch leaves an already written
/// logo in place.
pub fn generate_assets(params: &AssetParams, manifest: bool) -> Result<GenerationReport> {
    params.validate()?;

    fs::create_dir_all(&params.output_dir)?;
    info!("Output directory: {:?}", params.output_dir);

    ensure_source_exists(AssetKind::Logo, &params.logo_source)?;
    ensure_source_exists(AssetKind::Mark, &params.mark_source)?;

    let logo = generate_logo(&params.logo_source, &params.logo_output(), params.logo_width)?;
    let mark = generate_mark(
        &params.mark_source,
        &params.mark_output(),
        params.mark_size,
        params.mark_crop_ratio,
    )?;

    let manifest = if manifest {
        let m = Manifest::new(params, vec![logo.clone(), mark.clone()]);
        Some(write_manifest(&params.output_dir, &m)?)
    } else {
        None
    };

    Ok(GenerationReport { logo, mark, manifest })
}

/// Proportionally resize any decoded image to `width`, without disk I/O.
pub fn process_logo_to_buffer(img: DynamicImage, width: u32) -> Result<(RgbaImage, GeneratedAsset)> {
    process_logo(img.into_rgba8(), width)
}

/// Crop and downscale any decoded image into a `size` x `size` mark, without disk I/O.
pub fn process_mark_to_buffer(
    img: DynamicImage,
    size: u32,
    crop_ratio: f64,
) -> Result<(RgbaImage, GeneratedAsset)> {
    process_mark(img.into_rgba8(), size, crop_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;

    #[test]
    fn buffer_logo_converts_rgb_input() {
        let img = DynamicImage::new_rgb8(200, 50);
        let (logo, asset) = process_logo_to_buffer(img, 100).unwrap();
        assert_eq!(logo.dimensions(), (100, 25));
        assert_eq!(asset.path, None);
        assert!(logo.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn buffer_mark_is_exact_square() {
        let img = DynamicImage::new_luma_a8(300, 200);
        let (mark, asset) = process_mark_to_buffer(img, 32, 0.72).unwrap();
        assert_eq!(mark.dimensions(), (32, 32));
        assert_eq!(asset.source, Dimensions::new(300, 200));
    }

    #[test]
    fn buffer_transforms_reject_invalid_input() {
        let bad_ratio = process_mark_to_buffer(DynamicImage::new_rgba8(300, 200), 64, 7.0);
        assert!(matches!(bad_ratio, Err(crate::Error::InvalidArgument { .. })));

        let nan_ratio = process_mark_to_buffer(DynamicImage::new_rgba8(300, 200), 64, f64::NAN);
        assert!(matches!(nan_ratio, Err(crate::Error::InvalidArgument { .. })));

        let empty_logo = process_logo_to_buffer(DynamicImage::new_rgba8(0, 0), 720);
        assert!(matches!(empty_logo, Err(crate::Error::ZeroSize { arg: "source" })));

        let empty_mark = process_mark_to_buffer(DynamicImage::new_rgba8(0, 5), 64, 0.72);
        assert!(matches!(empty_mark, Err(crate::Error::ZeroSize { arg: "source" })));
    }
}
