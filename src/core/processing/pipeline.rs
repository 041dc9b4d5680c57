use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::core::params::validate_crop_ratio;
use crate::core::processing::crop::center_square_crop;
use crate::core::processing::geometry::calculate_crop_side;
use crate::core::processing::resize::{resize_rgba_image, resize_to_width};
use crate::error::{Error, Result};
use crate::io::reader::load_rgba;
use crate::io::writers::png::write_rgba_png;
use crate::types::{AssetKind, Dimensions, GeneratedAsset};

fn dims(img: &RgbaImage) -> Dimensions {
    Dimensions::new(img.width(), img.height())
}

fn ensure_not_empty(img: &RgbaImage) -> Result<()> {
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::ZeroSize { arg: "source" });
    }
    Ok(())
}

/// Logo transform: proportional resize to `width`.
pub fn process_logo(img: RgbaImage, width: u32) -> Result<(RgbaImage, GeneratedAsset)> {
    ensure_not_empty(&img)?;
    let source = dims(&img);
    let logo = resize_to_width(img, width)?;
    let asset = GeneratedAsset {
        kind: AssetKind::Logo,
        path: None,
        source,
        output: dims(&logo),
        crop: None,
    };
    Ok((logo, asset))
}

/// Mark transform: centered square crop of `crop_ratio * min(w, h)`, then an
/// exact resize to `size` x `size`.
pub fn process_mark(img: RgbaImage, size: u32, crop_ratio: f64) -> Result<(RgbaImage, GeneratedAsset)> {
    if size == 0 {
        return Err(Error::ZeroSize { arg: "mark_size" });
    }
    validate_crop_ratio(crop_ratio)?;
    ensure_not_empty(&img)?;
    let source = dims(&img);
    let side = calculate_crop_side(source, crop_ratio);
    let (cropped, rect) = center_square_crop(&img, side);
    drop(img);

    let mark = resize_rgba_image(&cropped, size, size)?;
    let asset = GeneratedAsset {
        kind: AssetKind::Mark,
        path: None,
        source,
        output: dims(&mark),
        crop: Some(rect),
    };
    Ok((mark, asset))
}

/// Load, transform and save the logo; the image is released before returning.
pub fn generate_logo(source: &Path, output: &Path, width: u32) -> Result<GeneratedAsset> {
    let img = load_rgba(AssetKind::Logo, source)?;
    let (logo, mut asset) = process_logo(img, width)?;
    write_rgba_png(output, &logo)?;
    info!("Logo saved: {:?} ({})", output, asset.output);
    asset.path = Some(output.to_path_buf());
    Ok(asset)
}

/// Load, crop, downscale and save the mark.
pub fn generate_mark(source: &Path, output: &Path, size: u32, crop_ratio: f64) -> Result<GeneratedAsset> {
    let img = load_rgba(AssetKind::Mark, source)?;
    let (mark, mut asset) = process_mark(img, size, crop_ratio)?;
    write_rgba_png(output, &mark)?;
    info!("Mark saved: {:?} ({})", output, asset.output);
    asset.path = Some(output.to_path_buf());
    Ok(asset)
}
