use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{debug, info};

use crate::core::processing::geometry::calculate_width_resize_dimensions;
use crate::error::{Error, Result};
use crate::types::Dimensions;

fn lanczos_options() -> ResizeOptions {
    ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
}

/// Resize an RGBA8 image to exactly `target_cols` x `target_rows` with Lanczos3.
///
/// Alpha is premultiplied during convolution so transparent pixels do not bleed
/// their color into opaque neighbours.
pub fn resize_rgba_image(src: &RgbaImage, target_cols: u32, target_rows: u32) -> Result<RgbaImage> {
    let (cols, rows) = src.dimensions();
    if (cols, rows) == (target_cols, target_rows) {
        return Ok(src.clone());
    }
    debug!("Lanczos3 resize {}x{} -> {}x{}", cols, rows, target_cols, target_rows);

    let mut resizer = Resizer::new();
    let src_image = Image::from_vec_u8(cols, rows, src.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &lanczos_options())?;

    RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not fit {}x{} RGBA",
            target_cols, target_rows
        ))
    })
}

/// Scale proportionally so the width becomes `target_width`.
///
/// Returns the input untouched (no resampling) when it is already that wide.
pub fn resize_to_width(src: RgbaImage, target_width: u32) -> Result<RgbaImage> {
    if target_width == 0 {
        return Err(Error::ZeroSize { arg: "logo_width" });
    }
    let original = Dimensions::new(src.width(), src.height());
    let target = calculate_width_resize_dimensions(original, target_width);
    if target == original {
        info!("Width already {}; keeping {}", target_width, original);
        return Ok(src);
    }
    info!("Original size: {}, New size: {}", original, target);
    resize_rgba_image(&src, target.width, target.height)
}
