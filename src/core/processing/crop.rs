use image::{RgbaImage, imageops};
use tracing::debug;

use crate::core::processing::geometry::centered_square;
use crate::types::{CropRect, Dimensions};

/// Cut a centered square of (at most) `side` pixels out of `img`.
///
/// Returns the cropped copy together with the region actually taken.
pub fn center_square_crop(img: &RgbaImage, side: u32) -> (RgbaImage, CropRect) {
    let rect = centered_square(Dimensions::new(img.width(), img.height()), side);
    debug!(
        "Cropping {}x{} at left={}, top={}",
        rect.side, rect.side, rect.left, rect.top
    );
    let cropped = imageops::crop_imm(img, rect.left, rect.top, rect.side, rect.side).to_image();
    (cropped, rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn crop_takes_the_centered_region() {
        // Each pixel encodes its own coordinates.
        let img = RgbaImage::from_fn(300, 200, |x, y| Rgba([(x % 256) as u8, y as u8, 0, 255]));
        let (out, rect) = center_square_crop(&img, 144);

        assert_eq!(rect, CropRect { left: 78, top: 28, side: 144 });
        assert_eq!(out.dimensions(), (144, 144));
        assert_eq!(out.get_pixel(0, 0).0, [78, 28, 0, 255]);
        assert_eq!(out.get_pixel(143, 143).0, [221, 171, 0, 255]);
    }

    #[test]
    fn crop_side_is_clamped_to_image() {
        let img = RgbaImage::new(10, 6);
        let (out, rect) = center_square_crop(&img, 50);
        assert_eq!(out.dimensions(), (6, 6));
        assert_eq!((rect.left, rect.top), (2, 0));
    }
}
