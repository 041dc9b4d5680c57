//! Pure size arithmetic shared by the logo and mark pipelines.
//!
//! Rounding is half-to-even (2.5 -> 2).
use crate::types::{CropRect, Dimensions};

/// Dimensions for a proportional resize to `target_width`.
///
/// Height is `round(height * target_width / width)`, floored at 1.
pub fn calculate_width_resize_dimensions(original: Dimensions, target_width: u32) -> Dimensions {
    if original.width == target_width {
        return original;
    }
    let scale = f64::from(target_width) / f64::from(original.width);
    let height = (f64::from(original.height) * scale).round_ties_even().max(1.0) as u32;
    Dimensions::new(target_width, height)
}

/// Side of the square mark crop: `round(min(w, h) * ratio)`, floored at 1.
pub fn calculate_crop_side(original: Dimensions, ratio: f64) -> u32 {
    let side = (f64::from(original.min_side()) * ratio).round_ties_even();
    (side as u32).max(1)
}

/// Square crop of `side` centered in `original`.
///
/// The side is clamped to the shorter edge; offsets use floor division so an odd
/// remainder leaves the extra pixel on the right/bottom.
pub fn centered_square(original: Dimensions, side: u32) -> CropRect {
    let side = side.min(original.min_side());
    CropRect {
        left: (original.width - side) / 2,
        top: (original.height - side) / 2,
        side,
    }
}
