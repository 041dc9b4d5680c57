use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbaImage;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::error::Result;

/// Write `img` as an RGBA PNG using the slowest, smallest encoder settings.
pub fn write_rgba_png(output: &Path, img: &RgbaImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    img.write_with_encoder(encoder)?;
    writer.flush()?;
    Ok(())
}
