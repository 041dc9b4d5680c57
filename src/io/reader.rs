//! Source image loading.
use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::AssetKind;

/// Fail with `MissingSource` unless `path` exists.
pub fn ensure_source_exists(kind: AssetKind, path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::MissingSource {
            kind,
            path: path.to_path_buf(),
        })
    }
}

/// Decode `path` (any format `image` recognises) and normalise it to RGBA8.
pub fn load_rgba(kind: AssetKind, path: &Path) -> Result<RgbaImage> {
    ensure_source_exists(kind, path)?;
    let img = image::open(path)?.into_rgba8();
    info!(
        "Loaded {} source {:?} ({}x{})",
        kind,
        path,
        img.width(),
        img.height()
    );
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn missing_path_is_reported_with_kind() {
        let err = load_rgba(AssetKind::Mark, Path::new("/definitely/not/here.png")).unwrap_err();
        match err {
            Error::MissingSource { kind, path } => {
                assert_eq!(kind, AssetKind::Mark);
                assert_eq!(path, Path::new("/definitely/not/here.png"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn grayscale_is_converted_to_opaque_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(3, 2, Luma([90])).save(&path).unwrap();

        let img = load_rgba(AssetKind::Logo, &path).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert!(img.pixels().all(|p| p.0 == [90, 90, 90, 255]));
    }

    #[test]
    fn corrupt_file_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png at all").unwrap();

        let err = load_rgba(AssetKind::Logo, &path).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
