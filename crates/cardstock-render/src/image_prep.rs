//! Custom-image normalization for embedding.
//!
//! Source images arrive as arbitrary user files. Embedding wants a
//! pixel-exact square in a known color model, so this module opens the
//! source, converts to RGB8, resamples with Lanczos3 and re-encodes as PNG.
//! The result lives entirely in memory; there is no temp file to clean up,
//! and dropping the handle releases everything. Failures are reported as
//! [`ImageError`] and are the caller's cue to fall back to icon rendering;
//! they must never abort a card or the document.

use std::path::Path;

use base64::Engine as _;
use image::ImageEncoder as _;

/// Edge length of a normalized image: a 20 mm square at 203 dpi (the common
/// thermal printer class).
pub const NORMALIZED_EDGE_PX: u32 = 160;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to open image {path}: {source}")]
    Open {
        path: String,
        source: image::ImageError,
    },

    #[error("failed to encode normalized image: {0}")]
    Encode(#[from] image::ImageError),
}

/// A normalized, ready-to-embed image. Scoped to one card's embedding step.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    edge_px: u32,
    png: Vec<u8>,
}

impl NormalizedImage {
    pub fn width(&self) -> u32 {
        self.edge_px
    }

    pub fn height(&self) -> u32 {
        self.edge_px
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// `data:` URI for an SVG `<image href=...>` attribute.
    pub fn data_uri(&self) -> String {
        let mut uri = String::from("data:image/png;base64,");
        base64::engine::general_purpose::STANDARD.encode_string(&self.png, &mut uri);
        uri
    }
}

/// Opens `path`, converts to RGB8 and resamples to an exact
/// `target_px x target_px` square.
pub fn normalize(path: &Path, target_px: u32) -> Result<NormalizedImage, ImageError> {
    let img = image::open(path).map_err(|source| ImageError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let rgb = img.to_rgb8();
    let resized = image::imageops::resize(
        &rgb,
        target_px,
        target_px,
        image::imageops::FilterType::Lanczos3,
    );

    let mut png = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png).write_image(
        resized.as_raw(),
        target_px,
        target_px,
        image::ExtendedColorType::Rgb8,
    )?;

    Ok(NormalizedImage {
        edge_px: target_px,
        png,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_test_png(dir: &Path, name: &str, w: u32, h: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        let img = image::RgbImage::from_fn(w, h, |x, _| image::Rgb([(x % 256) as u8, 40, 200]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn normalizes_to_exact_square() {
        let dir = tempfile::tempdir().unwrap();
        let src = write_test_png(dir.path(), "src.png", 123, 77);
        let norm = normalize(&src, NORMALIZED_EDGE_PX).unwrap();
        assert_eq!(norm.width(), NORMALIZED_EDGE_PX);
        assert_eq!(norm.height(), NORMALIZED_EDGE_PX);
        assert!(norm.png_bytes().starts_with(b"\x89PNG\r\n\x1a\n"));
        assert!(norm.data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn normalization_is_idempotent_on_its_own_output() {
        let dir = tempfile::tempdir().unwrap();
        let src = write_test_png(dir.path(), "src.png", 300, 300);
        let first = normalize(&src, NORMALIZED_EDGE_PX).unwrap();

        let roundtrip = dir.path().join("normalized.png");
        std::fs::write(&roundtrip, first.png_bytes()).unwrap();
        let second = normalize(&roundtrip, NORMALIZED_EDGE_PX).unwrap();
        assert_eq!(second.width(), NORMALIZED_EDGE_PX);
        assert_eq!(second.height(), NORMALIZED_EDGE_PX);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = normalize(Path::new("/definitely/not/here.png"), 32).unwrap_err();
        assert!(matches!(err, ImageError::Open { .. }));
    }

    #[test]
    fn undecodable_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not an image at all").unwrap();
        assert!(matches!(
            normalize(&path, 32),
            Err(ImageError::Open { .. })
        ));
    }
}
