//! Icon resizing with the `image` crate.

use std::io::Cursor;

use image::{ImageFormat, imageops::FilterType};
use tracing::{debug, instrument};
use traycraft_core::{
    application::{ApplicationError, ports::IconResizer},
    error::TraycraftResult,
};

/// Decodes any format `image` can guess and writes the result back in that
/// same format.
#[derive(Debug, Clone, Copy)]
pub struct RasterResizer {
    filter: FilterType,
}

impl RasterResizer {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }
}

impl Default for RasterResizer {
    fn default() -> Self {
        Self::new()
    }
}

impl IconResizer for RasterResizer {
    fn probe(&self, source: &[u8]) -> TraycraftResult<(u32, u32)> {
        let (img, _) = decode(source)?;
        Ok((img.width(), img.height()))
    }

    #[instrument(skip(self, source), fields(bytes = source.len()))]
    fn resize(&self, source: &[u8], width: u32, height: u32) -> TraycraftResult<Vec<u8>> {
        let (img, format) = decode(source)?;
        debug!(?format, from_w = img.width(), from_h = img.height(), "Resizing icon");

        let resized = img.resize_exact(width, height, self.filter);

        let mut out = Cursor::new(Vec::new());
        resized
            .write_to(&mut out, format)
            .map_err(|e| ApplicationError::DecodeFailed {
                reason: format!("cannot encode {format:?}: {e}"),
            })?;
        Ok(out.into_inner())
    }
}

fn decode(source: &[u8]) -> TraycraftResult<(image::DynamicImage, ImageFormat)> {
    let format = image::guess_format(source).map_err(|e| ApplicationError::DecodeFailed {
        reason: e.to_string(),
    })?;
    let img = image::load_from_memory_with_format(source, format).map_err(|e| {
        ApplicationError::DecodeFailed {
            reason: e.to_string(),
        }
    })?;
    Ok((img, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn probe_reports_dimensions() {
        assert_eq!(RasterResizer::new().probe(&png(64, 48)).unwrap(), (64, 48));
    }

    #[test]
    fn resize_is_exact_and_keeps_format() {
        let out = RasterResizer::new().resize(&png(64, 48), 128, 128).unwrap();

        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (128, 128));
    }

    #[test]
    fn garbage_is_decode_failure() {
        let err = RasterResizer::new()
            .resize(b"definitely not an image", 32, 32)
            .unwrap_err();
        assert!(err.to_string().contains("Icon decoding failed"));
    }
}
