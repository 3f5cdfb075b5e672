//! PNG data URI export of a raster surface.

use std::fmt;
use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::encoder::RasterSurface;
use crate::error::{DownloadError, GenerateError, Result};

/// Prefix every exported image starts with.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// A self-contained PNG image, encoded as a `data:` URI.
///
/// Never mutated once built; a new generation produces a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedImage(String);

impl ExportedImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the base64 payload back into PNG bytes.
    pub fn png_bytes(&self) -> std::result::Result<Vec<u8>, DownloadError> {
        png_bytes_from_data_uri(&self.0)
    }

    /// Decodes the PNG into pixels, for display.
    pub fn to_image(&self) -> std::result::Result<RgbaImage, DownloadError> {
        let bytes = self.png_bytes()?;
        let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .map_err(|e| DownloadError::InvalidDataUri(e.to_string()))?;
        Ok(img.to_rgba8())
    }
}

impl fmt::Display for ExportedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts PNG bytes from a `data:image/png;base64,` URI.
pub fn png_bytes_from_data_uri(uri: &str) -> std::result::Result<Vec<u8>, DownloadError> {
    let payload = uri
        .strip_prefix(PNG_DATA_URI_PREFIX)
        .ok_or_else(|| DownloadError::InvalidDataUri("missing data:image/png;base64, prefix".into()))?;
    STANDARD
        .decode(payload)
        .map_err(|e| DownloadError::InvalidDataUri(e.to_string()))
}

/// Encodes `surface` losslessly as PNG and wraps it in a data URI.
pub fn export(surface: &RasterSurface) -> Result<ExportedImage> {
    let mut bytes: Vec<u8> = Vec::new();
    DynamicImage::ImageRgba8(surface.as_image().clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| GenerateError::EncodingFailure(e.to_string()))?;
    debug!(png_bytes = bytes.len(), "exported surface");

    Ok(ExportedImage(format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(&bytes))))
}
