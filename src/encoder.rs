//! The symbol encoder seam and the adapter the generator calls through.
//!
//! [`SymbolEncoder`] is the black box that turns a payload into a painted raster.
//! [`encode`] wraps any implementation, supplies the options, and folds every
//! failure into [`GenerateError::EncodingFailure`].

use std::fmt;

use image::{Rgba, RgbaImage};
use qrcode::bits::Bits;
use qrcode::optimize::{Optimizer, Parser, Segment};
use qrcode::types::{Mode, QrError};
use qrcode::{Color, EcLevel, QrCode, Version};
use thiserror::Error;
use tracing::debug;

use crate::error::{GenerateError, Result};
use crate::options::{EncodingOptions, QrCodeEcc};

/// A square, fully painted pixel buffer produced by a [`SymbolEncoder`].
#[derive(Clone, Debug, PartialEq)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn from_image(image: RgbaImage) -> Self {
        RasterSurface { image }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Returns the RGBA value at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Turns a payload into a raster surface.
///
/// Implementations must honor the strength, size, margin and colors in `options`
/// and report payloads they cannot hold as errors rather than weakening anything.
pub trait SymbolEncoder {
    type Error: fmt::Display;

    fn encode(&self, payload: &str, options: &EncodingOptions) -> std::result::Result<RasterSurface, Self::Error>;
}

/// Runs `encoder` on already validated text with `options`.
///
/// The collaborator's diagnostic is carried verbatim. A surface that is not
/// `options.width` pixels square is rejected.
pub fn encode<E: SymbolEncoder>(encoder: &E, text: &str, options: &EncodingOptions) -> Result<RasterSurface> {
    debug!(
        chars = text.chars().count(),
        ecc = %options.error_correction.letter(),
        width = options.width,
        margin = options.margin,
        "encoding payload"
    );
    let surface = encoder
        .encode(text, options)
        .map_err(|e| GenerateError::EncodingFailure(e.to_string()))?;

    let (w, h) = surface.dimensions();
    if (w, h) != (options.width, options.width) {
        return Err(GenerateError::EncodingFailure(format!(
            "encoder produced a {}x{} surface, expected {}x{}",
            w, h, options.width, options.width
        )));
    }
    Ok(surface)
}

/// Errors from [`QrcodeEncoder`].
#[derive(Error, Debug)]
pub enum QrcodeError {
    /// The payload does not fit any symbol version at the requested strength.
    #[error("{0}")]
    Symbol(QrError),

    #[error("a {modules}-module symbol with a {margin}-module margin does not fit in {width} px")]
    SurfaceTooSmall { modules: u32, margin: u32, width: u32 },
}

/// The default encoder, backed by the `qrcode` crate.
///
/// Payloads go out as numeric, alphanumeric or byte segments only, so scanners
/// read back the exact UTF-8 text. Modules are scaled by a fractional pitch so
/// the output is always exactly `options.width` pixels wide, whatever version the
/// payload needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrcodeEncoder;

impl QrcodeEncoder {
    pub fn new() -> Self {
        QrcodeEncoder
    }
}

fn ec_level(ecc: QrCodeEcc) -> EcLevel {
    match ecc {
        QrCodeEcc::Low => EcLevel::L,
        QrCodeEcc::Medium => EcLevel::M,
        QrCodeEcc::Quartile => EcLevel::Q,
        QrCodeEcc::High => EcLevel::H,
    }
}

/// Splits `data` into segments for `version`, never in Kanji mode.
///
/// Decoders read Kanji segments as Shift JIS, and UTF-8 pairs often land in that range.
fn byte_safe_segments(data: &[u8], version: Version) -> Vec<Segment> {
    let parsed = Parser::new(data).map(|segment| match segment.mode {
        Mode::Kanji => Segment {
            mode: Mode::Byte,
            ..segment
        },
        _ => segment,
    });
    Optimizer::new(parsed, version).collect()
}

/// Builds the smallest normal-version symbol holding `data` at `ec`.
fn build_symbol(data: &[u8], ec: EcLevel) -> std::result::Result<QrCode, QrError> {
    for v in 1..=40 {
        let version = Version::Normal(v);
        let mut bits = Bits::new(version);
        let pushed = bits
            .push_segments(data, byte_safe_segments(data, version).into_iter())
            .and_then(|()| bits.push_terminator(ec));
        match pushed {
            Ok(()) => return QrCode::with_bits(bits, ec),
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(QrError::DataTooLong)
}

impl SymbolEncoder for QrcodeEncoder {
    type Error = QrcodeError;

    fn encode(&self, payload: &str, options: &EncodingOptions) -> std::result::Result<RasterSurface, QrcodeError> {
        let code = build_symbol(payload.as_bytes(), ec_level(options.error_correction)).map_err(QrcodeError::Symbol)?;
        let modules = code.width();
        let colors = code.to_colors();

        let total = modules as u32 + 2 * options.margin;
        if total > options.width {
            return Err(QrcodeError::SurfaceTooSmall {
                modules: modules as u32,
                margin: options.margin,
                width: options.width,
            });
        }

        let size = options.width as f64;
        let scale = size / total as f64;
        let border = options.margin as f64 * scale;
        let last = modules - 1;

        let mut img = RgbaImage::new(options.width, options.width);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let (px, py) = (x as f64, y as f64);
            let inside = px >= border && py >= border && px < size - border && py < size - border;
            let dark = inside && {
                let col = (((px - border) / scale) as usize).min(last);
                let row = (((py - border) / scale) as usize).min(last);
                colors[row * modules + col] == Color::Dark
            };
            *pixel = Rgba(if dark { options.dark } else { options.light });
        }

        Ok(RasterSurface::from_image(img))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl SymbolEncoder for Fixed {
        type Error = String;

        fn encode(&self, _payload: &str, _options: &EncodingOptions) -> std::result::Result<RasterSurface, String> {
            Ok(RasterSurface::from_image(RgbaImage::new(self.0, self.0)))
        }
    }

    struct Refuses;

    impl SymbolEncoder for Refuses {
        type Error = &'static str;

        fn encode(&self, _payload: &str, _options: &EncodingOptions) -> std::result::Result<RasterSurface, &'static str> {
            Err("payload rejected")
        }
    }

    #[test]
    fn test_surface_matches_fixed_width() {
        let surface = encode(&QrcodeEncoder::new(), "https://example.com", &EncodingOptions::FIXED).unwrap();
        assert_eq!(surface.dimensions(), (256, 256));
    }

    #[test]
    fn test_quiet_zone_is_light() {
        let opts = EncodingOptions::FIXED;
        let surface = encode(&QrcodeEncoder::new(), "HELLO WORLD", &opts).unwrap();
        for &(x, y) in &[(0, 0), (255, 0), (0, 255), (255, 255), (5, 128)] {
            assert_eq!(surface.pixel(x, y), opts.light);
        }
    }

    #[test]
    fn test_finder_pattern_is_dark() {
        let opts = EncodingOptions::FIXED;
        let surface = encode(&QrcodeEncoder::new(), "HELLO WORLD", &opts).unwrap();
        // Version 1: 21 modules + 4 margin, so the top-left finder starts at 2 * 256 / 25 px.
        assert_eq!(surface.pixel(22, 22), opts.dark);
    }

    #[test]
    fn test_colors_follow_options() {
        let opts = EncodingOptions {
            dark: [200, 0, 0, 255],
            light: [0, 0, 200, 255],
            ..EncodingOptions::FIXED
        };
        let surface = encode(&QrcodeEncoder::new(), "HELLO WORLD", &opts).unwrap();
        assert_eq!(surface.pixel(0, 0), opts.light);
        assert_eq!(surface.pixel(22, 22), opts.dark);
    }

    #[test]
    fn test_capacity_error_is_carried() {
        let too_long = "a".repeat(3000);
        let err = encode(&QrcodeEncoder::new(), &too_long, &EncodingOptions::FIXED).unwrap_err();
        assert_eq!(err, GenerateError::EncodingFailure(QrError::DataTooLong.to_string()));
    }

    #[test]
    fn test_cjk_never_uses_kanji_mode() {
        // The stock parser does pick Kanji for these bytes.
        assert!(Parser::new("二维码生成器".as_bytes()).any(|s| s.mode == Mode::Kanji));

        for text in ["二维码生成器", "日本語のテキスト", "漢字とかな 123 ABC", "한국어 텍스트"] {
            let data = text.as_bytes();
            for v in [1, 10, 27, 40] {
                let segments = byte_safe_segments(data, Version::Normal(v));
                assert!(segments.iter().all(|s| s.mode != Mode::Kanji), "{} at version {}", text, v);
                assert_eq!(segments.first().map(|s| s.begin), Some(0));
                assert_eq!(segments.last().map(|s| s.end), Some(data.len()));
            }
        }
    }

    #[test]
    fn test_smallest_version_is_chosen() {
        assert_eq!(build_symbol(b"HELLO WORLD", EcLevel::L).unwrap().width(), 21);
        // 19 bytes exceed version 1-L's 17-byte capacity.
        assert_eq!(build_symbol(b"https://example.com", EcLevel::L).unwrap().width(), 25);
    }

    #[test]
    fn test_strength_is_not_boosted() {
        let low = build_symbol(b"HELLO WORLD", EcLevel::L).unwrap();
        assert_eq!(low.error_correction_level(), EcLevel::L);
    }

    #[test]
    fn test_non_square_surface_rejected() {
        struct Wide;

        impl SymbolEncoder for Wide {
            type Error = String;

            fn encode(&self, _payload: &str, _options: &EncodingOptions) -> std::result::Result<RasterSurface, String> {
                Ok(RasterSurface::from_image(RgbaImage::new(256, 128)))
            }
        }

        let err = encode(&Wide, "hi", &EncodingOptions::FIXED).unwrap_err();
        assert_eq!(
            err,
            GenerateError::EncodingFailure("encoder produced a 256x128 surface, expected 256x256".into())
        );
    }

    #[test]
    fn test_surface_too_small() {
        let opts = EncodingOptions { width: 20, ..EncodingOptions::FIXED };
        let err = encode(&QrcodeEncoder::new(), "HELLO WORLD", &opts).unwrap_err();
        assert_eq!(
            err,
            GenerateError::EncodingFailure("a 21-module symbol with a 2-module margin does not fit in 20 px".into())
        );
    }

    #[test]
    fn test_wrong_size_surface_rejected() {
        let err = encode(&Fixed(128), "hi", &EncodingOptions::FIXED).unwrap_err();
        assert_eq!(
            err,
            GenerateError::EncodingFailure("encoder produced a 128x128 surface, expected 256x256".into())
        );
    }

    #[test]
    fn test_collaborator_message_verbatim() {
        let err = encode(&Refuses, "hi", &EncodingOptions::FIXED).unwrap_err();
        assert_eq!(err.to_string(), "generation failed: payload rejected");
    }
}
