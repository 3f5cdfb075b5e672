//! Rendering parameters handed to the symbol encoder.
//!
//! The application only ever uses [`EncodingOptions::FIXED`]. The encoder receives
//! it as an argument, never from a global.

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum QrCodeEcc {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl QrCodeEcc {
    /// The single-letter name used by the QR standard ("L", "M", "Q", "H").
    pub fn letter(self) -> char {
        use QrCodeEcc::*;
        match self {
            Low => 'L',
            Medium => 'M',
            Quartile => 'Q',
            High => 'H',
        }
    }
}

/// Fixed configuration for one generation: strength, output size, quiet zone and palette.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EncodingOptions {
    pub error_correction: QrCodeEcc,
    /// Side length of the square output, in pixels.
    pub width: u32,
    /// Quiet zone around the symbol, in modules.
    pub margin: u32,
    /// RGBA color of dark modules.
    pub dark: [u8; 4],
    /// RGBA color of light modules and the quiet zone.
    pub light: [u8; 4],
}

impl EncodingOptions {
    /// Low strength, 256x256 px, 2-module margin, black on white.
    pub const FIXED: EncodingOptions = EncodingOptions {
        error_correction: QrCodeEcc::Low,
        width: 256,
        margin: 2,
        dark: [0, 0, 0, 255],
        light: [255, 255, 255, 255],
    };
}

impl Default for EncodingOptions {
    fn default() -> Self {
        Self::FIXED
    }
}
