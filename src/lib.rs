//! # qrdrop
//!
//! Type some text, get a scannable QR code back.
//!
//! `qrdrop` turns a string into a 256x256 PNG, hands it back as a `data:` URI for display,
//! and saves it as `qr_code.png` on request. The pipeline is fixed: the text is checked for
//! content, encoded at error correction level L with a 2-module quiet zone, painted black on
//! white, and exported losslessly.
//!
//! ## Features
//!
//! - One-shot pipeline: [`generator::run_pipeline`].
//! - A small state machine for interactive use: [`generator::Generator`].
//! - A swappable encoder behind [`encoder::SymbolEncoder`], with a default built on the
//!   `qrcode` crate.
//! - Saving to disk through [`download::DirectoryTarget`], or anywhere else via
//!   [`download::SaveTarget`].
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrdrop = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! ```rust
//! use qrdrop::encoder::QrcodeEncoder;
//! use qrdrop::generator::{Generator, GeneratorState};
//!
//! let mut generator = Generator::new(QrcodeEncoder::new());
//! generator.set_text("https://example.com");
//! generator.generate();
//!
//! if let GeneratorState::Success(image) = generator.state() {
//!     assert!(image.as_str().starts_with("data:image/png;base64,"));
//! }
//! ```
//!
//! Saving the current image:
//!
//! ```rust,no_run
//! # use qrdrop::encoder::QrcodeEncoder;
//! # use qrdrop::generator::Generator;
//! use qrdrop::download::DirectoryTarget;
//!
//! # let mut generator = Generator::new(QrcodeEncoder::new());
//! # generator.set_text("Hello, World!");
//! # generator.generate();
//! generator.download(&mut DirectoryTarget::new("output")).expect("Failed to save image");
//! ```
//!
//! ## Modules
//!
//! - [`options`]: The fixed encoding configuration.
//! - [`input`]: Length-capped user text.
//! - [`validate`]: Rejects blank text.
//! - [`encoder`]: The encoder seam and its adapter.
//! - [`export`]: PNG data URI export.
//! - [`download`]: Saving under a fixed filename.
//! - [`generator`]: The generate/download state machine.

pub mod download;
pub mod encoder;
pub mod error;
pub mod export;
pub mod generator;
pub mod input;
pub mod logging;
pub mod options;
pub mod validate;

pub use error::{DownloadError, GenerateError};
pub use generator::{GenerationResult, Generator, GeneratorState};
pub use options::EncodingOptions;
