//! The generate/download state machine.
//!
//! A [`Generator`] owns the current text, the encoder and the displayed state.
//! State only changes through [`Generator::generate`]. Since `generate` takes
//! `&mut self`, two generations can never overlap.

use tracing::{info, warn};

use crate::download::{download, SaveTarget};
use crate::encoder::{encode, SymbolEncoder};
use crate::error::{DownloadError, GenerateError};
use crate::export::{export, ExportedImage};
use crate::input::InputText;
use crate::options::EncodingOptions;
use crate::validate::validate;

/// The outcome of one pass through the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationResult {
    Success(ExportedImage),
    Failure(String),
}

/// Validates, encodes and exports `text`, in that order.
pub fn run_pipeline<E: SymbolEncoder>(encoder: &E, options: &EncodingOptions, text: &str) -> GenerationResult {
    let attempt = || -> Result<ExportedImage, GenerateError> {
        validate(text)?;
        let surface = encode(encoder, text, options)?;
        export(&surface)
    };
    match attempt() {
        Ok(image) => GenerationResult::Success(image),
        Err(e) => GenerationResult::Failure(e.to_string()),
    }
}

/// What is currently shown to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GeneratorState {
    #[default]
    Idle,
    Error(String),
    Success(ExportedImage),
}

pub struct Generator<E> {
    encoder: E,
    options: EncodingOptions,
    text: InputText,
    state: GeneratorState,
}

impl<E: SymbolEncoder> Generator<E> {
    /// Starts idle with empty text and [`EncodingOptions::FIXED`].
    pub fn new(encoder: E) -> Self {
        Self::with_options(encoder, EncodingOptions::FIXED)
    }

    pub fn with_options(encoder: E, options: EncodingOptions) -> Self {
        Generator {
            encoder,
            options,
            text: InputText::default(),
            state: GeneratorState::Idle,
        }
    }

    /// Replaces the text. The displayed state is untouched until the next `generate`.
    pub fn set_text(&mut self, text: &str) {
        self.text = InputText::new(text);
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn options(&self) -> &EncodingOptions {
        &self.options
    }

    /// Runs the pipeline on the current text and replaces the state with its outcome.
    ///
    /// A failure drops any previous image; a success drops any previous error.
    pub fn generate(&mut self) -> &GeneratorState {
        self.state = match run_pipeline(&self.encoder, &self.options, self.text.as_str()) {
            GenerationResult::Success(image) => {
                info!(uri_len = image.as_str().len(), "generated image");
                GeneratorState::Success(image)
            }
            GenerationResult::Failure(message) => {
                warn!(%message, "generation failed");
                GeneratorState::Error(message)
            }
        };
        &self.state
    }

    /// Saves the current image through `target`. Does nothing unless in `Success`.
    pub fn download<T: SaveTarget + ?Sized>(&self, target: &mut T) -> Result<(), DownloadError> {
        download(self.image(), target)
    }

    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    pub fn image(&self) -> Option<&ExportedImage> {
        match &self.state {
            GeneratorState::Success(image) => Some(image),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            GeneratorState::Error(message) => Some(message),
            _ => None,
        }
    }
}
