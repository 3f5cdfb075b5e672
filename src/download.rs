//! Saving the current image under a fixed filename.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::DownloadError;
use crate::export::{png_bytes_from_data_uri, ExportedImage};

/// Name every downloaded image is saved under.
pub const DOWNLOAD_FILENAME: &str = "qr_code.png";

/// A platform primitive that performs a user-visible save.
///
/// `content` is the data URI of the image, exactly as exported.
pub trait SaveTarget {
    fn save(&mut self, filename: &str, content: &str) -> Result<(), DownloadError>;
}

/// Saves into a directory on disk, decoding the data URI to PNG bytes.
///
/// The directory is created if it does not exist and an existing file of the
/// same name is overwritten.
#[derive(Clone, Debug)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectoryTarget { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveTarget for DirectoryTarget {
    fn save(&mut self, filename: &str, content: &str) -> Result<(), DownloadError> {
        let bytes = png_bytes_from_data_uri(content)?;
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        info!(path = %path.display(), "saved image");
        Ok(())
    }
}

/// Offers `image` to `target` as [`DOWNLOAD_FILENAME`].
///
/// With no image this does nothing. Repeated calls save again each time.
pub fn download<T: SaveTarget + ?Sized>(image: Option<&ExportedImage>, target: &mut T) -> Result<(), DownloadError> {
    match image {
        Some(image) => target.save(DOWNLOAD_FILENAME, image.as_str()),
        None => {
            debug!("download requested with no image, ignoring");
            Ok(())
        }
    }
}
