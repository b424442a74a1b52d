//! Destination layout: the output directory, its image subdirectory, and
//! the file names written into them.
//!
//! ```text
//! <output_dir>/
//! ├── output.html
//! └── src/
//!     ├── page_1.jpg
//!     └── page_2.jpg
//! ```

use crate::config::ConversionConfig;
use crate::error::Pdf2HtmlError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolved paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    output_dir: PathBuf,
    image_dir_name: String,
    html_file_name: String,
}

impl OutputLayout {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        image_dir_name: impl Into<String>,
        html_file_name: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            image_dir_name: image_dir_name.into(),
            html_file_name: html_file_name.into(),
        }
    }

    pub fn from_config(config: &ConversionConfig) -> Self {
        Self::new(
            config.output_dir.clone(),
            config.image_dir_name.clone(),
            config.html_file_name.clone(),
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn image_dir(&self) -> PathBuf {
        self.output_dir.join(&self.image_dir_name)
    }

    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(&self.html_file_name)
    }

    /// File name for a 1-indexed page, e.g. `page_3.jpg`.
    pub fn image_file_name(page_num: usize) -> String {
        format!("page_{page_num}.jpg")
    }

    /// On-disk path of a page image.
    pub fn image_path(&self, page_num: usize) -> PathBuf {
        self.image_dir().join(Self::image_file_name(page_num))
    }

    /// Page image path relative to the output directory, as used in `<img src>`.
    pub fn image_href(&self, page_num: usize) -> String {
        format!("{}/{}", self.image_dir_name, Self::image_file_name(page_num))
    }

    /// Create the output directory and image subdirectory if absent.
    ///
    /// Existing directories are left untouched, so repeated runs against the
    /// same destination succeed.
    pub fn prepare(&self) -> Result<(), Pdf2HtmlError> {
        info!("Creating necessary directories...");
        ensure_dir(&self.output_dir)?;
        ensure_dir(&self.image_dir())
    }
}

fn ensure_dir(path: &Path) -> Result<(), Pdf2HtmlError> {
    if path.is_dir() {
        debug!("Directory exists: {}", path.display());
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|source| Pdf2HtmlError::DirectoryCreateFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Created directory: {}", path.display());
    Ok(())
}
