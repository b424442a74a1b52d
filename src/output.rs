//! Result types returned by [`crate::convert()`].

use crate::error::{PageError, Pdf2HtmlError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One successfully saved page image.
///
/// The manifest is an ordered `Vec<ManifestEntry>`; only entries in it are
/// referenced from the HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// 1-indexed page number.
    pub page_num: usize,
    /// Where the JPEG was written.
    pub path: PathBuf,
    /// Path relative to the output directory, always `/`-separated,
    /// e.g. `src/page_1.jpg`.
    pub href: String,
}

/// Persistence outcome for one rasterised page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-indexed page number.
    pub page_num: usize,
    /// Target file for the image, whether or not the write succeeded.
    pub path: PathBuf,
    /// `Some` when the image could not be saved.
    pub error: Option<PageError>,
}

impl PageResult {
    pub fn is_saved(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate numbers for a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Pages produced by rasterisation.
    pub total_pages: usize,
    /// Pages whose image was written (the manifest length).
    pub saved_pages: usize,
    /// Pages whose image write failed.
    pub failed_pages: usize,
    /// Time spent inside the rasteriser.
    pub render_duration_ms: u64,
    /// Wall-clock time for the whole run.
    pub total_duration_ms: u64,
}

/// Everything produced by a run that got past rasterisation.
#[derive(Debug)]
pub struct ConversionOutput {
    /// Saved images in page order.
    pub manifest: Vec<ManifestEntry>,
    /// Per-page outcome, one per rasterised page, in page order.
    pub pages: Vec<PageResult>,
    /// The generated HTML text.
    pub html: String,
    /// Where the HTML was (or should have been) written.
    pub html_path: PathBuf,
    /// `Some` when writing the HTML failed. Images on disk are unaffected.
    pub html_error: Option<Pdf2HtmlError>,
    pub stats: ConversionStats,
}

impl ConversionOutput {
    /// True when every page was saved and the HTML was written.
    pub fn is_complete(&self) -> bool {
        self.stats.failed_pages == 0 && self.html_error.is_none()
    }

    /// Errors for pages left out of the manifest.
    pub fn page_errors(&self) -> impl Iterator<Item = &PageError> {
        self.pages.iter().filter_map(|p| p.error.as_ref())
    }
}
