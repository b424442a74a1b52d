//! Error types for the pdf2html library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Pdf2HtmlError`] — **Fatal**: the run cannot proceed at all (document
//!   missing or unreadable, pdfium unavailable, destination not creatable).
//!   Returned as `Err(Pdf2HtmlError)` from [`crate::convert()`] before any
//!   image or HTML file is written.
//!
//! * [`PageError`] — **Non-fatal**: a single page image could not be saved.
//!   Stored inside [`crate::output::PageResult`]; the page is left out of the
//!   manifest and the run continues with the next page.
//!
//! A failed `output.html` write is also non-fatal. It surfaces as
//! [`crate::output::ConversionOutput::html_error`] because the images are
//! already on disk by then.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf2html library.
#[derive(Debug, Error)]
pub enum Pdf2HtmlError {
    // ── Destination errors ────────────────────────────────────────────────
    /// The output directory or image subdirectory could not be created.
    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// pdfium could not open the document and no file exists at the path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    DocumentNotFound { path: PathBuf },

    /// The file exists but pdfium could not parse it.
    #[error("PDF '{path}' could not be opened: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// pdfium-render returned an error for a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not write the generated HTML document.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Place libpdfium next to the executable or in the working directory,\n\
or install it where the system loader can find it.\n\
Pre-built libraries: https://github.com/bblanchon/pdfium-binaries/releases\n"
    )]
    PdfiumBindingFailed(String),
}

/// A non-fatal error for a single page.
///
/// The page is skipped in the manifest and therefore in the HTML; no
/// placeholder is emitted for it.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum PageError {
    /// Encoding or writing the JPEG file failed.
    #[error("Page {page}: failed to save image '{path}': {detail}")]
    SaveFailed {
        page: usize,
        path: PathBuf,
        detail: String,
    },
}

impl PageError {
    /// 1-indexed page number the error belongs to.
    pub fn page(&self) -> usize {
        match self {
            PageError::SaveFailed { page, .. } => *page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_not_found_display() {
        let e = Pdf2HtmlError::DocumentNotFound {
            path: PathBuf::from("missing.pdf"),
        };
        let msg = e.to_string();
        assert!(msg.contains("missing.pdf"), "got: {msg}");
    }

    #[test]
    fn rasterisation_failed_display() {
        let e = Pdf2HtmlError::RasterisationFailed {
            page: 4,
            detail: "bitmap allocation".into(),
        };
        assert!(e.to_string().contains("page 4"));
        assert!(e.to_string().contains("bitmap allocation"));
    }

    #[test]
    fn directory_error_keeps_source() {
        use std::error::Error as _;

        let e = Pdf2HtmlError::DirectoryCreateFailed {
            path: PathBuf::from("webpage/src"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("webpage/src"));
        assert!(e.source().is_some());
    }

    #[test]
    fn page_error_reports_page() {
        let e = PageError::SaveFailed {
            page: 3,
            path: PathBuf::from("webpage/src/page_3.jpg"),
            detail: "disk full".into(),
        };
        assert_eq!(e.page(), 3);
        assert!(e.to_string().starts_with("Page 3:"));
    }
}
