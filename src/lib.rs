//! # pdf2html
//!
//! Rasterise every page of a PDF to a JPEG and publish the pages as a single
//! static HTML document.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    document path + destination, or portfolio.pdf / webpage
//!  ├─ 2. Layout   create <dest>/ and <dest>/src/
//!  ├─ 3. Render   rasterise all pages via pdfium at 300 DPI (all-or-nothing)
//!  ├─ 4. Persist  write src/page_<n>.jpg, skipping pages that fail to save
//!  └─ 5. HTML     write <dest>/output.html listing the saved pages in order
//! ```
//!
//! Everything runs on the calling thread, one stage after the other.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2html::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder()
//!         .input("portfolio.pdf")
//!         .output_dir("webpage")
//!         .build()?;
//!     let output = convert(&config)?;
//!     eprintln!(
//!         "{}/{} pages → {}",
//!         output.stats.saved_pages,
//!         output.stats.total_pages,
//!         output.html_path.display()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2html` binary (clap + anyhow + tracing-subscriber) |
//!
//! ## Runtime requirement
//!
//! pdfium is loaded dynamically. Place `libpdfium` in the working directory
//! (or any directory listed in [`ConversionConfig::pdfium_library_dirs`]),
//! or install it where the system loader finds it.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert, convert_with, inspect};
pub use error::{PageError, Pdf2HtmlError};
pub use output::{ConversionOutput, ConversionStats, ManifestEntry, PageResult};
pub use pipeline::encode::{JpegFileWriter, PageWriter};
pub use pipeline::input::{resolve_args, Origin, ResolvedInput};
pub use pipeline::render::{PdfiumRasterizer, Rasterizer};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
