//! Conversion entry points.
//!
//! [`convert`] wires the production collaborators (pdfium, JPEG files) into
//! [`convert_with`], which runs the stages in a fixed order:
//!
//! ```text
//! prepare dirs ─▶ rasterise ─▶ persist images ─▶ assemble + write HTML
//!   (fatal)        (fatal)      (per page)         (non-fatal)
//! ```

use crate::config::ConversionConfig;
use crate::error::Pdf2HtmlError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::encode::{JpegFileWriter, PageWriter};
use crate::pipeline::render::{self, PdfiumRasterizer, Rasterizer};
use crate::pipeline::{html, layout::OutputLayout, persist};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Convert the configured PDF into page images and an HTML page.
///
/// # Returns
/// `Ok(ConversionOutput)` once rasterisation succeeded, even if some pages
/// or the HTML could not be written (see
/// [`ConversionOutput::is_complete`]).
///
/// Destination directories are created before the document is rendered, so
/// a fatal rendering error can leave an empty `<dest>/src/` behind.
///
/// # Errors
/// Returns `Err(Pdf2HtmlError)` only for fatal errors:
/// - destination directories cannot be created
/// - pdfium is unavailable
/// - the document is missing, unreadable, or a page fails to render
pub fn convert(config: &ConversionConfig) -> Result<ConversionOutput, Pdf2HtmlError> {
    let rasterizer = PdfiumRasterizer::from_config(config);
    convert_with(config, &rasterizer, &JpegFileWriter)
}

/// [`convert`] with caller-supplied rasterisation and image-writing backends.
pub fn convert_with(
    config: &ConversionConfig,
    rasterizer: &dyn Rasterizer,
    writer: &dyn PageWriter,
) -> Result<ConversionOutput, Pdf2HtmlError> {
    let total_start = Instant::now();
    info!("Starting PDF to HTML conversion...");
    info!("PDF file to convert: {}", config.input.display());
    info!("Output folder: {}", config.output_dir.display());

    // ── Step 1: Prepare directories ──────────────────────────────────────
    let layout = OutputLayout::from_config(config);
    layout.prepare()?;

    // ── Step 2: Rasterise pages ──────────────────────────────────────────
    info!("Converting PDF to images...");
    let render_start = Instant::now();
    let images = rasterizer.rasterize(&config.input, config.dpi)?;
    let render_duration_ms = render_start.elapsed().as_millis() as u64;
    let total_pages = images.len();
    info!(
        "Successfully converted {} pages from PDF to images.",
        total_pages
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(total_pages);
    }

    // ── Step 3: Persist images ───────────────────────────────────────────
    let persisted = persist::persist_pages(
        images,
        &layout,
        writer,
        config.progress_callback.as_ref(),
    );
    let saved_pages = persisted.manifest.len();

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(total_pages, saved_pages);
    }

    // ── Step 4: Assemble and write HTML ──────────────────────────────────
    let html_text = html::assemble_html(&persisted.manifest);
    let html_path = layout.html_path();
    let html_error = match html::write_html(&html_path, &html_text) {
        Ok(()) => None,
        Err(e) => {
            warn!("Error writing HTML file: {}", e);
            Some(e)
        }
    };

    let stats = ConversionStats {
        total_pages,
        saved_pages,
        failed_pages: total_pages - saved_pages,
        render_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Conversion complete: {}/{} pages saved, {}ms total",
        stats.saved_pages, stats.total_pages, stats.total_duration_ms
    );

    Ok(ConversionOutput {
        manifest: persisted.manifest,
        pages: persisted.pages,
        html: html_text,
        html_path,
        html_error,
        stats,
    })
}

/// Count the pages of a PDF without rendering or writing anything.
pub fn inspect(pdf_path: impl AsRef<Path>, config: &ConversionConfig) -> Result<usize, Pdf2HtmlError> {
    let pdfium = render::bind_pdfium(&config.pdfium_library_dirs)?;
    render::page_count(&pdfium, pdf_path.as_ref())
}
