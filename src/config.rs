//! Configuration types for PDF-to-HTML conversion.
//!
//! Everything a run needs is carried by [`ConversionConfig`], built via its
//! [`ConversionConfigBuilder`]. The CLI only ever sets the document path and
//! the output directory; the remaining fields exist for library callers and
//! tests.

use crate::error::Pdf2HtmlError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Document converted when the caller supplies none.
pub const DEFAULT_INPUT: &str = "portfolio.pdf";

/// Destination directory used when the caller supplies none.
pub const DEFAULT_OUTPUT_DIR: &str = "webpage";

/// Fixed rasterisation resolution.
pub const DEFAULT_DPI: u32 = 300;

/// Name of the image subdirectory inside the output directory.
pub const DEFAULT_IMAGE_DIR: &str = "src";

/// Name of the generated HTML document inside the output directory.
pub const DEFAULT_HTML_FILE: &str = "output.html";

/// Configuration for a PDF-to-HTML conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2html::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .input("slides.pdf")
///     .output_dir("site")
///     .build()
///     .unwrap();
/// assert_eq!(config.dpi, 300);
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// PDF document to rasterise. Default: `portfolio.pdf`.
    pub input: PathBuf,

    /// Directory receiving `output.html` and the image subdirectory. Default: `webpage`.
    pub output_dir: PathBuf,

    /// Rendering DPI. Range: 72–600. Default: 300.
    pub dpi: u32,

    /// Image subdirectory name, also the prefix of every `<img src>`. Default: `src`.
    pub image_dir_name: String,

    /// HTML file name inside `output_dir`. Default: `output.html`.
    pub html_file_name: String,

    /// Directories searched for the platform pdfium library before falling
    /// back to the system loader. Default: `./`.
    pub pdfium_library_dirs: Vec<PathBuf>,

    /// Optional per-page progress events. Default: None.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dpi: DEFAULT_DPI,
            image_dir_name: DEFAULT_IMAGE_DIR.to_string(),
            html_file_name: DEFAULT_HTML_FILE.to_string(),
            pdfium_library_dirs: vec![PathBuf::from("./")],
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("input", &self.input)
            .field("output_dir", &self.output_dir)
            .field("dpi", &self.dpi)
            .field("image_dir_name", &self.image_dir_name)
            .field("html_file_name", &self.html_file_name)
            .field("pdfium_library_dirs", &self.pdfium_library_dirs)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ConversionProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input = path.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn image_dir_name(mut self, name: impl Into<String>) -> Self {
        self.config.image_dir_name = name.into();
        self
    }

    pub fn html_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.html_file_name = name.into();
        self
    }

    /// Replace the pdfium search directories.
    pub fn pdfium_library_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.config.pdfium_library_dirs = dirs;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Pdf2HtmlError> {
        let c = &self.config;
        if !(72..=600).contains(&c.dpi) {
            return Err(Pdf2HtmlError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.dpi
            )));
        }
        if c.image_dir_name.is_empty() || c.image_dir_name.contains(['/', '\\']) {
            return Err(Pdf2HtmlError::InvalidConfig(format!(
                "Image directory name must be a single non-empty path component, got {:?}",
                c.image_dir_name
            )));
        }
        if c.html_file_name.is_empty() || c.html_file_name.contains(['/', '\\']) {
            return Err(Pdf2HtmlError::InvalidConfig(format!(
                "HTML file name must be a single non-empty path component, got {:?}",
                c.html_file_name
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let c = ConversionConfig::default();
        assert_eq!(c.input, PathBuf::from("portfolio.pdf"));
        assert_eq!(c.output_dir, PathBuf::from("webpage"));
        assert_eq!(c.dpi, 300);
        assert_eq!(c.image_dir_name, "src");
        assert_eq!(c.html_file_name, "output.html");
        assert!(c.progress_callback.is_none());
    }

    #[test]
    fn builder_overrides_paths() {
        let c = ConversionConfig::builder()
            .input("deck.pdf")
            .output_dir("out/site")
            .build()
            .unwrap();
        assert_eq!(c.input, PathBuf::from("deck.pdf"));
        assert_eq!(c.output_dir, PathBuf::from("out/site"));
        assert_eq!(c.dpi, DEFAULT_DPI);
    }

    #[test]
    fn builder_rejects_out_of_range_dpi() {
        let err = ConversionConfig::builder().dpi(10).build().unwrap_err();
        assert!(matches!(err, Pdf2HtmlError::InvalidConfig(_)));
        assert!(ConversionConfig::builder().dpi(601).build().is_err());
        assert!(ConversionConfig::builder().dpi(72).build().is_ok());
    }

    #[test]
    fn builder_rejects_nested_names() {
        assert!(ConversionConfig::builder()
            .image_dir_name("a/b")
            .build()
            .is_err());
        assert!(ConversionConfig::builder().html_file_name("").build().is_err());
    }

    #[test]
    fn debug_hides_callback() {
        let c = ConversionConfig::builder()
            .progress_callback(std::sync::Arc::new(crate::progress::NoopProgressCallback))
            .build()
            .unwrap();
        let dbg = format!("{c:?}");
        assert!(dbg.contains("<dyn ConversionProgressCallback>"));
    }
}
