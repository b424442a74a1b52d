//! Input resolution: map up to two positional arguments onto the document
//! path and destination directory, falling back to fixed defaults.
//!
//! Neither value is checked here. A missing document surfaces later as a
//! rasterisation failure; a bad destination surfaces when directories are
//! prepared.

use crate::config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;
use tracing::info;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Nothing supplied; the built-in default is in effect.
    Default,
    /// The caller supplied the value.
    Provided,
}

/// A resolved value together with its [`Origin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Setting<T> {
    fn resolve(provided: Option<T>, default: impl FnOnce() -> T) -> Self {
        match provided {
            Some(value) => Self {
                value,
                origin: Origin::Provided,
            },
            None => Self {
                value: default(),
                origin: Origin::Default,
            },
        }
    }

    pub fn is_default(&self) -> bool {
        self.origin == Origin::Default
    }
}

/// Document path and destination directory for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    pub document: Setting<PathBuf>,
    pub output_dir: Setting<PathBuf>,
}

impl ResolvedInput {
    /// Seed a config builder with the resolved paths.
    pub fn into_builder(self) -> ConversionConfigBuilder {
        ConversionConfig::builder()
            .input(self.document.value)
            .output_dir(self.output_dir.value)
    }

    /// Log which value is in effect for each setting.
    pub fn report(&self) {
        match self.document.origin {
            Origin::Provided => info!("Using provided PDF file: {}", self.document.value.display()),
            Origin::Default => info!(
                "No PDF file provided. Using default: {}",
                self.document.value.display()
            ),
        }
        match self.output_dir.origin {
            Origin::Provided => info!(
                "Using provided output folder: {}",
                self.output_dir.value.display()
            ),
            Origin::Default => info!(
                "No output folder provided. Using default: {}",
                self.output_dir.value.display()
            ),
        }
    }
}

/// Resolve positional arguments (program name already stripped).
///
/// The first item is the document, the second the destination directory;
/// anything after that is ignored.
pub fn resolve_args<I, S>(args: I) -> ResolvedInput
where
    I: IntoIterator<Item = S>,
    S: Into<PathBuf>,
{
    let mut args = args.into_iter().map(Into::into);
    let document = args.next();
    let output_dir = args.next();
    resolve(document, output_dir)
}

/// Resolve optional document and destination values against the defaults.
pub fn resolve(document: Option<PathBuf>, output_dir: Option<PathBuf>) -> ResolvedInput {
    ResolvedInput {
        document: Setting::resolve(document, || PathBuf::from(DEFAULT_INPUT)),
        output_dir: Setting::resolve(output_dir, || PathBuf::from(DEFAULT_OUTPUT_DIR)),
    }
}
