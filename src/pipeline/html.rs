//! HTML assembly and persistence.
//!
//! The page is a fixed header with an inline style block, one
//! `<div><img/></div>` line per manifest entry, and a closing tag. Hrefs are
//! interpolated verbatim; they are generated by [`crate::pipeline::layout`],
//! never taken from the caller.

use crate::error::Pdf2HtmlError;
use crate::output::ManifestEntry;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

const HTML_HEAD: &str = r#"
<html>
<head>
<style>
    body {
        margin: 0;
        padding: 0;
        background-color: #f0f0f0;
    }
    img {
        display: block;
        margin: 0 auto;
    }
</style>
</head>
<body>
"#;

const HTML_TAIL: &str = "</body></html>";

/// One image line, newline-terminated.
pub fn image_entry(href: &str) -> String {
    format!("<div><img src=\"{href}\" style=\"width:100%; max-width:1200px;\"/></div>\n")
}

/// Build the HTML document for `manifest`, in manifest order.
pub fn assemble_html(manifest: &[ManifestEntry]) -> String {
    info!("Generating HTML file...");
    let mut html = String::from(HTML_HEAD);
    for entry in manifest {
        html.push_str(&image_entry(&entry.href));
        info!("Added image {} to HTML content.", entry.href);
    }
    html.push_str(HTML_TAIL);
    html
}

/// Write `html` to `path`, replacing any existing file.
///
/// Uses atomic write (temp file + rename) so a failed run never leaves a
/// truncated document behind.
pub fn write_html(path: &Path, html: &str) -> Result<(), Pdf2HtmlError> {
    info!("Saving HTML file to: {}", path.display());
    write_atomic(path, |file| file.write_all(html.as_bytes()))?;
    info!("HTML file created successfully: {}", path.display());
    Ok(())
}

/// Fill `<path>.tmp` with `fill`, then rename it over `path`. The temp file
/// is removed on any failure.
fn write_atomic(
    path: &Path,
    fill: impl FnOnce(&mut File) -> io::Result<()>,
) -> Result<(), Pdf2HtmlError> {
    let tmp_path = path.with_extension("html.tmp");
    let written = File::create(&tmp_path).and_then(|mut file| {
        fill(&mut file)?;
        file.sync_all()
    });

    written
        .and_then(|()| std::fs::rename(&tmp_path, path))
        .map_err(|source| {
            let _ = std::fs::remove_file(&tmp_path);
            Pdf2HtmlError::OutputWriteFailed {
                path: path.to_path_buf(),
                source,
            }
        })
}
