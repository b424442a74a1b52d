//! CLI binary for pdf2html.
//!
//! A thin shim over the library crate: two optional positional arguments
//! select the document and the destination, everything else is fixed.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use pdf2html::convert;
use pdf2html::pipeline::input;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  pdf2html                          portfolio.pdf → webpage/
  pdf2html slides.pdf               slides.pdf    → webpage/
  pdf2html slides.pdf site          slides.pdf    → site/

OUTPUT:
  <dest>/output.html                one <img> per saved page, in page order
  <dest>/src/page_<n>.jpg           page images rendered at 300 DPI

HELP:
  -h, --help / -V, --version        recognised only as the first argument;
                                    any other word is a path
ENVIRONMENT:
  RUST_LOG                          Log filter (default: info)

SETUP:
  pdfium is loaded at runtime. Place libpdfium next to where you run
  pdf2html, or install it where the system loader can find it.
"#;

/// Render a PDF to page images and a static HTML page.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2html",
    version,
    about = "Render a PDF to page images and a static HTML page",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// PDF file to convert [default: portfolio.pdf].
    #[arg(allow_hyphen_values = true)]
    document: Option<PathBuf>,

    /// Folder receiving output.html and src/ [default: webpage].
    #[arg(allow_hyphen_values = true)]
    output_dir: Option<PathBuf>,

    /// Anything after the first two arguments is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<OsString>,
}

/// Help or version asked for in place of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InfoRequest {
    Help,
    Version,
}

impl Cli {
    /// Every argument is positional, so `-h`/`--help` and `-V`/`--version`
    /// only count in the document slot.
    fn info_request(&self) -> Option<InfoRequest> {
        match self.document.as_deref()?.to_str()? {
            "-h" | "--help" => Some(InfoRequest::Help),
            "-V" | "--version" => Some(InfoRequest::Version),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.info_request() {
        Some(InfoRequest::Help) => {
            Cli::command().print_long_help()?;
            return Ok(());
        }
        Some(InfoRequest::Version) => {
            print!("{}", Cli::command().render_version());
            return Ok(());
        }
        None => {}
    }

    // ── Logging setup ────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if !cli.ignored.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.ignored);
    }

    // ── Build config ─────────────────────────────────────────────────────
    let resolved = input::resolve(cli.document, cli.output_dir);
    resolved.report();
    let config = resolved
        .into_builder()
        .build()
        .context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let output = convert(&config).context("Conversion failed")?;

    let stats = &output.stats;
    if output.is_complete() {
        eprintln!(
            "{}  {}/{} pages  {}ms  →  {}",
            green("✔"),
            stats.saved_pages,
            stats.total_pages,
            stats.total_duration_ms,
            bold(&output.html_path.display().to_string()),
        );
    } else {
        for e in output.page_errors() {
            eprintln!("  {} {}", red("✗"), e);
        }
        if let Some(ref e) = output.html_error {
            eprintln!("  {} {}", red("✗"), e);
        }
        eprintln!(
            "{}  {}/{} pages saved  ({} failed)  {}ms",
            cyan("⚠"),
            stats.saved_pages,
            stats.total_pages,
            stats.failed_pages,
            stats.total_duration_ms,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pdf2html").chain(args.iter().copied()))
            .expect("every argument list parses")
    }

    fn resolved(args: &[&str]) -> (PathBuf, PathBuf) {
        let cli = parse(args);
        let r = input::resolve(cli.document, cli.output_dir);
        (r.document.value, r.output_dir.value)
    }

    fn paths(document: &str, output_dir: &str) -> (PathBuf, PathBuf) {
        (PathBuf::from(document), PathBuf::from(output_dir))
    }

    #[test]
    fn zero_args_use_defaults() {
        assert_eq!(resolved(&[]), paths("portfolio.pdf", "webpage"));
        assert_eq!(parse(&[]).info_request(), None);
    }

    #[test]
    fn one_arg_sets_document() {
        assert_eq!(resolved(&["deck.pdf"]), paths("deck.pdf", "webpage"));
    }

    #[test]
    fn two_args_set_both() {
        assert_eq!(resolved(&["deck.pdf", "site"]), paths("deck.pdf", "site"));
    }

    #[test]
    fn extra_words_are_ignored() {
        let cli = parse(&["deck.pdf", "site", "extra", "--x", "-v", "y"]);
        assert_eq!(cli.ignored.len(), 4);
        assert_eq!(resolved(&["deck.pdf", "site", "extra"]), paths("deck.pdf", "site"));
    }

    #[test]
    fn help_and_version_after_the_document_are_ignored() {
        for extra in ["--help", "-h", "--version", "-V"] {
            let cli = parse(&["a.pdf", "site", extra]);
            assert_eq!(cli.info_request(), None, "{extra}");
            assert_eq!(cli.ignored, vec![OsString::from(extra)]);
            assert_eq!(cli.output_dir, Some(PathBuf::from("site")));
        }
    }

    #[test]
    fn hyphen_leading_paths_are_positional() {
        assert_eq!(resolved(&["-deck.pdf"]), paths("-deck.pdf", "webpage"));
        assert_eq!(resolved(&["a.pdf", "-site"]), paths("a.pdf", "-site"));
        assert_eq!(resolved(&["--deck.pdf", "--site"]), paths("--deck.pdf", "--site"));
    }

    #[test]
    fn help_and_version_in_first_position() {
        assert_eq!(parse(&["--help"]).info_request(), Some(InfoRequest::Help));
        assert_eq!(parse(&["-h"]).info_request(), Some(InfoRequest::Help));
        assert_eq!(parse(&["--version"]).info_request(), Some(InfoRequest::Version));
        assert_eq!(parse(&["-V"]).info_request(), Some(InfoRequest::Version));
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
