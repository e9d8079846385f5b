//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Title used for standalone previews when none can be derived.
const DEFAULT_TITLE: &str = "Ad preview";

/// What the tool writes for the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// HTML fragment for embedding in an existing page.
    Fragment,
    /// Text with formatting removed.
    Plain,
    /// Complete HTML preview document.
    Document,
}

/// Command line configuration for adtext.
#[derive(Debug, Clone, Parser)]
#[command(name = "adtext", version, about, long_about = None)]
pub struct Config {
    /// Ad text file ("-" reads stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Strip formatting and write plain text
    #[arg(long, conflicts_with = "standalone")]
    pub plain: bool,

    /// Write a complete HTML preview document
    #[arg(long)]
    pub standalone: bool,

    /// Preview document title
    #[arg(long)]
    pub title: Option<String>,

    /// Also write preview.css into this directory
    #[arg(long)]
    pub css_dir: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist or is a directory.
    pub fn validate(&self) -> Result<()> {
        if self.reads_stdin() {
            return Ok(());
        }

        if !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if self.input.is_dir() {
            bail!("Input path is a directory: {}", self.input.display());
        }

        Ok(())
    }

    /// Whether input comes from stdin rather than a file.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new("-")
    }

    /// Selected output mode.
    pub fn mode(&self) -> OutputMode {
        if self.plain {
            OutputMode::Plain
        } else if self.standalone {
            OutputMode::Document
        } else {
            OutputMode::Fragment
        }
    }

    /// Returns preview title from configuration or input file name.
    ///
    /// Falls back to the input file stem, then to a generic title when
    /// reading stdin.
    pub fn title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }

        if self.reads_stdin() {
            return DEFAULT_TITLE.to_string();
        }

        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }
}
