use adtext::{
    Config, OutputMode, preview_document, read_ad_text, render_to_html, strip_formatting,
};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the stderr log subscriber.
///
/// Output goes to stderr so rendered text on stdout stays clean for piping.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads ad text from the configured file or stdin.
///
/// # Errors
///
/// Returns error if the source cannot be read or is not valid UTF8
fn read_input(config: &Config) -> Result<String> {
    if config.reads_stdin() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read ad text from stdin")?;
        return Ok(text);
    }

    read_ad_text(&config.input)
}

/// Renders text according to the selected output mode.
fn render(config: &Config, text: &str) -> String {
    match config.mode() {
        OutputMode::Fragment => render_to_html(text),
        OutputMode::Plain => strip_formatting(text),
        OutputMode::Document => preview_document(&config.title(), text),
    }
}

/// Writes rendered output to the configured file or stdout.
///
/// # Errors
///
/// Returns error if the destination cannot be written
fn write_output(config: &Config, rendered: &str) -> Result<()> {
    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "wrote rendered ad text");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;
    debug!(?config, "starting");

    let text = read_input(&config)?;
    let rendered = render(&config, &text);

    if let Some(dir) = &config.css_dir {
        adtext::write_css_assets(dir).context("Failed to write preview stylesheet")?;
    }

    write_output(&config, &rendered)
}
