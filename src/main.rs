//! mdpdf - Convert a Markdown file into a paginated PDF.
//!
//! This binary loads configuration, reads the source document, renders it
//! through the mdpdf libraries, and writes the finished PDF.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};

use mdpdf_config::Config;
use mdpdf_core::{MdpdfError, Result};
use mdpdf_parser::first_heading;
use mdpdf_render::render_pdf;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    if cli.print_config {
        print!("{}", Config::default_toml());
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("mdpdf v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(output) => println!("PDF created: {}", output.display()),
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic. Returns the path of the written PDF.
fn run(cli: &Cli) -> Result<PathBuf> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config: {:?}", config);

    let (input, output) = resolve_paths(cli, &config);
    info!("Converting {} -> {}", input.display(), output.display());

    let markdown = std::fs::read_to_string(&input).map_err(|source| MdpdfError::Input {
        path: input.clone(),
        source,
    })?;
    let title = document_title(&markdown, &input);
    debug!("Document title: {}", title);

    let bytes = render_pdf(&markdown, &title, &config)?;

    write_atomic(&output, &bytes)?;
    info!("Wrote {} bytes", bytes.len());

    Ok(output)
}

/// Write `bytes` to a sibling temporary file, then rename it over `path`.
///
/// A failed write never leaves a truncated PDF at `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let output_error = |source| MdpdfError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("output.pdf")));
    name.push(".tmp");
    let temp = path.with_file_name(name);
    debug!("Writing {} via {}", path.display(), temp.display());

    let written = std::fs::write(&temp, bytes).and_then(|()| std::fs::rename(&temp, path));
    if let Err(source) = written {
        let _ = std::fs::remove_file(&temp);
        return Err(output_error(source));
    }
    Ok(())
}

/// Input and output paths: command line first, then config.
fn resolve_paths(cli: &Cli, config: &Config) -> (PathBuf, PathBuf) {
    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| config.paths.input.clone());
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| config.paths.output_for(&input));
    (input, output)
}

/// The first level-1 heading, else the input file stem.
fn document_title(markdown: &str, input: &Path) -> String {
    first_heading(markdown).unwrap_or_else(|| {
        input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    })
}
