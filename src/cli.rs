//! Command-line interface for mdpdf.

use clap::Parser;
use std::path::PathBuf;

/// mdpdf - Convert a Markdown file into a paginated PDF.
///
/// Headings, bullet lists, fenced code, pipe tables, and paragraphs are
/// laid out on A4 pages with embedded TrueType fonts.
#[derive(Parser, Debug)]
#[command(
    name = "mdpdf",
    version,
    about = "Convert a Markdown file into a paginated PDF",
    after_help = "Examples:\n  \
                  mdpdf README.md\n  \
                  mdpdf notes.md -o out/notes.pdf\n  \
                  mdpdf -c '[page]\\nMargin = 20.0' notes.md"
)]
pub struct Cli {
    /// Markdown file to convert (defaults to [paths] Input from config)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Where to write the PDF (defaults to INPUT with a .pdf extension)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Print the default configuration and exit
    #[arg(long = "print-config")]
    pub print_config: bool,
}

/// Show paths information.
pub fn show_paths() {
    use mdpdf_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());
    let exists = Config::config_path().is_some_and(|p| p.exists());

    println!("paths:");
    println!("  config                {}", config_path);
    println!("  config exists         {}", exists);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["mdpdf"]);
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.show_paths);
        assert!(!cli.print_config);
    }

    #[test]
    fn test_cli_parse_with_file() {
        let cli = Cli::parse_from(["mdpdf", "guide.md"]);
        assert_eq!(cli.input, Some(PathBuf::from("guide.md")));
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "mdpdf",
            "-o", "out.pdf",
            "-l", "debug",
            "-c", "custom.toml",
            "doc.md",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("out.pdf")));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.input, Some(PathBuf::from("doc.md")));
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from(["mdpdf", "--paths", "--print-config"]);
        assert!(cli.show_paths);
        assert!(cli.print_config);
    }
}
