//! Paths, fonts, and page geometry.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Source and destination locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathsConfig {
    /// Markdown source file.
    /// Default: README_REPO.md
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// PDF destination; derived from the input when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: None,
        }
    }
}

impl PathsConfig {
    /// Output path for `input`: the configured one, else `input` with a `.pdf` extension.
    ///
    /// ```
    /// use mdpdf_config::PathsConfig;
    /// use std::path::{Path, PathBuf};
    ///
    /// let paths = PathsConfig::default();
    /// assert_eq!(paths.output_for(Path::new("docs/guide.md")), PathBuf::from("docs/guide.pdf"));
    /// ```
    pub fn output_for(&self, input: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| input.with_extension("pdf"))
    }
}

/// Font asset locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FontsConfig {
    /// Family name used in logs.
    /// Default: "DejaVu"
    #[serde(default = "default_family")]
    pub family: String,

    /// Regular weight TrueType file.
    #[serde(default = "default_regular")]
    pub regular: PathBuf,

    /// Bold weight TrueType file.
    #[serde(default = "default_bold")]
    pub bold: PathBuf,

    /// Monospace TrueType file for code.
    /// An empty path selects builtin Courier, which only covers WinAnsi text.
    #[serde(default = "default_mono", skip_serializing_if = "Option::is_none")]
    pub mono: Option<PathBuf>,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            family: default_family(),
            regular: default_regular(),
            bold: default_bold(),
            mono: default_mono(),
        }
    }
}

impl FontsConfig {
    /// Monospace font file, or `None` for builtin Courier.
    pub fn mono_path(&self) -> Option<&Path> {
        self.mono
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// Page geometry in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageConfig {
    /// Page width. Default: 210 (A4)
    #[serde(default = "default_width")]
    pub width: f32,

    /// Page height. Default: 297 (A4)
    #[serde(default = "default_height")]
    pub height: f32,

    /// Left, right, and top margin. Default: 10
    #[serde(default = "default_margin")]
    pub margin: f32,

    /// Distance from the bottom edge that triggers a page break. Default: 15
    #[serde(default = "default_break_margin")]
    pub break_margin: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
            break_margin: default_break_margin(),
        }
    }
}

impl PageConfig {
    /// Width between the left and right margins.
    pub fn usable_width(&self) -> f32 {
        (self.width - 2.0 * self.margin).max(0.0)
    }

    /// Lowest y (from the top) content may reach before a page break.
    pub fn break_trigger(&self) -> f32 {
        self.height - self.break_margin
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("README_REPO.md")
}

fn default_family() -> String {
    "DejaVu".to_string()
}

fn default_regular() -> PathBuf {
    PathBuf::from("DejaVuSans.ttf")
}

fn default_bold() -> PathBuf {
    PathBuf::from("DejaVuSans-Bold.ttf")
}

fn default_mono() -> Option<PathBuf> {
    Some(PathBuf::from("DejaVuSansMono.ttf"))
}

fn default_width() -> f32 {
    210.0
}

fn default_height() -> f32 {
    297.0
}

fn default_margin() -> f32 {
    10.0
}

fn default_break_margin() -> f32 {
    15.0
}
