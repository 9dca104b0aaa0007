//! mdpdf Config
//!
//! This crate handles configuration loading and management
//! for mdpdf, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mdpdf/config.toml`
//! - macOS: `~/Library/Application Support/mdpdf/config.toml`
//! - Windows: `%APPDATA%\mdpdf\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mdpdf_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod computed;
mod page;
mod style;

pub use computed::{ComputedStyle, TableStyle, TextStyle};
pub use page::{FontsConfig, PageConfig, PathsConfig};
pub use style::{StyleConfig, TableConfig, TextStyleConfig};

use mdpdf_core::{MdpdfError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r##"[paths]
Input = "README_REPO.md"

[fonts]
Family  = "DejaVu"
Regular = "DejaVuSans.ttf"
Bold    = "DejaVuSans-Bold.ttf"
Mono    = "DejaVuSansMono.ttf"

[page]
Width       = 210.0
Height      = 297.0
Margin      = 10.0
BreakMargin = 15.0

[style]
H1   = { Size = 20.0, LineHeight = 10.0, Before = 5.0, After = 3.0 }
H2   = { Size = 15.0, LineHeight = 8.0, Before = 4.0, After = 2.0 }
H3   = { Size = 12.0, LineHeight = 7.0, Before = 3.0, After = 2.0 }
Body = { Size = 11.0, LineHeight = 6.0 }
Code = { Size = 9.0, LineHeight = 5.0 }
BlankSpacing = 3.0
Bullet       = "  • "
TextColor    = "#000000"
CodeColor    = "#3c3c3c"

[table]
FontSize     = 9.0
RowHeight    = 7.0
MaxCellChars = 40
After        = 3.0
HeaderFill   = "#5050a0"
HeaderText   = "#ffffff"
BodyFill     = "#f5f5f5"
BodyText     = "#000000"
Border       = "#000000"
"##;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input and output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Font asset locations
    #[serde(default)]
    pub fonts: FontsConfig,

    /// Page geometry in millimetres
    #[serde(default)]
    pub page: PageConfig,

    /// Per-block text styles
    #[serde(default)]
    pub style: StyleConfig,

    /// Table styling
    #[serde(default)]
    pub table: TableConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use mdpdf_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[fonts]"));
    /// assert!(toml.contains("[table]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mdpdf")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mdpdf_config::Config;
    /// use std::path::Path;
    /// let config = Config::load_from(Path::new("./mdpdf.toml")).unwrap();
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MdpdfError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it
    /// 3. Otherwise treat it as inline TOML and merge that
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?)?;
        }

        Ok(config)
    }

    /// Parse an override given either as a file path or inline TOML.
    ///
    /// Only the keys written in the override are returned, so merging it
    /// leaves every other setting alone.
    pub fn parse_override(override_str: &str) -> Result<toml::Table> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        override_toml
            .parse::<toml::Table>()
            .map_err(|e| MdpdfError::Config(format!("Override parse error: {}", e)))
    }

    /// Overlay the keys present in `overlay` onto this config.
    ///
    /// Tables are merged key by key; any other value replaces the current
    /// one. Keys missing from `overlay` keep their current values.
    ///
    /// # Example
    ///
    /// ```
    /// use mdpdf_config::Config;
    ///
    /// let mut base = Config::default();
    /// base.table.max_cell_chars = 12;
    ///
    /// let overlay = Config::parse_override("[page]\nMargin = 20.0").unwrap();
    /// base.merge(&overlay).unwrap();
    /// assert_eq!(base.page.margin, 20.0);
    /// assert_eq!(base.table.max_cell_chars, 12);
    /// ```
    pub fn merge(&mut self, overlay: &toml::Table) -> Result<()> {
        let mut table = match toml::Value::try_from(&*self) {
            Ok(toml::Value::Table(table)) => table,
            Ok(_) => return Err(MdpdfError::Config("Config did not serialize to a table".into())),
            Err(e) => return Err(MdpdfError::Config(format!("Serialization error: {}", e))),
        };
        merge_tables(&mut table, overlay);

        *self = toml::Value::Table(table)
            .try_into()
            .map_err(|e| MdpdfError::Config(format!("Override error: {}", e)))?;
        Ok(())
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| MdpdfError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Resolve the style table (colors, faces, sizes) from this config.
    ///
    /// # Example
    ///
    /// ```
    /// use mdpdf_config::Config;
    /// let computed = Config::default().computed_style().unwrap();
    /// assert_eq!(computed.table.max_cell_chars, 40);
    /// ```
    pub fn computed_style(&self) -> Result<ComputedStyle> {
        ComputedStyle::from_config(&self.style, &self.table)
    }
}

/// Recursively copy `overlay` into `base`.
fn merge_tables(base: &mut toml::Table, overlay: &toml::Table) {
    for (key, value) in overlay {
        if let (Some(toml::Value::Table(inner)), toml::Value::Table(over)) =
            (base.get_mut(key), value)
        {
            merge_tables(inner, over);
            continue;
        }
        base.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.input, PathBuf::from("README_REPO.md"));
        assert_eq!(config.paths.output, None);
        assert_eq!(config.fonts.regular, PathBuf::from("DejaVuSans.ttf"));
        assert_eq!(config.fonts.bold, PathBuf::from("DejaVuSans-Bold.ttf"));
        assert_eq!(config.fonts.mono, Some(PathBuf::from("DejaVuSansMono.ttf")));
        assert_eq!(config.page.width, 210.0);
        assert_eq!(config.table.max_cell_chars, 40);
    }

    #[test]
    fn test_serde_defaults_match_default_toml() {
        let empty: Config = toml::from_str("").unwrap();
        let default = Config::default();
        assert_eq!(empty.page, default.page);
        assert_eq!(empty.style, default.style);
        assert_eq!(empty.table, default.table);
        assert_eq!(empty.fonts, default.fonts);
        assert_eq!(empty.paths, default.paths);
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();

        let override_toml = r#"
            [fonts]
            Regular = "fonts/Inter.ttf"
            Bold = "fonts/Inter-Bold.ttf"
            [table]
            MaxCellChars = 20
        "#;
        let overlay = Config::parse_override(override_toml).unwrap();

        base.merge(&overlay).unwrap();
        assert_eq!(base.fonts.regular, PathBuf::from("fonts/Inter.ttf"));
        assert_eq!(base.table.max_cell_chars, 20);
        assert_eq!(base.table.row_height, 7.0);
    }

    #[test]
    fn test_merge_keeps_unmentioned_base_values() {
        let mut base = Config::default();
        base.fonts.regular = PathBuf::from("/opt/fonts/DejaVuSans.ttf");
        base.fonts.bold = PathBuf::from("/opt/fonts/DejaVuSans-Bold.ttf");
        base.table.max_cell_chars = 12;
        base.style.bullet = "* ".into();

        let overlay = Config::parse_override("[page]\nMargin = 20.0").unwrap();
        base.merge(&overlay).unwrap();

        assert_eq!(base.page.margin, 20.0);
        assert_eq!(base.page.width, 210.0);
        assert_eq!(base.fonts.regular, PathBuf::from("/opt/fonts/DejaVuSans.ttf"));
        assert_eq!(base.fonts.bold, PathBuf::from("/opt/fonts/DejaVuSans-Bold.ttf"));
        assert_eq!(base.table.max_cell_chars, 12);
        assert_eq!(base.style.bullet, "* ");
    }

    #[test]
    fn test_merge_inline_table_by_key() {
        let mut base = Config::default();
        base.style.h1.before = 8.0;

        let overlay = Config::parse_override("[style]\nH1 = { Size = 24.0 }").unwrap();
        base.merge(&overlay).unwrap();

        assert_eq!(base.style.h1.size, 24.0);
        assert_eq!(base.style.h1.line_height, 10.0);
        assert_eq!(base.style.h1.before, 8.0);
    }

    #[test]
    fn test_merge_rejects_bad_types() {
        let mut base = Config::default();
        let overlay = Config::parse_override("[table]\nMaxCellChars = \"many\"").unwrap();
        assert!(matches!(base.merge(&overlay), Err(MdpdfError::Config(_))));
    }

    #[test]
    fn test_parse_override_inline() {
        let overlay = Config::parse_override("[page]\nMargin = 12.5").unwrap();
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay["page"]["Margin"].as_float(), Some(12.5));
    }

    #[test]
    fn test_parse_override_invalid() {
        let err = Config::parse_override("[page\nMargin =").unwrap_err();
        assert!(matches!(err, MdpdfError::Config(_)));
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so we just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("mdpdf"));
        }
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = std::env::temp_dir().join(format!("mdpdf-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.table.max_cell_chars = 12;
        config.fonts.mono = Some(PathBuf::from("DejaVuSansMono.ttf"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.table.max_cell_chars, 12);
        assert_eq!(loaded.fonts.mono, Some(PathBuf::from("DejaVuSansMono.ttf")));
        assert_eq!(loaded.style, config.style);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/mdpdf.toml")).unwrap_err();
        assert!(matches!(err, MdpdfError::Io(_)));
    }
}
