//! Configuration file support
//!
//! Loads settings from ~/.patternbook.toml (or %USERPROFILE%\.patternbook.toml on Windows)
//!
//! Example:
//! ```toml
//! line-numbers = true
//! tab-width = 4
//! color = true
//!
//! [theme]
//! keyword = { fg = "red", bold = true }
//! comment = "bright-black"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::{Error, Result};
use crate::syntax::{Category, Color, Style, Theme};

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether to show a line-number gutter
    pub show_line_numbers: bool,
    /// Tab width for terminal output
    pub tab_width: usize,
    /// Whether to emit terminal colors
    pub color: bool,
    /// Category styles
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            tab_width: 4,
            color: true,
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".patternbook.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".patternbook.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        let config = Self::parse(&contents).map_err(|message| Error::Config {
            path: path.display().to_string(),
            message,
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse config file contents
    fn parse(contents: &str) -> std::result::Result<Self, String> {
        let table = contents
            .parse::<Table>()
            .map_err(|e| e.message().to_string())?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> std::result::Result<(), String> {
        for (key, value) in table {
            match key.as_str() {
                "line-numbers" => self.show_line_numbers = expect_bool(key, value)?,
                "color" => self.color = expect_bool(key, value)?,
                "tab-width" => {
                    let n = value
                        .as_integer()
                        .ok_or_else(|| format!("`{}` must be an integer", key))?;
                    self.tab_width = n.clamp(1, 16) as usize; // Between 1 and 16
                }
                "theme" => {
                    let theme = value
                        .as_table()
                        .ok_or_else(|| "`theme` must be a table".to_string())?;
                    self.apply_theme(theme)?;
                }
                _ => tracing::warn!(key = %key, "ignoring unknown config key"),
            }
        }
        Ok(())
    }

    fn apply_theme(&mut self, theme: &Table) -> std::result::Result<(), String> {
        for (name, value) in theme {
            let Some(category) = Category::from_css_class(name) else {
                tracing::warn!(category = %name, "ignoring unknown theme category");
                continue;
            };
            self.theme.set(category, parse_style(name, value)?);
        }
        Ok(())
    }
}

fn expect_bool(key: &str, value: &Value) -> std::result::Result<bool, String> {
    value
        .as_bool()
        .ok_or_else(|| format!("`{}` must be true or false", key))
}

fn parse_color(key: &str, value: &Value) -> std::result::Result<Color, String> {
    let name = value
        .as_str()
        .ok_or_else(|| format!("color for `{}` must be a string", key))?;
    Color::from_name(name).ok_or_else(|| format!("unknown color `{}` for `{}`", name, key))
}

/// A theme entry is either a bare color name or a table of attributes
fn parse_style(key: &str, value: &Value) -> std::result::Result<Style, String> {
    let Some(table) = value.as_table() else {
        return parse_color(key, value).map(Style::fg);
    };

    let mut style = Style::default();
    for (attr, value) in table {
        match attr.as_str() {
            "fg" => style = style.with_fg(parse_color(key, value)?),
            "bg" => style = style.with_bg(parse_color(key, value)?),
            // Attributes start off, so only `true` changes anything
            "bold" if expect_bool(attr, value)? => style = style.with_bold(),
            "italic" if expect_bool(attr, value)? => style = style.with_italic(),
            "underline" if expect_bool(attr, value)? => style = style.with_underline(),
            "bold" | "italic" | "underline" => {}
            _ => return Err(format!("unknown style attribute `{}` for `{}`", attr, key)),
        }
    }
    Ok(style)
}
