//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! We look for a tocprune.toml in the working directory, and if present we load settings from
//! there. This provides the path separator used for matching and the output style.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::{Path, MAIN_SEPARATOR};

/// File name searched for in the working directory.
pub const CONFIG_FILE: &str = "tocprune.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from tocprune.toml or falling back to defaults.
pub struct Config {
    #[facet(default = MAIN_SEPARATOR.to_string())]
    /// Path separator shared by article paths and deleted paths.
    pub separator: String,
    #[facet(default = true)]
    /// Pretty-print the summary JSON written to stdout.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: MAIN_SEPARATOR.to_string(),
            pretty: true,
        }
    }
}

impl Config {
    /// Load configuration from tocprune.toml if present, otherwise use the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// Settings missing from the file take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        facet_toml::from_str::<Self>(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    #[must_use]
    /// Apply command line overrides on top of the loaded settings.
    ///
    /// A given separator replaces the configured one, and `compact` turns pretty-printing off.
    pub fn with_overrides(mut self, separator: Option<String>, compact: bool) -> Self {
        if let Some(separator) = separator {
            self.separator = separator;
        }
        if compact {
            self.pretty = false;
        }
        self
    }

    /// The configured separator as a single character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeparator`] unless the setting is exactly one character.
    pub fn separator(&self) -> Result<char> {
        let mut chars = self.separator.chars();
        match (chars.next(), chars.next()) {
            (Some(sep), None) => Ok(sep),
            _ => Err(Error::InvalidSeparator(self.separator.clone())),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
