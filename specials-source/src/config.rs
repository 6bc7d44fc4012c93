//! `genspecials.toml` configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Default config file name, looked up under the engine root.
pub const CONFIG_FILE: &str = "genspecials.toml";

/// Root schema for genspecials.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Input locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Output behaviour
    #[serde(default)]
    pub table: TableConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Action source with the handler comments, relative to the root.
    #[serde(default = "default_actions")]
    pub actions: PathBuf,

    /// Source holding the Hexen binding table, relative to the root.
    #[serde(default = "default_bindings")]
    pub bindings: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            actions: default_actions(),
            bindings: default_bindings(),
        }
    }
}

fn default_actions() -> PathBuf {
    PathBuf::from("source/ev_actions.cpp")
}

fn default_bindings() -> PathBuf {
    PathBuf::from("source/ev_bindings.cpp")
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Fail instead of printing an empty table.
    #[serde(default)]
    pub deny_empty: bool,

    /// Print each binding row before the cross-referenced table.
    #[serde(default = "default_true")]
    pub echo_bindings: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            deny_empty: false,
            echo_bindings: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Config::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it doesn't exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        log::debug!("loaded config from {}", path.display());
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if self.paths.actions.as_os_str().is_empty() {
            return Err(ctx.validation_error("'actions' path must not be empty", "actions"));
        }
        if self.paths.bindings.as_os_str().is_empty() {
            return Err(ctx.validation_error("'bindings' path must not be empty", "bindings"));
        }
        Ok(())
    }
}
