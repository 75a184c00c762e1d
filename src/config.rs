//! Configuration module for the interface generator.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - The Go toolchain variables `GOPATH` and `GOROOT`
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides (applied by the binary)
//!
//! # Environment Variables
//!
//! `GOPATH` fills `locator.workspace_root` and `GOROOT` fills
//! `locator.system_root`. Other settings use the `IFACEGEN_` prefix with
//! double underscores separating nested levels:
//! - `IFACEGEN_LOADER__SORT_ENTRIES=false` sets `loader.sort_entries`
//! - `IFACEGEN_RENDER__INDENT="    "` sets `render.indent`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".ifacegen.toml";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    /// Package lookup roots
    #[serde(default)]
    pub locator: LocatorConfig,

    /// Source file discovery
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Import checking
    #[serde(default)]
    pub checker: CheckerConfig,

    /// Interface output
    #[serde(default)]
    pub render: RenderConfig,

    /// Which diagnostic lines are reported
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LocatorConfig {
    /// Workspace source root (GOPATH)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// System source root (GOROOT)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_root: Option<PathBuf>,

    /// Directory below each root holding package sources
    #[serde(default = "default_source_subdir")]
    pub source_subdir: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoaderConfig {
    /// Source file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Visit directory entries in file name order
    #[serde(default = "default_true")]
    pub sort_entries: bool,

    /// Load `_test.go` files too
    #[serde(default = "default_true")]
    pub include_tests: bool,

    /// Follow symbolic links while walking
    #[serde(default = "default_false")]
    pub follow_links: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckerConfig {
    /// Run the per-file import check
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Fail when an import path cannot be found under a source root
    #[serde(default = "default_false")]
    pub require_resolvable_imports: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RenderConfig {
    /// Prefix for each method line
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Template with `{name}` and `{methods}` placeholders
    #[serde(default = "default_template")]
    pub template: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_true")]
    pub imports: bool,

    #[serde(default = "default_true")]
    pub types: bool,

    #[serde(default = "default_true")]
    pub relations: bool,
}

// Default value functions
fn default_source_subdir() -> String {
    "src".to_string()
}
fn default_extension() -> String {
    "go".to_string()
}
fn default_indent() -> String {
    "\t".to_string()
}
fn default_template() -> String {
    "type {name} interface {\n{methods}}".to_string()
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            workspace_root: None,
            system_root: None,
            source_subdir: default_source_subdir(),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            sort_entries: true,
            include_tests: true,
            follow_links: false,
        }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            require_resolvable_imports: false,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            template: default_template(),
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            imports: true,
            types: true,
            relations: true,
        }
    }
}

impl Settings {
    /// Load configuration from all sources, reading `.ifacegen.toml` from
    /// the working directory when present.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::load_from(CONFIG_FILE_NAME)
    }

    /// Load configuration using a specific TOML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref())
            .extract()
            .map_err(Box::new)
            .map(Settings::normalized)
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Go toolchain roots
            .merge(Env::raw().only(&["GOPATH", "GOROOT"]).map(|key| {
                if key.as_str().eq_ignore_ascii_case("GOPATH") {
                    "locator.workspace_root".into()
                } else {
                    "locator.system_root".into()
                }
            }))
            // Layer in config file if it exists
            .merge(Toml::file(path))
            // Double underscore separates nested levels
            .merge(Env::prefixed("IFACEGEN_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Empty roots behave as if they were never set.
    fn normalized(mut self) -> Self {
        let is_empty =
            |root: &Option<PathBuf>| root.as_ref().is_some_and(|p| p.as_os_str().is_empty());
        if is_empty(&self.locator.workspace_root) {
            self.locator.workspace_root = None;
        }
        if is_empty(&self.locator.system_root) {
            self.locator.system_root = None;
        }
        self
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
