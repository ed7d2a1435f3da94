//! Configuration for the Readme Builder service.
//!
//! Provides the [`ReadmeConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `README_BUILDER_CONFIG` environment variable
//! 3. XDG default: `~/.config/readme-builder/config.toml`
//! 4. Built-in defaults
//!
//! Environment variables under `README_BUILDER_` override file values.
//! The code language list is read from
//! `README_BUILDER_MARKDOWN_CODE_LANGUAGES` as a comma-separated string.

use confyg::{Confygery, env};
use readme_core::markdown::DEFAULT_CODE_LANGUAGES;
use readme_core::{CodeLanguages, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadmeConfig {
    /// Server configuration.
    pub server: ServerConfig,

    /// Export configuration.
    pub export: ExportConfig,

    /// Markdown rendering configuration.
    pub markdown: MarkdownConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,

    /// Host address to bind to.
    pub host: String,
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File written by `POST /readme/{id}/file`.
    pub path: String,
}

/// Markdown rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Languages allowed in code fences.
    pub code_languages: Vec<String>,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: "/tmp/readme.md".to_string(),
        }
    }
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            code_languages: DEFAULT_CODE_LANGUAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MarkdownConfig {
    /// The allow-list built from `code_languages`.
    pub fn languages(&self) -> CodeLanguages {
        CodeLanguages::new(self.code_languages.iter().cloned())
    }
}

// ============================================================================
// Config loading
// ============================================================================

/// Comma-separated override for `markdown.code_languages`.
pub const CODE_LANGUAGES_ENV: &str = "README_BUILDER_MARKDOWN_CODE_LANGUAGES";

/// Split a comma-separated language list, dropping blank entries.
pub fn parse_language_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl ReadmeConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("README_BUILDER");
        env_opts.add_section("server");
        env_opts.add_section("export");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let mut config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        // confyg hands env values over as plain strings, so lists are split here.
        if let Ok(raw) = std::env::var(CODE_LANGUAGES_ENV) {
            let languages = parse_language_list(&raw);
            if languages.is_empty() {
                tracing::warn!(var = CODE_LANGUAGES_ENV, "ignoring empty language list");
            } else {
                config.markdown.code_languages = languages;
            }
        }

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("README_BUILDER_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("readme-builder").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Path written by exports.
    pub fn export_path(&self) -> PathBuf {
        PathBuf::from(&self.export.path)
    }
}

// ============================================================================
// Tests
// ============================================================================
