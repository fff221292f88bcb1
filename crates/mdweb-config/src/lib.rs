//! Configuration management for mdweb.
//!
//! Parses `mdweb.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`]; they take
//! precedence over file values. The bind host and port are deliberately
//! not part of the file — they always come from the command line.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdweb.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded
/// config; `excludes` is additive.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown source directory.
    pub source_dir: Option<PathBuf>,
    /// Override static folder name.
    pub static_dir: Option<String>,
    /// Override static base URL.
    pub static_url: Option<String>,
    /// Extra names to exclude from rendering and linking.
    pub excludes: Vec<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    source_dir: Option<String>,
    static_dir: Option<String>,
    static_url: Option<String>,
    excludes: Option<Vec<String>>,
}

/// Resolved site configuration with absolute paths.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Directory containing the markdown tree.
    pub source_dir: PathBuf,
    /// Static folder name under the source directory.
    pub static_dir: String,
    /// Base URL substituted for the static placeholder and used to serve
    /// assets. Either a root-relative path or an absolute http(s) URL.
    pub static_url: String,
    /// Names hidden from rendering and linking, on top of the built-in
    /// defaults.
    pub excludes: Vec<String>,
}

impl SiteConfig {
    /// Filesystem path of the static folder.
    #[must_use]
    pub fn static_dir_path(&self) -> PathBuf {
        self.source_dir.join(&self.static_dir)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            static_dir: "static".to_owned(),
            static_url: "/static".to_owned(),
            excludes: Vec::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `mdweb.toml` in the current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution, so CLI
    /// arguments take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, parsing
    /// fails, or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.site_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(static_dir) = &settings.static_dir {
            self.site_resolved.static_dir.clone_from(static_dir);
        }
        if let Some(static_url) = &settings.static_url {
            self.site_resolved.static_url.clone_from(static_url);
        }
        self.site_resolved
            .excludes
            .extend(settings.excludes.iter().cloned());
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            site_resolved: SiteConfig {
                source_dir: base.to_path_buf(),
                ..SiteConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Resolve raw string settings into `site_resolved`.
    ///
    /// Relative paths are resolved against the config file's directory;
    /// tilde paths are expanded.
    fn resolve_paths(&mut self, base: &Path) {
        let defaults = SiteConfig::default();

        let source_dir = match &self.site.source_dir {
            Some(raw) => {
                let expanded = shellexpand::tilde(raw);
                let path = Path::new(expanded.as_ref());
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    base.join(path)
                }
            }
            None => base.to_path_buf(),
        };

        self.site_resolved = SiteConfig {
            source_dir,
            static_dir: self
                .site
                .static_dir
                .clone()
                .unwrap_or(defaults.static_dir),
            static_url: self
                .site
                .static_url
                .clone()
                .unwrap_or(defaults.static_url),
            excludes: self.site.excludes.clone().unwrap_or_default(),
        };
    }

    /// Validate configuration values.
    ///
    /// The static base URL is the one piece whose failure must refuse
    /// startup: every rendered page embeds it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site_resolved.static_dir, "site.static_dir")?;
        if self.site_resolved.static_dir.contains('/') {
            return Err(ConfigError::Validation(
                "site.static_dir must be a plain folder name".to_owned(),
            ));
        }

        let url = &self.site_resolved.static_url;
        require_non_empty(url, "site.static_url")?;
        let valid = url.starts_with('/')
            || url.starts_with("http://")
            || url.starts_with("https://");
        if !valid {
            return Err(ConfigError::Validation(
                "site.static_url must be root-relative or an absolute http(s) URL".to_owned(),
            ));
        }

        Ok(())
    }
}
