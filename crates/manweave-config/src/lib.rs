//! Configuration management for manweave.
//!
//! Parses `manweave.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Profiles
//!
//! The `[filter]` table selects the profile used by `filter` and `build`.
//! Besides the built-in `man` and `legacy` profiles, `[profiles.<name>]`
//! tables declare custom ones. A custom profile starts from the built-in
//! profile named by `extends` (or `man`) and overrides any of its fields:
//!
//! ```toml
//! [filter]
//! profile = "lenient"
//!
//! [profiles.lenient]
//! extends = "legacy"
//! filters = ["blank-includes", "promote-sections", "flatten-links"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use manweave_filter::{FilterKind, Profile};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the selected profile.
    pub profile: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "manweave.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Filter chain configuration.
    pub filter: FilterConfig,
    /// Custom profiles by name.
    pub profiles: BTreeMap<String, ProfileConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Filter chain configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Name of the profile to apply.
    pub profile: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            profile: Profile::DEFAULT.to_owned(),
        }
    }
}

/// Custom profile as written in TOML.
///
/// Unset fields are taken from the extended built-in profile.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    /// Built-in profile to start from.
    pub extends: Option<String>,
    /// Section names promoted to top level (matched case-insensitively).
    pub sections: Option<Vec<String>>,
    /// Passes to run, in order.
    pub filters: Option<Vec<FilterKind>>,
    /// Heading-id prefix of version-conditional headings.
    pub version_prefix: Option<String>,
    /// Code-span prefix of command names in the Name section.
    pub command_prefix: Option<String>,
    /// Callout markers to strip.
    pub admonitions: Option<Vec<String>>,
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
fn require_non_empty(value: Option<&str>, field: &str) -> Result<(), ConfigError> {
    if value.is_some_and(str::is_empty) {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `manweave.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
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
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(profile) = &settings.profile {
            self.filter.profile.clone_from(profile);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        discover_config_from(current)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that every custom profile resolves and that the selected
    /// profile exists. Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.profiles.keys() {
            self.resolve_profile(name)?;
        }
        self.profile()?;
        Ok(())
    }

    /// The selected profile, resolved.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the profile is unknown or invalid.
    pub fn profile(&self) -> Result<Profile, ConfigError> {
        self.resolve_profile(&self.filter.profile)
    }

    /// Resolve a profile by name.
    ///
    /// Custom profiles take precedence over built-in profiles of the same
    /// name, and a custom profile named after a built-in one extends it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the profile is unknown, extends
    /// an unknown profile, or has invalid fields.
    pub fn resolve_profile(&self, name: &str) -> Result<Profile, ConfigError> {
        let Some(custom) = self.profiles.get(name) else {
            return Profile::builtin(name).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "unknown profile '{name}' (built-in profiles: {})",
                    Profile::BUILTIN.join(", ")
                ))
            });
        };

        let field = |key: &str| format!("profiles.{name}.{key}");
        let base_name = custom.extends.as_deref().unwrap_or_else(|| {
            if Profile::builtin(name).is_some() {
                name
            } else {
                Profile::DEFAULT
            }
        });
        let mut profile = Profile::builtin(base_name).ok_or_else(|| {
            ConfigError::Validation(format!(
                "{} must name a built-in profile, got '{base_name}'",
                field("extends")
            ))
        })?;
        profile.name = name.to_owned();

        if custom.filters.as_ref().is_some_and(Vec::is_empty) {
            return Err(ConfigError::Validation(format!(
                "{} must list at least one filter",
                field("filters")
            )));
        }
        require_non_empty(custom.version_prefix.as_deref(), &field("version_prefix"))?;
        require_non_empty(custom.command_prefix.as_deref(), &field("command_prefix"))?;

        if let Some(sections) = &custom.sections {
            profile.sections = sections.iter().map(|s| s.trim().to_lowercase()).collect();
        }
        if let Some(filters) = &custom.filters {
            profile.filters.clone_from(filters);
        }
        if let Some(prefix) = &custom.version_prefix {
            profile.version_prefix.clone_from(prefix);
        }
        if let Some(prefix) = &custom.command_prefix {
            profile.command_prefix.clone_from(prefix);
        }
        if let Some(admonitions) = &custom.admonitions {
            profile.admonitions.clone_from(admonitions);
        }

        Ok(profile)
    }
}

/// Search `start` and its parents for the config file.
fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
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
