// CaseDesk - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for CaseDesk configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/casedesk/ or %APPDATA%\CaseDesk\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[filters]` section.
    pub filters: FiltersSection,
    /// `[dashboard]` section.
    pub dashboard: DashboardSection,
    /// `[data]` section.
    pub data: DataSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[filters]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct FiltersSection {
    /// "staged" (explicit apply) or "auto" (apply on every edit).
    pub apply_mode: Option<String>,
}

/// `[dashboard]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DashboardSection {
    /// Number of upcoming deadlines in the summary.
    pub upcoming_limit: Option<usize>,
}

/// `[data]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// JSON record set loaded when --input is not given.
    pub input_file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// True for `apply_mode = "auto"`: filter edits apply without an
    /// explicit apply step.
    pub auto_apply: bool,
    /// Number of upcoming deadlines in the summary.
    pub upcoming_limit: usize,
    /// Default record-set file.
    pub input_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            auto_apply: false,
            upcoming_limit: constants::DEFAULT_UPCOMING_LIMIT,
            input_file: None,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unparseable, returns defaults with a warning; the
/// application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Validate each field against named constants, accumulating all problems.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Filters: apply_mode --
    if let Some(ref mode) = raw.filters.apply_mode {
        match mode.to_lowercase().as_str() {
            "staged" => config.auto_apply = false,
            "auto" => config.auto_apply = true,
            other => {
                warnings.push(format!(
                    "[filters] apply_mode = \"{other}\" is not recognised. \
                     Expected \"staged\" or \"auto\". Using default (staged).",
                ));
            }
        }
    }

    // -- Dashboard: upcoming_limit --
    if let Some(limit) = raw.dashboard.upcoming_limit {
        if (constants::MIN_UPCOMING_LIMIT..=constants::MAX_UPCOMING_LIMIT).contains(&limit) {
            config.upcoming_limit = limit;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[dashboard] upcoming_limit".to_string(),
                value: limit.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_UPCOMING_LIMIT,
                    constants::MAX_UPCOMING_LIMIT
                ),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_UPCOMING_LIMIT
            ));
        }
    }

    // -- Data: input_file --
    if let Some(ref file) = raw.data.input_file {
        if !file.trim().is_empty() {
            config.input_file = Some(PathBuf::from(file));
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("nope.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config() {
        let (_dir, path) = write_config(
            r#"
            [logging]
            level = "DEBUG"
            [filters]
            apply_mode = "auto"
            [dashboard]
            upcoming_limit = 3
            [data]
            input_file = "cases.json"
            [future_section]
            ignored = true
            "#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.auto_apply);
        assert_eq!(config.upcoming_limit, 3);
        assert_eq!(config.input_file, Some(PathBuf::from("cases.json")));
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let (_dir, path) = write_config(
            r#"
            [logging]
            level = "loud"
            [filters]
            apply_mode = "sometimes"
            [dashboard]
            upcoming_limit = 0
            "#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 3);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unparseable_file_warns() {
        let (_dir, path) = write_config("[filters\napply_mode = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }
}
