// CaseDesk - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CaseDesk";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CaseDesk";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Dataset limits
// =============================================================================

/// Maximum size of a record-set JSON file accepted from disk.
pub const MAX_DATASET_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MB

/// Maximum number of records accepted in a single record set.
pub const MAX_RECORDS: usize = 100_000;

/// Date format used for every calendar date the crate reads or prints.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Dashboard summary
// =============================================================================

/// Number of upcoming deadlines listed in the summary by default.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Minimum value accepted for `[dashboard] upcoming_limit`.
pub const MIN_UPCOMING_LIMIT: usize = 1;

/// Maximum value accepted for `[dashboard] upcoming_limit`.
pub const MAX_UPCOMING_LIMIT: usize = 100;

// =============================================================================
// Interactive session
// =============================================================================

/// Prompt printed before each interactive command.
pub const PROMPT: &str = "casedesk> ";

/// Maximum length of a single interactive command line. Longer lines are
/// rejected rather than parsed.
pub const MAX_COMMAND_LENGTH: usize = 4_096;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// File names
// =============================================================================

/// Name of the configuration file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
