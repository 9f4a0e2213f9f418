// CaseDesk - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Filtering itself never fails; these cover loading, export, config,
// and interactive command parsing. Config and command errors are
// reported as warnings or session messages, never propagated as fatal.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CaseDesk operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CaseDeskError {
    /// Record-set loading or validation failed.
    Dataset(DatasetError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for CaseDeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dataset(e) => write!(f, "Dataset error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CaseDeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dataset(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset errors
// ---------------------------------------------------------------------------

/// Errors related to loading a record set.
#[derive(Debug)]
pub enum DatasetError {
    /// JSON could not be parsed into case records.
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Two records share the same id.
    DuplicateId { id: u64, path: PathBuf },

    /// Record-set file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Record set contains more records than allowed.
    TooManyRecords { count: usize, max: usize },

    /// No id is left above the highest one in use.
    IdSpaceExhausted { max_id: u64 },

    /// I/O error reading the record-set file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonParse { path, source } => {
                write!(f, "Failed to parse cases '{}': {source}", path.display())
            }
            Self::DuplicateId { id, path } => {
                write!(f, "Duplicate case id {id} in '{}'", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Case file '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::TooManyRecords { count, max } => {
                write!(f, "Too many case records ({count}), maximum is {max}")
            }
            Self::IdSpaceExhausted { max_id } => {
                write!(f, "Cannot assign a new case id above {max_id}")
            }
            Self::Io { path, source } => {
                write!(f, "I/O error reading cases '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::JsonParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DatasetError> for CaseDeskError {
    fn from(e: DatasetError) -> Self {
        Self::Dataset(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export output.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Export I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ExportError> for CaseDeskError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Command errors
// ---------------------------------------------------------------------------

/// Errors produced while parsing an interactive command line.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    UnknownCommand { name: String },

    /// A command was given without a required argument.
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// `set`/`unset` named a field that does not exist.
    UnknownField { name: String },

    /// `toggle` was given something that is not a record id.
    InvalidId { raw: String },

    /// The command line exceeds the maximum accepted length.
    TooLong { length: usize, max: usize },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { name } => {
                write!(f, "Unknown command '{name}'. Type 'help' for a list.")
            }
            Self::MissingArgument { command, argument } => {
                write!(f, "'{command}' requires <{argument}>")
            }
            Self::UnknownField { name } => write!(
                f,
                "Unknown filter field '{name}'. Expected type, status, from or to."
            ),
            Self::InvalidId { raw } => write!(f, "'{raw}' is not a valid case id"),
            Self::TooLong { length, max } => {
                write!(f, "Command is {length} chars, exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Convenience type alias for CaseDesk results.
pub type Result<T> = std::result::Result<T, CaseDeskError>;
