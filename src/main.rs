// CaseDesk - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation (debug mode support)
// 3. Record-set loading (built-in sample or JSON file)
// 4. One-shot filtering or the interactive command session

mod cli;

use casedesk::app::state::{ApplyMode, CaseListState};
use casedesk::app::store::CaseStore;
use casedesk::core::filter::{self, FilterField};
use casedesk::platform::config::{self, AppConfig, PlatformPaths};
use casedesk::util;
use chrono::NaiveDate;
use clap::Parser;
use cli::{OutputFormat, RenderOptions};
use std::path::PathBuf;

/// CaseDesk - search and filter IP case records.
///
/// Loads a case list, applies the given search and filters, and prints the
/// matching cases. Use --interactive to stage and apply filters step by step.
#[derive(Parser, Debug)]
#[command(name = "casedesk", version, about)]
struct Cli {
    /// JSON file containing an array of case records (built-in sample if omitted).
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Free-text search over number, client name, email and type.
    #[arg(short = 's', long = "search")]
    search: Option<String>,

    /// Application type filter (e.g. Trademark, Patent, Copyright).
    #[arg(short = 't', long = "type")]
    application_type: Option<String>,

    /// Status filter (e.g. Active, Pending, "Under Review").
    #[arg(long = "status")]
    status: Option<String>,

    /// Earliest application date, inclusive (YYYY-MM-DD).
    #[arg(long = "from")]
    from: Option<String>,

    /// Latest application date, inclusive (YYYY-MM-DD).
    #[arg(long = "to")]
    to: Option<String>,

    /// Output format for the case list.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print status/type counts and upcoming deadlines instead of the list.
    #[arg(long = "summary")]
    summary: bool,

    /// Reference date for upcoming deadlines (defaults to today).
    #[arg(long = "today")]
    today: Option<String>,

    /// Read commands from stdin (type 'help' for the list).
    #[arg(long = "interactive")]
    interactive: bool,

    /// Apply filter edits immediately instead of waiting for 'apply'.
    #[arg(long = "auto-apply")]
    auto_apply: bool,

    /// Explicit config.toml path (platform config directory if omitted).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config first so its log level can seed the subscriber
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (app_config, config_warnings) = config::load_config(&config_path);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "CaseDesk starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    if let Err(e) = run(&cli, &app_config) {
        tracing::error!(error = %e, "CaseDesk failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Load the record set, apply the command-line filters and produce output.
fn run(cli: &Cli, app_config: &AppConfig) -> util::error::Result<()> {
    let input = cli.input.clone().or_else(|| app_config.input_file.clone());
    let store = match input {
        Some(ref path) => CaseStore::load_file(path)?,
        None => CaseStore::sample(),
    };

    let apply_mode = if cli.auto_apply || app_config.auto_apply {
        ApplyMode::Auto
    } else {
        ApplyMode::Staged
    };

    let options = RenderOptions {
        format: cli.format,
        today: resolve_today(cli.today.as_deref()),
        upcoming_limit: app_config.upcoming_limit,
    };

    let mut state = CaseListState::new(store, apply_mode);

    if let Some(ref query) = cli.search {
        state.set_search(query.as_str());
    }
    let staged = [
        (FilterField::ApplicationType, &cli.application_type),
        (FilterField::Status, &cli.status),
        (FilterField::StartDate, &cli.from),
        (FilterField::EndDate, &cli.to),
    ];
    for (field, value) in staged {
        if let Some(value) = value {
            state.set_staged_field(field, value.as_str());
        }
    }
    state.apply_filters();

    let stdout = std::io::stdout();
    if cli.interactive {
        let stdin = std::io::stdin();
        cli::run_session(&mut state, stdin.lock(), stdout.lock(), options)
    } else if cli.summary {
        cli::render_summary(&state, options.today, options.upcoming_limit, stdout.lock())?;
        Ok(())
    } else {
        cli::render_list(&state, options.format, stdout.lock())?;
        Ok(())
    }
}

/// Reference date for upcoming deadlines. A malformed `--today` is
/// reported and replaced by the local date.
fn resolve_today(raw: Option<&str>) -> NaiveDate {
    let today = chrono::Local::now().date_naive();
    match raw {
        None => today,
        Some(raw) => filter::parse_date(raw).unwrap_or_else(|| {
            tracing::warn!(
                value = raw,
                expected = util::constants::DATE_FORMAT,
                "--today is not a valid date. Using the current date."
            );
            today
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedesk::util::error::{CaseDeskError, DatasetError};

    #[test]
    fn test_resolve_today() {
        assert_eq!(
            resolve_today(Some("2025-03-01")),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert_eq!(resolve_today(Some("March 1st")), chrono::Local::now().date_naive());
        assert_eq!(resolve_today(None), chrono::Local::now().date_naive());
    }

    #[test]
    fn test_missing_input_file_is_dataset_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let cli = Cli::try_parse_from(["casedesk", "--input", missing.to_str().unwrap()]).unwrap();

        let result = run(&cli, &AppConfig::default());
        assert!(
            matches!(result, Err(CaseDeskError::Dataset(DatasetError::Io { .. }))),
            "expected a dataset I/O error, got {result:?}"
        );
    }
}
