// CaseDesk - cli.rs
//
// Terminal front-end: renders the case list, the filter panel and the
// dashboard summary, and runs the interactive command session.
// Binary-side only; the library knows nothing about terminals.

use casedesk::app::commands::{self, Effect};
use casedesk::app::state::{ApplyMode, CaseListState, ListDisplay};
use casedesk::core::export;
use casedesk::core::filter::FilterField;
use casedesk::core::summary;
use casedesk::util::constants;
use casedesk::util::error::{CaseDeskError, ExportError};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// Output format for the case list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Settings the renderers need beyond the case-list state.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub today: NaiveDate,
    pub upcoming_limit: usize,
}

fn io_err(source: std::io::Error) -> ExportError {
    ExportError::Io { source }
}

/// Print the visible list in the requested format.
///
/// CSV and JSON always emit a (possibly empty) document; the table shows the
/// matching empty-state message instead of an empty table.
pub fn render_list<W: Write>(
    state: &CaseListState,
    format: OutputFormat,
    mut out: W,
) -> Result<(), ExportError> {
    let visible = state.visible();
    match format {
        OutputFormat::Csv => {
            export::export_csv(&visible, out)?;
        }
        OutputFormat::Json => {
            export::export_json(&visible, &mut out)?;
            writeln!(out).map_err(io_err)?;
        }
        OutputFormat::Table => match state.display() {
            ListDisplay::Records => {
                export::write_table(&visible, state.selected_id(), &mut out)?;
                writeln!(
                    out,
                    "{} of {} cases{}",
                    visible.len(),
                    state.records().len(),
                    if state.is_filtering_active() { " (filtered)" } else { "" }
                )
                .map_err(io_err)?;
            }
            ListDisplay::NoMatches => {
                if let Some(msg) = ListDisplay::NoMatches.message() {
                    writeln!(out, "{msg}").map_err(io_err)?;
                }
                writeln!(out, "Type 'reset' to clear the search and all filters.")
                    .map_err(io_err)?;
            }
            ListDisplay::NoRecords => {
                if let Some(msg) = ListDisplay::NoRecords.message() {
                    writeln!(out, "{msg}").map_err(io_err)?;
                }
            }
        },
    }
    Ok(())
}

/// Print staged and applied filter values side by side.
pub fn render_filters<W: Write>(state: &CaseListState, mut out: W) -> Result<(), ExportError> {
    let show = |v: &str| if v.is_empty() { "-".to_string() } else { v.to_string() };

    writeln!(out, "{:<8}  {:<16}  {:<16}", "FIELD", "STAGED", "APPLIED").map_err(io_err)?;
    for field in FilterField::all() {
        writeln!(
            out,
            "{:<8}  {:<16}  {:<16}",
            field.label(),
            show(state.staged().get(*field)),
            show(state.applied().get(*field)),
        )
        .map_err(io_err)?;
    }
    writeln!(out, "search    {}", show(state.search())).map_err(io_err)?;
    if state.apply_mode() == ApplyMode::Staged && state.has_pending_changes() {
        writeln!(out, "Staged changes pending. Type 'apply' to use them.").map_err(io_err)?;
    }
    Ok(())
}

/// Print status/type counts and upcoming deadlines for the visible list.
pub fn render_summary<W: Write>(
    state: &CaseListState,
    today: NaiveDate,
    upcoming_limit: usize,
    mut out: W,
) -> Result<(), ExportError> {
    let visible = state.visible();
    let summary = summary::summarise(visible.iter().copied(), today, upcoming_limit);

    writeln!(out, "Cases: {}", summary.total).map_err(io_err)?;
    writeln!(out, "By status:").map_err(io_err)?;
    for (status, count) in &summary.by_status {
        writeln!(out, "  {:<14} {count}", status.label()).map_err(io_err)?;
    }
    writeln!(out, "By type:").map_err(io_err)?;
    for (application_type, count) in &summary.by_type {
        writeln!(out, "  {:<14} {count}", application_type.label()).map_err(io_err)?;
    }
    writeln!(out, "Upcoming deadlines (from {today}):").map_err(io_err)?;
    if summary.upcoming.is_empty() {
        writeln!(out, "  none").map_err(io_err)?;
    }
    for item in &summary.upcoming {
        writeln!(
            out,
            "  {}  {:<12}  {}  ({})",
            item.deadline,
            item.application_number,
            item.client_name,
            item.application_type.label()
        )
        .map_err(io_err)?;
    }
    Ok(())
}

/// Render whatever `effect` asks for.
fn render_effect<W: Write>(
    state: &CaseListState,
    effect: Effect,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), ExportError> {
    match effect {
        Effect::List => render_list(state, options.format, &mut *out),
        Effect::Filters => render_filters(state, &mut *out),
        Effect::Summary => render_summary(state, options.today, options.upcoming_limit, &mut *out),
        Effect::Help => writeln!(out, "{}", commands::HELP).map_err(io_err),
        Effect::Quit => Ok(()),
    }
}

/// Run the interactive session until `quit` or end of input.
///
/// Command errors are printed and the session continues; only output
/// failures end it early.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut CaseListState,
    input: R,
    mut out: W,
    options: RenderOptions,
) -> Result<(), CaseDeskError> {
    tracing::info!(mode = ?state.apply_mode(), "Interactive session started");
    render_list(state, options.format, &mut out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", constants::PROMPT).map_err(io_err)?;
        out.flush().map_err(io_err)?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                return Err(CaseDeskError::Io {
                    path: "<stdin>".into(),
                    operation: "read command",
                    source: e,
                })
            }
            None => break,
        };

        match commands::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                let effect = commands::execute(state, command);
                if effect == Effect::Quit {
                    break;
                }
                render_effect(state, effect, options, &mut out)?;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected command");
                writeln!(out, "{e}").map_err(io_err)?;
            }
        }
    }

    writeln!(out).map_err(io_err)?;
    tracing::info!("Interactive session ended");
    Ok(())
}
