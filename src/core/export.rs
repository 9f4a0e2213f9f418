// CaseDesk - core/export.rs
//
// CSV, JSON and plain-text table rendering of the visible case list.
// Core layer: writes to any Write trait object.

use crate::core::model::CaseRecord;
use crate::util::error::ExportError;
use std::io::Write;

/// Column headers shared by the CSV and table renderers.
const COLUMNS: [&str; 9] = [
    "id",
    "application_number",
    "client_name",
    "client_email",
    "client_phone",
    "application_type",
    "application_date",
    "status",
    "next_deadline",
];

/// Export records to CSV format, header row first.
pub fn export_csv<W: Write>(records: &[&CaseRecord], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(COLUMNS)
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for record in records {
        csv_writer
            .write_record([
                record.id.to_string().as_str(),
                record.application_number.as_str(),
                record.client_name.as_str(),
                record.client_email.as_str(),
                record.client_phone.as_str(),
                record.application_type.label(),
                record.application_date.to_string().as_str(),
                record.status.label(),
                record.next_deadline.to_string().as_str(),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(io_err)?;

    Ok(count)
}

/// Export records to JSON format (array of objects, camelCase fields).
pub fn export_json<W: Write>(records: &[&CaseRecord], writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json { source: e })?;
    Ok(records.len())
}

/// Write a compact fixed-width table for terminal display.
///
/// The record whose id equals `expanded` is followed by an indented detail
/// block with contact details and filing date.
pub fn write_table<W: Write>(
    records: &[&CaseRecord],
    expanded: Option<u64>,
    mut writer: W,
) -> Result<usize, ExportError> {
    writeln!(
        writer,
        "{:>4}  {:<12}  {:<22}  {:<13}  {:<12}  {:<10}",
        "ID", "NUMBER", "CLIENT", "TYPE", "STATUS", "DEADLINE"
    )
    .map_err(io_err)?;

    for record in records {
        let marker = if expanded == Some(record.id) { 'v' } else { '>' };
        writeln!(
            writer,
            "{marker}{:>3}  {:<12}  {:<22}  {:<13}  {:<12}  {}",
            record.id,
            record.application_number,
            truncate(&record.client_name, 22),
            record.application_type.label(),
            record.status.label(),
            record.next_deadline,
        )
        .map_err(io_err)?;

        if expanded == Some(record.id) {
            writeln!(writer, "      Client:   {}", record.client_name).map_err(io_err)?;
            writeln!(writer, "      Email:    {}", record.client_email).map_err(io_err)?;
            writeln!(writer, "      Phone:    {}", record.client_phone).map_err(io_err)?;
            writeln!(
                writer,
                "      Filed:    {} ({})",
                record.application_date,
                record.application_type.label()
            )
            .map_err(io_err)?;
            writeln!(writer, "      Deadline: {}", record.next_deadline).map_err(io_err)?;
        }
    }

    Ok(records.len())
}

fn io_err(source: std::io::Error) -> ExportError {
    ExportError::Io { source }
}

/// Shorten `s` to at most `max` characters, marking the cut with "~".
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('~');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::load_sample_cases;

    #[test]
    fn test_csv_export() {
        let records = load_sample_cases();
        let visible: Vec<&CaseRecord> = records.iter().take(2).collect();
        let mut buf = Vec::new();
        let count = export_csv(&visible, &mut buf).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("id,application_number,client_name"));
        assert!(output.contains("TM-2025-001"));
        assert!(output.contains("Jane Wilson"));
        assert!(!output.contains("Media Studios"));
    }

    #[test]
    fn test_json_export() {
        let records = load_sample_cases();
        let visible: Vec<&CaseRecord> = records.iter().filter(|r| r.id == 4).collect();
        let mut buf = Vec::new();
        let count = export_json(&visible, &mut buf).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"clientName\": \"TechFirm Inc\""));
        assert!(output.contains("\"status\": \"Under Review\""));
    }

    #[test]
    fn test_table_expands_selected_record_only() {
        let records = load_sample_cases();
        let visible: Vec<&CaseRecord> = records.iter().collect();
        let mut buf = Vec::new();
        write_table(&visible, Some(2), &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("jwilson@example.com"));
        assert!(!output.contains("contact@smithcorp.com"));
        assert_eq!(output.lines().count(), 1 + 5 + 5);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd~");
    }
}
