// CaseDesk - core/dataset.rs
//
// Record-set parsing and validation, plus the built-in sample cases.
// Core layer: accepts JSON strings, never touches the filesystem.
// I/O is handled by app::store which feeds content here.

use crate::core::model::CaseRecord;
use crate::util::constants;
use crate::util::error::DatasetError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Embedded sample record set (the demo data shown on first launch).
const SAMPLE_CASES_JSON: &str = include_str!("../../data/sample_cases.json");

/// Parse and validate a JSON array of case records.
///
/// `path` is used only for error context. Rejects duplicate ids and
/// oversized record sets; record order is preserved exactly.
pub fn parse_cases(content: &str, path: &Path) -> Result<Vec<CaseRecord>, DatasetError> {
    let records: Vec<CaseRecord> =
        serde_json::from_str(content).map_err(|e| DatasetError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    check_records(&records, path, constants::MAX_RECORDS)?;

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "Parsed case records"
    );

    Ok(records)
}

/// Reject record sets over `max_records` or with repeated ids.
fn check_records(
    records: &[CaseRecord],
    path: &Path,
    max_records: usize,
) -> Result<(), DatasetError> {
    if records.len() > max_records {
        return Err(DatasetError::TooManyRecords {
            count: records.len(),
            max: max_records,
        });
    }

    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(DatasetError::DuplicateId {
                id: record.id,
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Load the built-in sample cases.
///
/// A failure here is a bug in the embedded asset; it is logged and an
/// empty record set is returned so the caller still starts.
pub fn load_sample_cases() -> Vec<CaseRecord> {
    let path = PathBuf::from("<builtin>/sample_cases.json");
    match parse_cases(SAMPLE_CASES_JSON, &path) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load built-in sample cases");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ApplicationType, CaseStatus};

    #[test]
    fn test_sample_cases_load() {
        let records = load_sample_cases();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].application_number, "TM-2025-001");
        assert_eq!(records[3].status, CaseStatus::UnderReview);
        assert_eq!(records[2].application_type, ApplicationType::Copyright);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": 7, "applicationNumber": "A", "clientName": "a", "clientEmail": "a@x",
             "clientPhone": "", "applicationType": "Patent", "applicationDate": "2025-01-01",
             "status": "Active", "nextDeadline": "2025-02-01"},
            {"id": 7, "applicationNumber": "B", "clientName": "b", "clientEmail": "b@x",
             "clientPhone": "", "applicationType": "Patent", "applicationDate": "2025-01-02",
             "status": "Active", "nextDeadline": "2025-02-02"}
        ]"#;
        let result = parse_cases(json, Path::new("dup.json"));
        assert!(matches!(result, Err(DatasetError::DuplicateId { id: 7, .. })));
    }

    #[test]
    fn test_record_count_limit() {
        let records = load_sample_cases();
        let path = Path::new("many.json");

        let result = check_records(&records, path, 4);
        assert!(
            matches!(result, Err(DatasetError::TooManyRecords { count: 5, max: 4 })),
            "expected TooManyRecords, got {result:?}"
        );
        assert!(check_records(&records, path, 5).is_ok());
    }

    #[test]
    fn test_invalid_json_rejected() {
        let result = parse_cases("{ not json", Path::new("bad.json"));
        assert!(matches!(result, Err(DatasetError::JsonParse { .. })));
    }

    #[test]
    fn test_bad_record_date_rejected() {
        let json = r#"[
            {"id": 1, "applicationNumber": "A", "clientName": "a", "clientEmail": "a@x",
             "clientPhone": "", "applicationType": "Patent", "applicationDate": "Jan 1",
             "status": "Active", "nextDeadline": "2025-02-01"}
        ]"#;
        assert!(parse_cases(json, Path::new("date.json")).is_err());
    }
}
