// CaseDesk - core/filter.rs
//
// Composable filter engine for case records.
// Free-text search and all applied criteria are AND-combined.
// Core layer: pure logic, no I/O or presentation dependencies.

use crate::core::model::CaseRecord;
use crate::util::constants::DATE_FORMAT;
use chrono::NaiveDate;

/// One set of structural filter selections.
///
/// Values are kept as the raw strings a filter control produces; an empty
/// string means "no constraint on this dimension". Dates are parsed only at
/// match time so a half-typed or malformed date never blocks editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Application type label to match (case-insensitive equality).
    pub application_type: String,

    /// Status label to match (case-insensitive equality).
    pub status: String,

    /// Lower bound on application date, `YYYY-MM-DD`, inclusive.
    pub start_date: String,

    /// Upper bound on application date, `YYYY-MM-DD`, inclusive.
    pub end_date: String,
}

/// Names one field of `FilterCriteria`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    ApplicationType,
    Status,
    StartDate,
    EndDate,
}

impl FilterField {
    /// All fields in display order.
    pub fn all() -> &'static [FilterField] {
        &[
            FilterField::ApplicationType,
            FilterField::Status,
            FilterField::StartDate,
            FilterField::EndDate,
        ]
    }

    /// Resolve a field from its short or long name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "type" | "applicationtype" | "application_type" => Some(FilterField::ApplicationType),
            "status" => Some(FilterField::Status),
            "from" | "start" | "startdate" | "start_date" => Some(FilterField::StartDate),
            "to" | "end" | "enddate" | "end_date" => Some(FilterField::EndDate),
            _ => None,
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::ApplicationType => "type",
            FilterField::Status => "status",
            FilterField::StartDate => "from",
            FilterField::EndDate => "to",
        }
    }
}

impl FilterCriteria {
    /// Returns true if no field carries a constraint.
    pub fn is_empty(&self) -> bool {
        self.application_type.is_empty()
            && self.status.is_empty()
            && self.start_date.is_empty()
            && self.end_date.is_empty()
    }

    /// Read one field.
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::ApplicationType => &self.application_type,
            FilterField::Status => &self.status,
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
        }
    }

    /// Overwrite one field.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::ApplicationType => self.application_type = value,
            FilterField::Status => self.status = value,
            FilterField::StartDate => self.start_date = value,
            FilterField::EndDate => self.end_date = value,
        }
    }

    /// Parsed lower date bound. Malformed input yields None (no constraint).
    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    /// Parsed upper date bound. Malformed input yields None (no constraint).
    pub fn end(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }
}

/// Parse a `YYYY-MM-DD` date, treating blank or malformed input as absent.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!(raw = trimmed, error = %e, "Ignoring malformed date bound");
            None
        }
    }
}

/// Case folding shared by query and field values.
fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Returns true when the search string or any applied field constrains the
/// view. When false, the view shows the full record set verbatim.
pub fn is_filtering_active(search: &str, applied: &FilterCriteria) -> bool {
    // Whitespace-only search counts as inactive, so an empty set reads as NoRecords.
    !search.trim().is_empty() || !applied.is_empty()
}

/// Apply search and criteria to a slice of records, returning indices of
/// matching records in their original order.
pub fn compute_visible_indices(
    records: &[CaseRecord],
    search: &str,
    applied: &FilterCriteria,
) -> Vec<usize> {
    if !is_filtering_active(search, applied) {
        return (0..records.len()).collect();
    }

    let matcher = Matcher::new(search, applied);

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matcher.matches(record))
        .map(|(idx, _)| idx)
        .collect()
}

/// Apply search and criteria to a slice of records, returning the matching
/// records in their original order.
pub fn compute_visible<'a>(
    records: &'a [CaseRecord],
    search: &str,
    applied: &FilterCriteria,
) -> Vec<&'a CaseRecord> {
    compute_visible_indices(records, search, applied)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

/// Pre-folded predicate inputs, built once per recompute.
struct Matcher {
    query: String,
    application_type: String,
    status: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl Matcher {
    fn new(search: &str, applied: &FilterCriteria) -> Self {
        Self {
            query: fold(search.trim()),
            application_type: fold(&applied.application_type),
            status: fold(&applied.status),
            start: applied.start(),
            end: applied.end(),
        }
    }

    /// Check if a single record matches every active predicate.
    fn matches(&self, record: &CaseRecord) -> bool {
        // Free-text search (OR across searchable fields)
        if !self.query.is_empty() {
            let hit = [
                record.application_number.as_str(),
                record.client_name.as_str(),
                record.client_email.as_str(),
                record.application_type.label(),
            ]
            .iter()
            .any(|field| fold(field).contains(&self.query));
            if !hit {
                return false;
            }
        }

        if !self.application_type.is_empty()
            && fold(record.application_type.label()) != self.application_type
        {
            return false;
        }

        if !self.status.is_empty() && fold(record.status.label()) != self.status {
            return false;
        }

        // Date range, inclusive on both ends
        if let Some(start) = self.start {
            if record.application_date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if record.application_date > end {
                return false;
            }
        }

        true
    }
}
