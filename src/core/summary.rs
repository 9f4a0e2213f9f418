// CaseDesk - core/summary.rs
//
// Dashboard-style aggregate over a record set: counts by status and by
// application type, and the nearest upcoming deadlines.

use crate::core::model::{ApplicationType, CaseRecord, CaseStatus};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Summary statistics for a record set.
#[derive(Debug, Clone, Default)]
pub struct CaseSummary {
    /// Total records summarised.
    pub total: usize,

    /// Records by status.
    pub by_status: BTreeMap<CaseStatus, usize>,

    /// Records by application type.
    pub by_type: BTreeMap<ApplicationType, usize>,

    /// Deadlines on or after the reference date, soonest first.
    pub upcoming: Vec<UpcomingDeadline>,
}

/// One entry in the upcoming-deadlines list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingDeadline {
    pub case_id: u64,
    pub application_number: String,
    pub client_name: String,
    pub application_type: ApplicationType,
    pub deadline: NaiveDate,
}

/// Build a summary of `records`.
///
/// Deadlines strictly before `today` are omitted. Ties on the deadline keep
/// record order.
pub fn summarise<'a, I>(records: I, today: NaiveDate, upcoming_limit: usize) -> CaseSummary
where
    I: IntoIterator<Item = &'a CaseRecord>,
{
    let mut summary = CaseSummary::default();
    let mut upcoming: Vec<&CaseRecord> = Vec::new();

    for record in records {
        summary.total += 1;
        *summary.by_status.entry(record.status.clone()).or_insert(0) += 1;
        *summary
            .by_type
            .entry(record.application_type.clone())
            .or_insert(0) += 1;
        if record.next_deadline >= today {
            upcoming.push(record);
        }
    }

    // sort_by_key is stable
    upcoming.sort_by_key(|r| r.next_deadline);
    summary.upcoming = upcoming
        .into_iter()
        .take(upcoming_limit)
        .map(|r| UpcomingDeadline {
            case_id: r.id,
            application_number: r.application_number.clone(),
            client_name: r.client_name.clone(),
            application_type: r.application_type.clone(),
            deadline: r.next_deadline,
        })
        .collect();

    summary
}
