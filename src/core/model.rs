// CaseDesk - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// presentation concerns.
//
// These types are the shared vocabulary across all layers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Case Record
// =============================================================================

/// A single case / application entry in the record set.
///
/// Records are owned by whoever supplies the record set; the filter engine
/// and the case-list state only ever borrow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    /// Stable unique identity within the record set.
    pub id: u64,

    /// Office application number (e.g. "TM-2025-001"). Searchable.
    pub application_number: String,

    /// Client display name. Searchable.
    pub client_name: String,

    /// Client contact email. Searchable.
    pub client_email: String,

    /// Client contact phone. Display only.
    pub client_phone: String,

    /// Kind of IP application. Searchable and filterable.
    pub application_type: ApplicationType,

    /// Filing date. Filterable by range.
    pub application_date: NaiveDate,

    /// Current case status. Filterable.
    pub status: CaseStatus,

    /// Next deadline on the case. Display only.
    pub next_deadline: NaiveDate,
}

// =============================================================================
// Application Type
// =============================================================================

/// Kind of intellectual-property application.
///
/// Labels outside the known set are preserved verbatim in `Other` so that a
/// record set produced elsewhere round-trips unchanged. Filtering compares
/// labels as strings, so an `Other` value simply never matches a known option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationType {
    Trademark,
    Patent,
    Copyright,
    DesignPatent,
    TradeSecret,
    Other(String),
}

impl ApplicationType {
    /// Known variants in the order offered by filter controls.
    pub fn known() -> &'static [ApplicationType] {
        &[
            ApplicationType::Trademark,
            ApplicationType::Patent,
            ApplicationType::Copyright,
            ApplicationType::DesignPatent,
            ApplicationType::TradeSecret,
        ]
    }

    /// Human-readable label, also the value used for search and filtering.
    pub fn label(&self) -> &str {
        match self {
            ApplicationType::Trademark => "Trademark",
            ApplicationType::Patent => "Patent",
            ApplicationType::Copyright => "Copyright",
            ApplicationType::DesignPatent => "Design Patent",
            ApplicationType::TradeSecret => "Trade Secret",
            ApplicationType::Other(label) => label,
        }
    }
}

impl From<String> for ApplicationType {
    fn from(raw: String) -> Self {
        Self::known()
            .iter()
            .find(|t| t.label() == raw)
            .cloned()
            .unwrap_or(ApplicationType::Other(raw))
    }
}

impl From<&str> for ApplicationType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<ApplicationType> for String {
    fn from(t: ApplicationType) -> Self {
        match t {
            ApplicationType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Case Status
// =============================================================================

/// Lifecycle status of a case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseStatus {
    Active,
    Pending,
    UnderReview,
    Other(String),
}

impl CaseStatus {
    /// Known variants in the order offered by filter controls.
    pub fn known() -> &'static [CaseStatus] {
        &[CaseStatus::Active, CaseStatus::Pending, CaseStatus::UnderReview]
    }

    /// Human-readable label, also the value used for filtering.
    pub fn label(&self) -> &str {
        match self {
            CaseStatus::Active => "Active",
            CaseStatus::Pending => "Pending",
            CaseStatus::UnderReview => "Under Review",
            CaseStatus::Other(label) => label,
        }
    }
}

impl From<String> for CaseStatus {
    fn from(raw: String) -> Self {
        Self::known()
            .iter()
            .find(|s| s.label() == raw)
            .cloned()
            .unwrap_or(CaseStatus::Other(raw))
    }
}

impl From<&str> for CaseStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<CaseStatus> for String {
    fn from(s: CaseStatus) -> Self {
        match s {
            CaseStatus::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
