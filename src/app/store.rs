// CaseDesk - app/store.rs
//
// Owning record store. Loads a record set from the built-in sample or a
// JSON file on disk, and accepts new or edited records coming back from
// the add/edit case form.

use crate::core::dataset;
use crate::core::model::{ApplicationType, CaseRecord, CaseStatus};
use crate::util::constants;
use crate::util::error::DatasetError;
use chrono::NaiveDate;
use std::path::Path;

/// Field values submitted by the add-case form. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCase {
    pub application_number: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub application_type: ApplicationType,
    pub application_date: NaiveDate,
    pub status: CaseStatus,
    pub next_deadline: NaiveDate,
}

/// Ordered, owned record set.
#[derive(Debug, Clone, Default)]
pub struct CaseStore {
    records: Vec<CaseRecord>,
}

impl CaseStore {
    /// Wrap an already-validated record set.
    pub fn from_records(records: Vec<CaseRecord>) -> Self {
        Self { records }
    }

    /// Store pre-populated with the built-in sample cases.
    pub fn sample() -> Self {
        Self::from_records(dataset::load_sample_cases())
    }

    /// Load a JSON record set from disk.
    ///
    /// Files larger than `MAX_DATASET_FILE_SIZE` are rejected before reading.
    pub fn load_file(path: &Path) -> Result<Self, DatasetError> {
        let metadata = std::fs::metadata(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if metadata.len() > constants::MAX_DATASET_FILE_SIZE {
            return Err(DatasetError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max_size: constants::MAX_DATASET_FILE_SIZE,
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let records = dataset::parse_cases(&content, path)?;
        tracing::info!(
            path = %path.display(),
            records = records.len(),
            "Loaded case file"
        );
        Ok(Self::from_records(records))
    }

    /// All records in their original order.
    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<&CaseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a new case, assigning the next free id. Returns the new id.
    ///
    /// Fails without modifying the store when the highest id in use is
    /// `u64::MAX`.
    pub fn add(&mut self, draft: NewCase) -> Result<u64, DatasetError> {
        let id = match self.records.iter().map(|r| r.id).max() {
            Some(max_id) => max_id
                .checked_add(1)
                .ok_or(DatasetError::IdSpaceExhausted { max_id })?,
            None => 1,
        };
        self.records.push(CaseRecord {
            id,
            application_number: draft.application_number,
            client_name: draft.client_name,
            client_email: draft.client_email,
            client_phone: draft.client_phone,
            application_type: draft.application_type,
            application_date: draft.application_date,
            status: draft.status,
            next_deadline: draft.next_deadline,
        });
        tracing::debug!(case_id = id, "Case added");
        Ok(id)
    }

    /// Replace the record with the same id in place, keeping its position.
    /// Returns false if no such record exists.
    pub fn update(&mut self, record: CaseRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                tracing::debug!(case_id = record.id, "Case updated");
                *slot = record;
                true
            }
            None => {
                tracing::warn!(case_id = record.id, "Update for unknown case ignored");
                false
            }
        }
    }
}
