// CaseDesk - app/state.rs
//
// Case-list state management. Holds the record store, the live search
// string, the staged and applied filter criteria, the expanded record,
// and the cached visible set.
// Owned by whatever presentation layer drives the case list.

use crate::app::store::{CaseStore, NewCase};
use crate::core::filter::{self, FilterCriteria, FilterField};
use crate::core::model::CaseRecord;
use crate::util::error::DatasetError;

/// When staged filter edits take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyMode {
    /// Edits stay staged until `apply_filters` commits them.
    #[default]
    Staged,

    /// Every edit is committed immediately.
    Auto,
}

/// What the list area should show after the latest recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDisplay {
    /// At least one record is visible.
    Records,

    /// Filtering is active and nothing matches. Offer the reset action.
    NoMatches,

    /// No filtering is active and the record set itself is empty.
    NoRecords,
}

impl ListDisplay {
    /// User-facing message for the empty states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ListDisplay::Records => None,
            ListDisplay::NoMatches => Some("No cases found matching your search criteria."),
            ListDisplay::NoRecords => Some("No cases available."),
        }
    }
}

/// Case-list state: one record store plus two-phase filter state.
#[derive(Debug)]
pub struct CaseListState {
    /// Records being filtered. Never mutated by filtering.
    store: CaseStore,

    /// Live search string, stored exactly as typed.
    search: String,

    /// Filter selections edited but not yet committed.
    staged: FilterCriteria,

    /// Last committed filter snapshot; the one actually used for filtering.
    applied: FilterCriteria,

    /// Whether staged edits wait for an explicit apply.
    apply_mode: ApplyMode,

    /// Id of the expanded record, if any.
    selected_id: Option<u64>,

    /// Indices into `store.records()` matching the current search and
    /// applied criteria.
    visible: Vec<usize>,
}

impl CaseListState {
    /// Create state with empty search, empty criteria and no selection.
    pub fn new(store: CaseStore, apply_mode: ApplyMode) -> Self {
        let mut state = Self {
            store,
            search: String::new(),
            staged: FilterCriteria::default(),
            applied: FilterCriteria::default(),
            apply_mode,
            selected_id: None,
            visible: Vec::new(),
        };
        state.recompute();
        state
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Update the search string and re-filter with the applied criteria.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        tracing::debug!(query_len = self.search.len(), "Search updated");
        self.recompute();
    }

    /// Update one staged field. In `ApplyMode::Staged` this never re-filters.
    pub fn set_staged_field(&mut self, field: FilterField, value: impl Into<String>) {
        self.staged.set(field, value);
        tracing::debug!(
            field = field.label(),
            value = self.staged.get(field),
            "Staged filter updated"
        );
        if self.apply_mode == ApplyMode::Auto {
            self.apply_filters();
        }
    }

    /// Commit the staged criteria as a full snapshot and re-filter.
    ///
    /// Blank staged fields overwrite previously applied values.
    pub fn apply_filters(&mut self) {
        self.applied = self.staged.clone();
        tracing::debug!(applied = ?self.applied, "Filters applied");
        self.recompute();
    }

    /// Reset staged and applied criteria to empty and re-filter with the
    /// current search.
    pub fn clear_filters(&mut self) {
        self.staged = FilterCriteria::default();
        self.applied = FilterCriteria::default();
        tracing::debug!("Filters cleared");
        self.recompute();
    }

    /// Clear search and filters together (the "no matches" reset action).
    pub fn reset_all(&mut self) {
        self.search.clear();
        self.clear_filters();
    }

    /// Expand `id`, or collapse it if it is already expanded.
    pub fn toggle_selection(&mut self, id: u64) {
        self.selected_id = if self.selected_id == Some(id) {
            None
        } else {
            Some(id)
        };
        tracing::debug!(selected = ?self.selected_id, "Selection toggled");
    }

    /// Add a case submitted by the add-case form and re-filter.
    /// On error the store and visible set are unchanged.
    pub fn add_case(&mut self, draft: NewCase) -> Result<u64, DatasetError> {
        let id = self.store.add(draft)?;
        self.recompute();
        Ok(id)
    }

    /// Replace an edited case and re-filter. Returns false for unknown ids.
    pub fn update_case(&mut self, record: CaseRecord) -> bool {
        let updated = self.store.update(record);
        if updated {
            self.recompute();
        }
        updated
    }

    /// Re-run the filter engine over the store.
    fn recompute(&mut self) {
        self.visible =
            filter::compute_visible_indices(self.store.records(), &self.search, &self.applied);
        tracing::debug!(
            visible = self.visible.len(),
            total = self.store.len(),
            "Case list recomputed"
        );
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn records(&self) -> &[CaseRecord] {
        self.store.records()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn staged(&self) -> &FilterCriteria {
        &self.staged
    }

    pub fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    pub fn apply_mode(&self) -> ApplyMode {
        self.apply_mode
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// True when staged selections differ from the applied snapshot.
    pub fn has_pending_changes(&self) -> bool {
        self.staged != self.applied
    }

    /// True when the search string or any applied field constrains the view.
    pub fn is_filtering_active(&self) -> bool {
        filter::is_filtering_active(&self.search, &self.applied)
    }

    /// Indices of visible records into `records()`.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Visible records in original order.
    pub fn visible(&self) -> Vec<&CaseRecord> {
        let records = self.store.records();
        self.visible.iter().filter_map(|&idx| records.get(idx)).collect()
    }

    /// The expanded record, if it is currently visible.
    pub fn selected_record(&self) -> Option<&CaseRecord> {
        let id = self.selected_id?;
        self.visible().into_iter().find(|r| r.id == id)
    }

    /// Which list state the presentation layer should render.
    pub fn display(&self) -> ListDisplay {
        if !self.visible.is_empty() {
            ListDisplay::Records
        } else if self.is_filtering_active() {
            ListDisplay::NoMatches
        } else {
            ListDisplay::NoRecords
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ApplicationType, CaseStatus};
    use chrono::NaiveDate;

    fn sample_state() -> CaseListState {
        CaseListState::new(CaseStore::sample(), ApplyMode::Staged)
    }

    fn visible_ids(state: &CaseListState) -> Vec<u64> {
        state.visible().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_initial_state_is_identity() {
        let state = sample_state();
        assert_eq!(visible_ids(&state), vec![1, 2, 3, 4, 5]);
        assert!(!state.is_filtering_active());
        assert_eq!(state.display(), ListDisplay::Records);
        assert_eq!(state.selected_id(), None);
        assert!(state.staged().is_empty());
        assert!(state.applied().is_empty());
    }

    #[test]
    fn test_search_recomputes_immediately() {
        let mut state = sample_state();
        state.set_search("techfirm");
        assert_eq!(visible_ids(&state), vec![4]);
        assert!(state.is_filtering_active());
    }

    #[test]
    fn test_staged_edits_do_not_refilter() {
        let mut state = sample_state();
        state.set_staged_field(FilterField::ApplicationType, "Patent");
        state.set_staged_field(FilterField::Status, "Pending");
        assert_eq!(visible_ids(&state), vec![1, 2, 3, 4, 5]);
        assert!(!state.is_filtering_active());
        assert!(state.has_pending_changes());
        assert!(state.applied().is_empty());

        state.apply_filters();
        assert_eq!(visible_ids(&state), vec![2]);
        assert!(!state.has_pending_changes());
    }

    #[test]
    fn test_search_uses_applied_not_staged() {
        let mut state = sample_state();
        state.set_staged_field(FilterField::ApplicationType, "Trademark");
        state.set_search("pt-2025");
        assert_eq!(visible_ids(&state), vec![2, 4]);
    }

    #[test]
    fn test_apply_blank_snapshot_reverts_to_identity() {
        let mut state = sample_state();
        state.set_staged_field(FilterField::Status, "Active");
        state.apply_filters();
        assert_eq!(visible_ids(&state), vec![1, 3]);

        state.set_staged_field(FilterField::Status, "");
        state.apply_filters();
        assert_eq!(visible_ids(&state), vec![1, 2, 3, 4, 5]);
        assert!(!state.is_filtering_active());
    }

    #[test]
    fn test_apply_is_full_snapshot() {
        let mut state = sample_state();
        state.set_staged_field(FilterField::ApplicationType, "Patent");
        state.set_staged_field(FilterField::Status, "Pending");
        state.apply_filters();
        state.set_staged_field(FilterField::Status, "");
        state.apply_filters();
        assert_eq!(state.applied().status, "");
        assert_eq!(state.applied().application_type, "Patent");
        assert_eq!(visible_ids(&state), vec![2, 4]);
    }

    #[test]
    fn test_zero_match_filter_is_no_matches() {
        let mut state = sample_state();
        state.set_staged_field(FilterField::Status, "Abandoned");
        state.apply_filters();
        assert!(state.visible().is_empty());
        assert!(state.is_filtering_active());
        assert_eq!(state.display(), ListDisplay::NoMatches);
        assert!(state.display().message().is_some());
    }

    #[test]
    fn test_empty_store_is_no_records() {
        let state = CaseListState::new(CaseStore::default(), ApplyMode::Staged);
        assert_eq!(state.display(), ListDisplay::NoRecords);
        assert_ne!(ListDisplay::NoRecords.message(), ListDisplay::NoMatches.message());
    }

    #[test]
    fn test_clear_filters_keeps_search() {
        let mut state = sample_state();
        state.set_search("patent");
        state.set_staged_field(FilterField::Status, "Pending");
        state.apply_filters();
        assert_eq!(visible_ids(&state), vec![2]);

        state.clear_filters();
        assert!(state.staged().is_empty());
        assert!(state.applied().is_empty());
        assert_eq!(state.search(), "patent");
        assert_eq!(visible_ids(&state), vec![2, 4]);
    }

    #[test]
    fn test_clear_filters_without_search_is_identity() {
        let mut state = sample_state();
        state.set_staged_field(FilterField::ApplicationType, "Copyright");
        state.apply_filters();
        state.clear_filters();
        assert_eq!(visible_ids(&state), vec![1, 2, 3, 4, 5]);
        assert!(!state.is_filtering_active());
    }

    #[test]
    fn test_apply_and_clear_idempotent() {
        let mut state = sample_state();
        state.set_staged_field(FilterField::StartDate, "2025-02-01");
        state.apply_filters();
        let once = visible_ids(&state);
        state.apply_filters();
        assert_eq!(visible_ids(&state), once);

        state.clear_filters();
        let cleared = visible_ids(&state);
        state.clear_filters();
        assert_eq!(visible_ids(&state), cleared);
    }

    #[test]
    fn test_reset_all_clears_search_and_filters() {
        let mut state = sample_state();
        state.set_search("nothing matches this");
        state.set_staged_field(FilterField::Status, "Active");
        state.apply_filters();
        assert_eq!(state.display(), ListDisplay::NoMatches);

        state.reset_all();
        assert_eq!(state.search(), "");
        assert!(!state.is_filtering_active());
        assert_eq!(visible_ids(&state), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_auto_mode_applies_every_edit() {
        let mut state = CaseListState::new(CaseStore::sample(), ApplyMode::Auto);
        state.set_staged_field(FilterField::ApplicationType, "Trademark");
        assert_eq!(visible_ids(&state), vec![1, 5]);
        assert!(!state.has_pending_changes());

        state.set_staged_field(FilterField::EndDate, "2025-01-31");
        assert_eq!(visible_ids(&state), vec![5]);
    }

    #[test]
    fn test_toggle_selection_twice_clears() {
        let mut state = sample_state();
        state.toggle_selection(3);
        assert_eq!(state.selected_id(), Some(3));
        assert_eq!(state.selected_record().map(|r| r.id), Some(3));

        state.toggle_selection(3);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_toggle_other_id_moves_selection() {
        let mut state = sample_state();
        state.toggle_selection(1);
        state.toggle_selection(2);
        assert_eq!(state.selected_id(), Some(2));
    }

    #[test]
    fn test_hidden_selection_not_resolved() {
        let mut state = sample_state();
        state.toggle_selection(1);
        state.set_search("wilson");
        assert_eq!(state.selected_id(), Some(1));
        assert!(state.selected_record().is_none());
    }

    #[test]
    fn test_added_case_is_filtered() {
        let mut state = sample_state();
        state.set_staged_field(FilterField::ApplicationType, "Design Patent");
        state.apply_filters();
        assert_eq!(state.display(), ListDisplay::NoMatches);

        let id = state.add_case(NewCase {
            application_number: "DP-2025-011".to_string(),
            client_name: "Northwind Labs".to_string(),
            client_email: "ip@northwind.test".to_string(),
            client_phone: String::new(),
            application_type: ApplicationType::DesignPatent,
            application_date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            status: CaseStatus::Pending,
            next_deadline: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
        })
        .unwrap();
        assert_eq!(visible_ids(&state), vec![id]);
    }

    #[test]
    fn test_updated_case_is_refiltered() {
        let mut state = sample_state();
        state.set_staged_field(FilterField::Status, "Active");
        state.apply_filters();
        assert_eq!(visible_ids(&state), vec![1, 3]);

        let mut record = state.records()[1].clone();
        record.status = CaseStatus::Active;
        assert!(state.update_case(record));
        assert_eq!(visible_ids(&state), vec![1, 2, 3]);
    }
}
