//! Row collection manager: the committed rows of one line-item table plus
//! at most one in-flight draft row.

use crate::shared::columns::ColumnVisibility;
use contracts::shared::table::{ColumnDef, TableRow};

/// Draft lifecycle for one collection. A second simultaneous draft in the
/// same collection is unrepresentable; drafts across different collections
/// are independent.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DraftState<R> {
    #[default]
    None,
    Editing(R),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowCollection<R: TableRow> {
    committed: Vec<R>,
    draft: DraftState<R>,
    visibility: ColumnVisibility,
}

impl<R: TableRow> RowCollection<R> {
    /// Builds a collection over the read-only seed rows. The collection
    /// diverges from the seed as rows are added; nothing is written back.
    pub fn seeded(rows: Vec<R>) -> Self {
        Self {
            committed: rows,
            draft: DraftState::None,
            visibility: ColumnVisibility::all_visible(R::columns()),
        }
    }

    pub fn columns() -> &'static [ColumnDef] {
        R::columns()
    }

    pub fn committed(&self) -> &[R] {
        &self.committed
    }

    pub fn draft(&self) -> Option<&R> {
        match &self.draft {
            DraftState::None => None,
            DraftState::Editing(row) => Some(row),
        }
    }

    /// Stages an all-default draft. No-op while another draft is in flight.
    pub fn begin_add(&mut self) {
        if matches!(self.draft, DraftState::None) {
            self.draft = DraftState::Editing(R::default());
        }
    }

    /// Permissive field write into the draft; no-op without one.
    pub fn set_draft_field(&mut self, key: &str, raw: &str) {
        if let DraftState::Editing(row) = &mut self.draft {
            row.set_field(key, raw);
        }
    }

    /// Appends the draft to the end of the committed rows (append-only,
    /// prior order preserved). Returns true when a row was actually
    /// committed so the caller can raise the payment gate.
    pub fn commit_add(&mut self) -> bool {
        match std::mem::take(&mut self.draft) {
            DraftState::None => false,
            DraftState::Editing(row) => {
                self.committed.push(row);
                true
            }
        }
    }

    pub fn discard_draft(&mut self) {
        self.draft = DraftState::None;
    }

    pub fn visibility(&self) -> &ColumnVisibility {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut ColumnVisibility {
        &mut self.visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a101_order::aggregate::OrderItemRow;

    fn seeded() -> RowCollection<OrderItemRow> {
        let mut first = OrderItemRow::default();
        first.set_field("order_item", "BTH-100");
        RowCollection::seeded(vec![first])
    }

    #[test]
    fn test_add_edit_commit_lifecycle() {
        let mut rows = seeded();
        rows.begin_add();
        rows.set_draft_field("order_item", "CRP-20");
        rows.set_draft_field("quantity", "4");
        rows.set_draft_field("unit_price", "2500");
        assert!(rows.commit_add());
        assert_eq!(rows.committed().len(), 2);
        assert!(rows.draft().is_none());
        let added = &rows.committed()[1];
        assert_eq!(added.order_item, "CRP-20");
        assert_eq!(added.quantity, 4.0);
        assert_eq!(added.unit_price, "25.00");
        // prior rows keep their position
        assert_eq!(rows.committed()[0].order_item, "BTH-100");
    }

    #[test]
    fn test_commit_without_draft_is_noop() {
        let mut rows = seeded();
        assert!(!rows.commit_add());
        assert_eq!(rows.committed().len(), 1);
    }

    #[test]
    fn test_begin_add_keeps_existing_draft() {
        let mut rows = seeded();
        rows.begin_add();
        rows.set_draft_field("order_item", "IN-FLIGHT");
        rows.begin_add();
        assert_eq!(rows.draft().unwrap().order_item, "IN-FLIGHT");
    }

    #[test]
    fn test_set_draft_field_without_draft_is_noop() {
        let mut rows = seeded();
        rows.set_draft_field("order_item", "X");
        assert!(rows.draft().is_none());
        assert_eq!(rows.committed().len(), 1);
    }

    #[test]
    fn test_discard_clears_draft() {
        let mut rows = seeded();
        rows.begin_add();
        rows.discard_draft();
        assert!(rows.draft().is_none());
        assert_eq!(rows.committed().len(), 1);
    }

    #[test]
    fn test_duplicate_item_codes_are_permitted() {
        let mut rows = seeded();
        rows.begin_add();
        rows.set_draft_field("order_item", "BTH-100");
        assert!(rows.commit_add());
        assert_eq!(rows.committed()[0].order_item, "BTH-100");
        assert_eq!(rows.committed()[1].order_item, "BTH-100");
    }
}
