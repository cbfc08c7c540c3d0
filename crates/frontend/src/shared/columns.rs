//! Column visibility state for line-item tables.
//!
//! Independent of row data: toggling, show-all and hide-all touch only this
//! mapping, never the rows themselves.

use contracts::shared::table::ColumnDef;
use std::collections::BTreeMap;

/// Per-table map of column key -> visible, initialized to all visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    visible: BTreeMap<&'static str, bool>,
}

impl ColumnVisibility {
    pub fn all_visible(columns: &'static [ColumnDef]) -> Self {
        Self {
            visible: columns.iter().map(|c| (c.key, true)).collect(),
        }
    }

    /// Unknown keys report as hidden.
    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.get(key).copied().unwrap_or(false)
    }

    /// Flips one column; unknown keys are ignored.
    pub fn toggle(&mut self, key: &str) {
        if let Some(v) = self.visible.get_mut(key) {
            *v = !*v;
        }
    }

    pub fn show_all(&mut self) {
        for v in self.visible.values_mut() {
            *v = true;
        }
    }

    pub fn hide_all(&mut self) {
        for v in self.visible.values_mut() {
            *v = false;
        }
    }

    /// Keys currently hidden, for preference persistence.
    pub fn hidden_keys(&self) -> Vec<String> {
        self.visible
            .iter()
            .filter(|(_, visible)| !**visible)
            .map(|(key, _)| key.to_string())
            .collect()
    }

    /// Applies stored preferences on top of the all-visible default.
    pub fn apply_hidden(&mut self, hidden: &[String]) {
        for key in hidden {
            if let Some(v) = self.visible.get_mut(key.as_str()) {
                *v = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::{ColumnDef, ColumnKind};

    const COLUMNS: &[ColumnDef] = &[
        ColumnDef { key: "alpha", label: "Alpha", kind: ColumnKind::Text },
        ColumnDef { key: "beta", label: "Beta", kind: ColumnKind::Number },
        ColumnDef { key: "gamma", label: "Gamma", kind: ColumnKind::Currency },
    ];

    #[test]
    fn test_starts_all_visible() {
        let vis = ColumnVisibility::all_visible(COLUMNS);
        assert!(vis.is_visible("alpha"));
        assert!(vis.is_visible("beta"));
        assert!(vis.is_visible("gamma"));
        assert!(vis.hidden_keys().is_empty());
    }

    #[test]
    fn test_toggle_flips_only_one_key() {
        let mut vis = ColumnVisibility::all_visible(COLUMNS);
        vis.toggle("beta");
        assert!(vis.is_visible("alpha"));
        assert!(!vis.is_visible("beta"));
        assert!(vis.is_visible("gamma"));
        vis.toggle("beta");
        assert!(vis.is_visible("beta"));
    }

    #[test]
    fn test_bulk_operations_are_idempotent() {
        let mut vis = ColumnVisibility::all_visible(COLUMNS);
        vis.hide_all();
        assert_eq!(vis.hidden_keys().len(), COLUMNS.len());
        vis.hide_all();
        assert_eq!(vis.hidden_keys().len(), COLUMNS.len());
        vis.show_all();
        assert!(vis.hidden_keys().is_empty());
        vis.show_all();
        assert!(vis.hidden_keys().is_empty());
    }

    #[test]
    fn test_apply_hidden_ignores_unknown_keys() {
        let mut vis = ColumnVisibility::all_visible(COLUMNS);
        vis.apply_hidden(&["gamma".to_string(), "stale_key".to_string()]);
        assert!(!vis.is_visible("gamma"));
        assert!(vis.is_visible("alpha"));
        assert_eq!(vis.hidden_keys(), vec!["gamma".to_string()]);
    }
}
