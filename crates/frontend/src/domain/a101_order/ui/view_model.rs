use leptos::prelude::*;

use crate::domain::a101_order::data;
use crate::domain::a101_order::session::{EditTab, LineTable, OrderEditSession};
use crate::shared::storage::BrowserStorage;

/// ViewModel for the orders screen: one session signal plus commands.
///
/// The session itself is a plain struct; every command is a synchronous
/// `update` on the signal, so views re-render after each mutation.
#[derive(Clone, Copy)]
pub struct OrdersViewModel {
    pub session: RwSignal<OrderEditSession>,
    store: BrowserStorage,
}

impl OrdersViewModel {
    pub fn new() -> Self {
        let store = BrowserStorage;
        let mut session = OrderEditSession::new(data::seed());
        // column visibility starts all-visible, then stored preferences
        // are layered on top
        for table in LineTable::ALL {
            let hidden = prefs::load_hidden_columns(&store, table);
            session.apply_hidden_columns(table, &hidden);
        }
        Self {
            session: RwSignal::new(session),
            store,
        }
    }

    // ------------------------------------------------------------------
    // Order list / selection
    // ------------------------------------------------------------------

    pub fn set_search(&self, query: String) {
        self.session.update(|s| s.set_search_query(query));
    }

    pub fn select_order(&self, id: &str) {
        self.session.update(|s| s.select_order(id));
    }

    // ------------------------------------------------------------------
    // Edit buffers
    // ------------------------------------------------------------------

    pub fn set_active_tab(&self, tab: EditTab) {
        self.session.update(|s| s.set_active_tab(tab));
    }

    pub fn set_field(&self, tab: EditTab, key: &str, value: String) {
        self.session.update(|s| s.set_field(tab, key, value));
    }

    pub fn save(&self) {
        self.session.update(|s| s.save());
    }

    pub fn cancel(&self) {
        self.session.update(|s| s.cancel());
    }

    // ------------------------------------------------------------------
    // Line-item tables
    // ------------------------------------------------------------------

    pub fn begin_add(&self, table: LineTable) {
        self.session.update(|s| s.begin_add(table));
    }

    pub fn set_draft_field(&self, table: LineTable, key: &str, raw: &str) {
        self.session.update(|s| s.set_draft_field(table, key, raw));
    }

    pub fn commit_add(&self, table: LineTable) {
        self.session.update(|s| s.commit_add(table));
    }

    pub fn discard_draft(&self, table: LineTable) {
        self.session.update(|s| s.discard_draft(table));
    }

    // ------------------------------------------------------------------
    // Column visibility (persisted as a cosmetic preference)
    // ------------------------------------------------------------------

    pub fn toggle_column(&self, table: LineTable, key: &str) {
        self.session.update(|s| s.toggle_column(table, key));
        self.persist_columns(table);
    }

    pub fn show_all_columns(&self, table: LineTable) {
        self.session.update(|s| s.show_all_columns(table));
        self.persist_columns(table);
    }

    pub fn hide_all_columns(&self, table: LineTable) {
        self.session.update(|s| s.hide_all_columns(table));
        self.persist_columns(table);
    }

    fn persist_columns(&self, table: LineTable) {
        let hidden = self.session.with(|s| s.hidden_columns(table));
        prefs::save_hidden_columns(&self.store, table, &hidden);
    }

    // ------------------------------------------------------------------
    // Payment gate
    // ------------------------------------------------------------------

    pub fn open_payment_dialog(&self) {
        self.session.update(|s| s.open_payment_dialog());
    }

    pub fn confirm_payment(&self) {
        self.session.update(|s| s.confirm_payment());
    }

    pub fn cancel_payment(&self) {
        self.session.update(|s| s.cancel_payment());
    }
}

/// Hidden-column preferences, stored per table behind the injected
/// key-value store.
mod prefs {
    use serde::{Deserialize, Serialize};

    use crate::domain::a101_order::session::LineTable;
    use crate::shared::storage::KeyValueStore;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct ColumnPrefs {
        hidden: Vec<String>,
    }

    pub fn load_hidden_columns(store: &dyn KeyValueStore, table: LineTable) -> Vec<String> {
        store
            .get(table.storage_key())
            .and_then(|raw| serde_json::from_str::<ColumnPrefs>(&raw).ok())
            .map(|p| p.hidden)
            .unwrap_or_default()
    }

    pub fn save_hidden_columns(store: &dyn KeyValueStore, table: LineTable, hidden: &[String]) {
        let prefs = ColumnPrefs {
            hidden: hidden.to_vec(),
        };
        if let Ok(raw) = serde_json::to_string(&prefs) {
            store.set(table.storage_key(), &raw);
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::shared::storage::InMemoryStore;

        #[test]
        fn test_hidden_columns_round_trip() {
            let store = InMemoryStore::default();
            assert!(load_hidden_columns(&store, LineTable::Items).is_empty());

            let hidden = vec!["unit_price".to_string(), "amount".to_string()];
            save_hidden_columns(&store, LineTable::Items, &hidden);
            assert_eq!(load_hidden_columns(&store, LineTable::Items), hidden);
            // other tables are unaffected
            assert!(load_hidden_columns(&store, LineTable::Pricing).is_empty());
        }

        #[test]
        fn test_corrupt_preference_reads_as_default() {
            let store = InMemoryStore::default();
            store.set(LineTable::Items.storage_key(), "{not json");
            assert!(load_hidden_columns(&store, LineTable::Items).is_empty());
        }
    }
}
