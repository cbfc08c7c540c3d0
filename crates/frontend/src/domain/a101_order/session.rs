//! Order edit session: one selected order, per-tab edit buffers, the three
//! line-item collections and the payment gate.
//!
//! The session is a plain struct; the view model wraps it in a single
//! `RwSignal` and every operation is a synchronous `update`. None of the
//! operations can fail; input is coerced, never rejected.

use contracts::domain::a101_order::aggregate::{Order, OrderItemRow, PricingRow, ShippingRow};
use contracts::shared::table::{ColumnDef, TableRow};

use super::payment::PaymentGate;
use super::rows::RowCollection;

/// Edit tabs of the details panel; doubles as the buffer selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTab {
    #[default]
    Main,
    Others,
    Address,
}

/// The three line-item tables of the order grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTable {
    Items,
    Pricing,
    Shipping,
}

impl LineTable {
    pub const ALL: [LineTable; 3] = [LineTable::Items, LineTable::Pricing, LineTable::Shipping];

    pub fn title(&self) -> &'static str {
        match self {
            LineTable::Items => "Order Items",
            LineTable::Pricing => "Pricing",
            LineTable::Shipping => "Shipping",
        }
    }

    /// Stable key for column-preference storage.
    pub fn storage_key(&self) -> &'static str {
        match self {
            LineTable::Items => "a101_order_items_columns",
            LineTable::Pricing => "a101_order_pricing_columns",
            LineTable::Shipping => "a101_order_shipping_columns",
        }
    }
}

// ============================================================================
// Edit buffers
// ============================================================================

/// "Main" tab buffer: the editable mirror of the order header. The order
/// record itself is never mutated; buffer edits live and die here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MainBuffer {
    pub customer_po: String,
    pub terms: String,
    pub sales_channel: String,
    pub order_date: String,
}

impl MainBuffer {
    fn from_order(order: &Order) -> Self {
        Self {
            customer_po: String::new(),
            terms: order.terms.clone(),
            sales_channel: order.sales_channel.clone(),
            order_date: order.order_date.clone(),
        }
    }

    fn field(&self, key: &str) -> String {
        match key {
            "customer_po" => self.customer_po.clone(),
            "terms" => self.terms.clone(),
            "sales_channel" => self.sales_channel.clone(),
            "order_date" => self.order_date.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "customer_po" => self.customer_po = value,
            "terms" => self.terms = value,
            "sales_channel" => self.sales_channel = value,
            "order_date" => self.order_date = value,
            _ => {}
        }
    }
}

/// "Others" tab buffer. Not persisted per-order: every order starts from
/// the same fixed defaults until edited.
#[derive(Debug, Clone, PartialEq)]
pub struct OthersBuffer {
    pub warehouse: String,
    pub order_method: String,
    pub sales_person: String,
    pub exhibitor: String,
}

impl Default for OthersBuffer {
    fn default() -> Self {
        Self {
            warehouse: "MAIN".to_string(),
            order_method: "Phone".to_string(),
            sales_person: String::new(),
            exhibitor: String::new(),
        }
    }
}

impl OthersBuffer {
    fn field(&self, key: &str) -> String {
        match key {
            "warehouse" => self.warehouse.clone(),
            "order_method" => self.order_method.clone(),
            "sales_person" => self.sales_person.clone(),
            "exhibitor" => self.exhibitor.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "warehouse" => self.warehouse = value,
            "order_method" => self.order_method = value,
            "sales_person" => self.sales_person = value,
            "exhibitor" => self.exhibitor = value,
            _ => {}
        }
    }
}

/// "Address" tab buffer: phone/contact fields, fixed blank defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressBuffer {
    pub contact_name: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
}

impl AddressBuffer {
    fn field(&self, key: &str) -> String {
        match key {
            "contact_name" => self.contact_name.clone(),
            "phone" => self.phone.clone(),
            "fax" => self.fax.clone(),
            "email" => self.email.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "contact_name" => self.contact_name = value,
            "phone" => self.phone = value,
            "fax" => self.fax = value,
            "email" => self.email = value,
            _ => {}
        }
    }
}

/// Full copy of the selected order's editable values plus fixed defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditBuffers {
    pub main: MainBuffer,
    pub others: OthersBuffer,
    pub address: AddressBuffer,
}

impl EditBuffers {
    fn from_order(order: &Order) -> Self {
        Self {
            main: MainBuffer::from_order(order),
            others: OthersBuffer::default(),
            address: AddressBuffer::default(),
        }
    }

    pub fn field(&self, tab: EditTab, key: &str) -> String {
        match tab {
            EditTab::Main => self.main.field(key),
            EditTab::Others => self.others.field(key),
            EditTab::Address => self.address.field(key),
        }
    }

    fn set_field(&mut self, tab: EditTab, key: &str, value: String) {
        match tab {
            EditTab::Main => self.main.set_field(key, value),
            EditTab::Others => self.others.set_field(key, value),
            EditTab::Address => self.address.set_field(key, value),
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Seed supplied once by the out-of-core data source.
#[derive(Debug, Clone, Default)]
pub struct OrdersSeed {
    pub orders: Vec<Order>,
    pub items: Vec<OrderItemRow>,
    pub pricing: Vec<PricingRow>,
    pub shipping: Vec<ShippingRow>,
}

#[derive(Debug, Clone)]
pub struct OrderEditSession {
    orders: Vec<Order>,
    search_query: String,
    selected_order_id: Option<String>,
    active_tab: EditTab,
    buffers: EditBuffers,
    snapshot: EditBuffers,
    is_dirty: bool,
    items: RowCollection<OrderItemRow>,
    pricing: RowCollection<PricingRow>,
    shipping: RowCollection<ShippingRow>,
    payment: PaymentGate,
}

macro_rules! on_table {
    ($self:ident, $table:expr, |$c:ident| $body:expr) => {
        match $table {
            LineTable::Items => {
                let $c = &$self.items;
                $body
            }
            LineTable::Pricing => {
                let $c = &$self.pricing;
                $body
            }
            LineTable::Shipping => {
                let $c = &$self.shipping;
                $body
            }
        }
    };
}

macro_rules! on_table_mut {
    ($self:ident, $table:expr, |$c:ident| $body:expr) => {
        match $table {
            LineTable::Items => {
                let $c = &mut $self.items;
                $body
            }
            LineTable::Pricing => {
                let $c = &mut $self.pricing;
                $body
            }
            LineTable::Shipping => {
                let $c = &mut $self.shipping;
                $body
            }
        }
    };
}

impl OrderEditSession {
    /// Builds the session over the read-only seed and selects the first
    /// order so the details panel is never empty on entry.
    pub fn new(seed: OrdersSeed) -> Self {
        let mut session = Self {
            orders: seed.orders,
            search_query: String::new(),
            selected_order_id: None,
            active_tab: EditTab::Main,
            buffers: EditBuffers::default(),
            snapshot: EditBuffers::default(),
            is_dirty: false,
            items: RowCollection::seeded(seed.items),
            pricing: RowCollection::seeded(seed.pricing),
            shipping: RowCollection::seeded(seed.shipping),
            payment: PaymentGate::default(),
        };
        if let Some(first_id) = session.orders.first().map(|o| o.order_id.clone()) {
            session.select_order(&first_id);
        }
        session
    }

    // ------------------------------------------------------------------
    // Order list / selection
    // ------------------------------------------------------------------

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Case-insensitive substring match against the order id.
    pub fn filtered_orders(&self) -> Vec<&Order> {
        let needle = self.search_query.to_lowercase();
        self.orders
            .iter()
            .filter(|o| o.order_id.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_order_id(&self) -> Option<&str> {
        self.selected_order_id.as_deref()
    }

    pub fn selected_order(&self) -> Option<&Order> {
        let id = self.selected_order_id.as_deref()?;
        self.orders.iter().find(|o| o.order_id == id)
    }

    /// Re-initializes all edit buffers from the newly selected order's
    /// committed values and the fixed Others/Address defaults. Uncommitted
    /// drafts and dirty buffer edits are discarded without warning. Unknown
    /// ids are ignored.
    pub fn select_order(&mut self, id: &str) {
        let Some(order) = self.orders.iter().find(|o| o.order_id == id).cloned() else {
            return;
        };
        self.selected_order_id = Some(order.order_id.clone());
        self.buffers = EditBuffers::from_order(&order);
        self.snapshot = self.buffers.clone();
        self.is_dirty = false;
        self.items.discard_draft();
        self.pricing.discard_draft();
        self.shipping.discard_draft();
    }

    // ------------------------------------------------------------------
    // Buffers
    // ------------------------------------------------------------------

    pub fn active_tab(&self) -> EditTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: EditTab) {
        self.active_tab = tab;
    }

    pub fn buffers(&self) -> &EditBuffers {
        &self.buffers
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Permissive write: any string is accepted, unknown keys are ignored.
    /// Dirty is recomputed against the snapshot, so editing a field back to
    /// its saved value clears the flag.
    pub fn set_field(&mut self, tab: EditTab, key: &str, value: impl Into<String>) {
        self.buffers.set_field(tab, key, value.into());
        self.is_dirty = self.buffers != self.snapshot;
    }

    /// Local save: the edited values become the new snapshot. Idempotent,
    /// never fails, writes nothing outside the session.
    pub fn save(&mut self) {
        self.snapshot = self.buffers.clone();
        self.is_dirty = false;
    }

    /// Resets all buffers to the snapshot captured at the last
    /// `select_order`/`save`.
    pub fn cancel(&mut self) {
        self.buffers = self.snapshot.clone();
        self.is_dirty = false;
    }

    // ------------------------------------------------------------------
    // Line-item tables
    // ------------------------------------------------------------------

    pub fn columns(&self, table: LineTable) -> &'static [ColumnDef] {
        match table {
            LineTable::Items => OrderItemRow::columns(),
            LineTable::Pricing => PricingRow::columns(),
            LineTable::Shipping => ShippingRow::columns(),
        }
    }

    pub fn row_count(&self, table: LineTable) -> usize {
        on_table!(self, table, |c| c.committed().len())
    }

    /// Committed rows as raw cell strings in schema order.
    pub fn committed_cells(&self, table: LineTable) -> Vec<Vec<String>> {
        on_table!(self, table, |c| c
            .committed()
            .iter()
            .map(|row| row.cells())
            .collect())
    }

    pub fn has_draft(&self, table: LineTable) -> bool {
        on_table!(self, table, |c| c.draft().is_some())
    }

    /// The draft row as raw cell strings in schema order, if one is staged.
    pub fn draft_cells(&self, table: LineTable) -> Option<Vec<String>> {
        on_table!(self, table, |c| c.draft().map(|row| row.cells()))
    }

    /// Raw value of one draft field; empty when no draft is staged.
    pub fn draft_field(&self, table: LineTable, key: &str) -> String {
        on_table!(self, table, |c| c
            .draft()
            .map(|row| row.field(key))
            .unwrap_or_default())
    }

    pub fn begin_add(&mut self, table: LineTable) {
        on_table_mut!(self, table, |c| c.begin_add());
    }

    pub fn set_draft_field(&mut self, table: LineTable, key: &str, raw: &str) {
        on_table_mut!(self, table, |c| c.set_draft_field(key, raw));
    }

    /// Commits the table's draft and, when a row was actually added, raises
    /// the payment gate.
    pub fn commit_add(&mut self, table: LineTable) {
        let committed = on_table_mut!(self, table, |c| c.commit_add());
        if committed {
            self.payment.notify_rows_committed();
        }
    }

    pub fn discard_draft(&mut self, table: LineTable) {
        on_table_mut!(self, table, |c| c.discard_draft());
    }

    // ------------------------------------------------------------------
    // Column visibility
    // ------------------------------------------------------------------

    pub fn is_column_visible(&self, table: LineTable, key: &str) -> bool {
        on_table!(self, table, |c| c.visibility().is_visible(key))
    }

    pub fn toggle_column(&mut self, table: LineTable, key: &str) {
        on_table_mut!(self, table, |c| c.visibility_mut().toggle(key));
    }

    pub fn show_all_columns(&mut self, table: LineTable) {
        on_table_mut!(self, table, |c| c.visibility_mut().show_all());
    }

    pub fn hide_all_columns(&mut self, table: LineTable) {
        on_table_mut!(self, table, |c| c.visibility_mut().hide_all());
    }

    pub fn hidden_columns(&self, table: LineTable) -> Vec<String> {
        on_table!(self, table, |c| c.visibility().hidden_keys())
    }

    pub fn apply_hidden_columns(&mut self, table: LineTable, hidden: &[String]) {
        on_table_mut!(self, table, |c| c.visibility_mut().apply_hidden(hidden));
    }

    // ------------------------------------------------------------------
    // Payment gate
    // ------------------------------------------------------------------

    pub fn payment(&self) -> &PaymentGate {
        &self.payment
    }

    pub fn open_payment_dialog(&mut self) {
        self.payment.open_dialog();
    }

    pub fn confirm_payment(&mut self) {
        self.payment.confirm();
    }

    pub fn cancel_payment(&mut self) {
        self.payment.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, customer: &str) -> Order {
        Order {
            order_id: id.to_string(),
            customer: customer.to_string(),
            project: "SPRING EXPO 2025".to_string(),
            source: "EXH".to_string(),
            terms: "NET 30".to_string(),
            sales_channel: "Direct".to_string(),
            order_date: "23-APR-2025 11:06:41".to_string(),
            subtotal: "1200.00".to_string(),
            tax: "96.00".to_string(),
            cancel_charge: "0.00".to_string(),
            total: "1296.00".to_string(),
        }
    }

    fn session() -> OrderEditSession {
        OrderEditSession::new(OrdersSeed {
            orders: vec![order("577725", "Prime Exhibits"), order("580001", "Vista Booth Co")],
            items: vec![OrderItemRow::default()],
            pricing: Vec::new(),
            shipping: Vec::new(),
        })
    }

    #[test]
    fn test_first_order_selected_on_entry() {
        let s = session();
        assert_eq!(s.selected_order_id(), Some("577725"));
        assert!(!s.is_dirty());
        assert_eq!(s.buffers().main.terms, "NET 30");
        assert_eq!(s.buffers().main.customer_po, "");
        assert_eq!(s.buffers().others.warehouse, "MAIN");
    }

    #[test]
    fn test_search_filter_is_case_insensitive_substring() {
        let mut s = session();
        s.set_search_query("5777");
        let hits: Vec<&str> = s.filtered_orders().iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(hits, vec!["577725"]);

        s.set_search_query("");
        assert_eq!(s.filtered_orders().len(), 2);
    }

    #[test]
    fn test_edit_then_cancel_reverts_buffer() {
        let mut s = session();
        s.select_order("577725");
        s.set_field(EditTab::Main, "customer_po", "PO-99");
        assert!(s.is_dirty());
        assert_eq!(s.buffers().field(EditTab::Main, "customer_po"), "PO-99");

        s.cancel();
        assert_eq!(s.buffers().field(EditTab::Main, "customer_po"), "");
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_dirty_tracks_divergence_from_snapshot() {
        let mut s = session();
        s.set_field(EditTab::Others, "sales_person", "J. Ruiz");
        assert!(s.is_dirty());
        // editing back to the saved value clears the flag
        s.set_field(EditTab::Others, "sales_person", "");
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_save_is_local_and_idempotent() {
        let mut s = session();
        s.set_field(EditTab::Address, "phone", "555-0100");
        s.save();
        assert!(!s.is_dirty());
        s.save();
        assert!(!s.is_dirty());
        // cancel after save reverts to the saved values, not the seed
        s.set_field(EditTab::Address, "phone", "555-9999");
        s.cancel();
        assert_eq!(s.buffers().address.phone, "555-0100");
    }

    #[test]
    fn test_unknown_field_key_is_ignored() {
        let mut s = session();
        s.set_field(EditTab::Main, "no_such_field", "x");
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_switching_orders_discards_edits_and_drafts() {
        let mut s = session();
        s.set_field(EditTab::Main, "customer_po", "PO-1");
        s.begin_add(LineTable::Pricing);
        s.select_order("580001");
        assert_eq!(s.buffers().main.customer_po, "");
        assert!(!s.is_dirty());
        assert!(!s.has_draft(LineTable::Pricing));
        // committed rows survive the switch
        assert_eq!(s.row_count(LineTable::Items), 1);
    }

    #[test]
    fn test_select_unknown_order_is_noop() {
        let mut s = session();
        s.select_order("000000");
        assert_eq!(s.selected_order_id(), Some("577725"));
    }

    #[test]
    fn test_commit_raises_payment_gate_from_any_table() {
        for table in LineTable::ALL {
            let mut s = session();
            assert!(!s.payment().enabled());
            s.begin_add(table);
            let before = s.row_count(table);
            s.commit_add(table);
            assert_eq!(s.row_count(table), before + 1);
            assert!(!s.has_draft(table));
            assert!(s.payment().enabled());
        }
    }

    #[test]
    fn test_commit_without_draft_leaves_gate_down() {
        let mut s = session();
        s.commit_add(LineTable::Shipping);
        assert_eq!(s.row_count(LineTable::Shipping), 0);
        assert!(!s.payment().enabled());
    }

    #[test]
    fn test_drafts_are_independent_across_tables() {
        let mut s = session();
        s.begin_add(LineTable::Items);
        s.begin_add(LineTable::Pricing);
        s.begin_add(LineTable::Shipping);
        assert!(s.has_draft(LineTable::Items));
        assert!(s.has_draft(LineTable::Pricing));
        assert!(s.has_draft(LineTable::Shipping));
        s.commit_add(LineTable::Pricing);
        assert!(s.has_draft(LineTable::Items));
        assert!(!s.has_draft(LineTable::Pricing));
        assert!(s.has_draft(LineTable::Shipping));
    }

    #[test]
    fn test_payment_dialog_round_trip() {
        let mut s = session();
        s.open_payment_dialog();
        assert!(!s.payment().dialog_open());

        s.begin_add(LineTable::Items);
        s.commit_add(LineTable::Items);
        s.open_payment_dialog();
        assert!(s.payment().dialog_open());
        s.confirm_payment();
        assert!(!s.payment().dialog_open());
        assert!(!s.payment().enabled());

        s.begin_add(LineTable::Items);
        s.commit_add(LineTable::Items);
        s.open_payment_dialog();
        s.cancel_payment();
        assert!(!s.payment().dialog_open());
        assert!(!s.payment().enabled());
    }

    #[test]
    fn test_column_visibility_dispatch() {
        let mut s = session();
        assert!(s.is_column_visible(LineTable::Items, "quantity"));
        s.toggle_column(LineTable::Items, "quantity");
        assert!(!s.is_column_visible(LineTable::Items, "quantity"));
        // other tables are untouched
        assert!(s.is_column_visible(LineTable::Pricing, "quantity"));

        s.hide_all_columns(LineTable::Shipping);
        assert_eq!(
            s.hidden_columns(LineTable::Shipping).len(),
            s.columns(LineTable::Shipping).len()
        );
        s.show_all_columns(LineTable::Shipping);
        assert!(s.hidden_columns(LineTable::Shipping).is_empty());
    }

    #[test]
    fn test_draft_cells_follow_schema() {
        let mut s = session();
        s.begin_add(LineTable::Shipping);
        s.set_draft_field(LineTable::Shipping, "carrier", "Freeman");
        s.set_draft_field(LineTable::Shipping, "freight_charge", "125a0");
        let cells = s.draft_cells(LineTable::Shipping).unwrap();
        assert_eq!(cells, vec!["Freeman", "", "0", "0", "12.50"]);
    }
}
