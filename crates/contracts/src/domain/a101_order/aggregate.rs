use serde::{Deserialize, Serialize};

use crate::shared::money::normalize_currency_keystroke;
use crate::shared::table::{number_to_raw, parse_number, ColumnDef, ColumnKind, TableRow};

// ============================================================================
// Order header
// ============================================================================

/// Order header as supplied by the (out-of-core) data source.
///
/// Identity fields are immutable for the lifetime of the record; the four
/// money fields are canonical decimal strings with exactly two fraction
/// digits. Edits happen in the session's buffers, never on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub customer: String,
    pub project: String,
    pub source: String,
    pub terms: String,
    pub sales_channel: String,
    pub order_date: String,
    pub subtotal: String,
    pub tax: String,
    pub cancel_charge: String,
    pub total: String,
}

// ============================================================================
// Line-item rows
// ============================================================================

/// Line of the "Order Items" table. Duplicate `order_item` codes are
/// permitted; rows have no natural key beyond display identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRow {
    pub order_item: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: String,
    pub amount: String,
}

impl Default for OrderItemRow {
    fn default() -> Self {
        Self {
            order_item: String::new(),
            description: String::new(),
            quantity: 0.0,
            unit_price: "0.00".to_string(),
            amount: "0.00".to_string(),
        }
    }
}

const ORDER_ITEM_COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "order_item", label: "Order Item", kind: ColumnKind::Text },
    ColumnDef { key: "description", label: "Description", kind: ColumnKind::Text },
    ColumnDef { key: "quantity", label: "Qty", kind: ColumnKind::Number },
    ColumnDef { key: "unit_price", label: "Unit Price", kind: ColumnKind::Currency },
    ColumnDef { key: "amount", label: "Amount", kind: ColumnKind::Currency },
];

impl TableRow for OrderItemRow {
    fn columns() -> &'static [ColumnDef] {
        ORDER_ITEM_COLUMNS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "order_item" => self.order_item.clone(),
            "description" => self.description.clone(),
            "quantity" => number_to_raw(self.quantity),
            "unit_price" => self.unit_price.clone(),
            "amount" => self.amount.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, raw: &str) {
        match key {
            "order_item" => self.order_item = raw.to_string(),
            "description" => self.description = raw.to_string(),
            "quantity" => self.quantity = parse_number(raw),
            "unit_price" => self.unit_price = normalize_currency_keystroke(&self.unit_price, raw),
            "amount" => self.amount = normalize_currency_keystroke(&self.amount, raw),
            _ => {}
        }
    }
}

/// Line of the "Pricing" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRow {
    pub description: String,
    pub quantity: f64,
    pub rate: String,
    pub discount: String,
    pub amount: String,
}

impl Default for PricingRow {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: 0.0,
            rate: "0.00".to_string(),
            discount: "0.00".to_string(),
            amount: "0.00".to_string(),
        }
    }
}

const PRICING_COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "description", label: "Description", kind: ColumnKind::Text },
    ColumnDef { key: "quantity", label: "Qty", kind: ColumnKind::Number },
    ColumnDef { key: "rate", label: "Rate", kind: ColumnKind::Currency },
    ColumnDef { key: "discount", label: "Discount", kind: ColumnKind::Currency },
    ColumnDef { key: "amount", label: "Amount", kind: ColumnKind::Currency },
];

impl TableRow for PricingRow {
    fn columns() -> &'static [ColumnDef] {
        PRICING_COLUMNS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "description" => self.description.clone(),
            "quantity" => number_to_raw(self.quantity),
            "rate" => self.rate.clone(),
            "discount" => self.discount.clone(),
            "amount" => self.amount.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, raw: &str) {
        match key {
            "description" => self.description = raw.to_string(),
            "quantity" => self.quantity = parse_number(raw),
            "rate" => self.rate = normalize_currency_keystroke(&self.rate, raw),
            "discount" => self.discount = normalize_currency_keystroke(&self.discount, raw),
            "amount" => self.amount = normalize_currency_keystroke(&self.amount, raw),
            _ => {}
        }
    }
}

/// Line of the "Shipping" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRow {
    pub carrier: String,
    pub tracking_number: String,
    pub pieces: f64,
    pub weight: f64,
    pub freight_charge: String,
}

impl Default for ShippingRow {
    fn default() -> Self {
        Self {
            carrier: String::new(),
            tracking_number: String::new(),
            pieces: 0.0,
            weight: 0.0,
            freight_charge: "0.00".to_string(),
        }
    }
}

const SHIPPING_COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "carrier", label: "Carrier", kind: ColumnKind::Text },
    ColumnDef { key: "tracking_number", label: "Tracking #", kind: ColumnKind::Text },
    ColumnDef { key: "pieces", label: "Pieces", kind: ColumnKind::Number },
    ColumnDef { key: "weight", label: "Weight", kind: ColumnKind::Number },
    ColumnDef { key: "freight_charge", label: "Freight", kind: ColumnKind::Currency },
];

impl TableRow for ShippingRow {
    fn columns() -> &'static [ColumnDef] {
        SHIPPING_COLUMNS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "carrier" => self.carrier.clone(),
            "tracking_number" => self.tracking_number.clone(),
            "pieces" => number_to_raw(self.pieces),
            "weight" => number_to_raw(self.weight),
            "freight_charge" => self.freight_charge.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, raw: &str) {
        match key {
            "carrier" => self.carrier = raw.to_string(),
            "tracking_number" => self.tracking_number = raw.to_string(),
            "pieces" => self.pieces = parse_number(raw),
            "weight" => self.weight = parse_number(raw),
            "freight_charge" => {
                self.freight_charge = normalize_currency_keystroke(&self.freight_charge, raw)
            }
            _ => {}
        }
    }
}
