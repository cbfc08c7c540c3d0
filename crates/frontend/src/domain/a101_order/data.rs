//! Static mock data source for the orders screen.
//!
//! Out-of-core collaborator: supplied once, read-only. The session's row
//! collections diverge from this seed as rows are added; nothing is ever
//! written back here.

use contracts::domain::a101_order::aggregate::{Order, OrderItemRow, PricingRow, ShippingRow};

use super::session::OrdersSeed;

pub fn seed() -> OrdersSeed {
    OrdersSeed {
        orders: seed_orders(),
        items: seed_order_items(),
        pricing: seed_pricing(),
        shipping: seed_shipping(),
    }
}

fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            order_id: "577725".to_string(),
            customer: "Prime Exhibits LLC".to_string(),
            project: "SPRING HOME & GARDEN EXPO".to_string(),
            source: "EXH".to_string(),
            terms: "NET 30".to_string(),
            sales_channel: "Direct".to_string(),
            order_date: "23-APR-2025 11:06:41".to_string(),
            subtotal: "12575.00".to_string(),
            tax: "1006.00".to_string(),
            cancel_charge: "0.00".to_string(),
            total: "13581.00".to_string(),
        },
        Order {
            order_id: "577801".to_string(),
            customer: "Vista Booth Co".to_string(),
            project: "SPRING HOME & GARDEN EXPO".to_string(),
            source: "WEB".to_string(),
            terms: "CC ON FILE".to_string(),
            sales_channel: "Online".to_string(),
            order_date: "25-APR-2025 09:14:02".to_string(),
            subtotal: "3420.00".to_string(),
            tax: "273.60".to_string(),
            cancel_charge: "0.00".to_string(),
            total: "3693.60".to_string(),
        },
        Order {
            order_id: "578340".to_string(),
            customer: "Northline Displays".to_string(),
            project: "TECH SUMMIT WEST".to_string(),
            source: "EXH".to_string(),
            terms: "PREPAID".to_string(),
            sales_channel: "Direct".to_string(),
            order_date: "2025-05-02T14:22:10".to_string(),
            subtotal: "8900.00".to_string(),
            tax: "712.00".to_string(),
            cancel_charge: "150.00".to_string(),
            total: "9762.00".to_string(),
        },
        Order {
            order_id: "579112".to_string(),
            customer: "Castellan Group".to_string(),
            project: "TECH SUMMIT WEST".to_string(),
            source: "PHN".to_string(),
            terms: "NET 15".to_string(),
            sales_channel: "Phone".to_string(),
            order_date: "08-MAY-2025 16:47:33".to_string(),
            subtotal: "1150.00".to_string(),
            tax: "92.00".to_string(),
            cancel_charge: "0.00".to_string(),
            total: "1242.00".to_string(),
        },
        Order {
            order_id: "579870".to_string(),
            customer: "Harbor & Finch Events".to_string(),
            project: "NATIONAL CRAFT FAIR".to_string(),
            source: "WEB".to_string(),
            terms: "NET 30".to_string(),
            sales_channel: "Online".to_string(),
            order_date: "2025-05-19".to_string(),
            subtotal: "560.00".to_string(),
            tax: "44.80".to_string(),
            cancel_charge: "0.00".to_string(),
            total: "604.80".to_string(),
        },
    ]
}

fn seed_order_items() -> Vec<OrderItemRow> {
    vec![
        OrderItemRow {
            order_item: "BTH-10X10".to_string(),
            description: "10x10 inline booth package".to_string(),
            quantity: 1.0,
            unit_price: "9500.00".to_string(),
            amount: "9500.00".to_string(),
        },
        OrderItemRow {
            order_item: "CRP-STD".to_string(),
            description: "Standard carpet, per sq ft".to_string(),
            quantity: 100.0,
            unit_price: "4.25".to_string(),
            amount: "425.00".to_string(),
        },
        OrderItemRow {
            // duplicate item codes are permitted; rows only have display identity
            order_item: "CRP-STD".to_string(),
            description: "Carpet padding upgrade".to_string(),
            quantity: 100.0,
            unit_price: "1.50".to_string(),
            amount: "150.00".to_string(),
        },
    ]
}

fn seed_pricing() -> Vec<PricingRow> {
    vec![
        PricingRow {
            description: "Advance-order discount".to_string(),
            quantity: 1.0,
            rate: "250.00".to_string(),
            discount: "250.00".to_string(),
            amount: "-250.00".to_string(),
        },
        PricingRow {
            description: "Material handling, per cwt".to_string(),
            quantity: 12.0,
            rate: "185.00".to_string(),
            discount: "0.00".to_string(),
            amount: "2220.00".to_string(),
        },
    ]
}

fn seed_shipping() -> Vec<ShippingRow> {
    vec![ShippingRow {
        carrier: "Freeman Transportation".to_string(),
        tracking_number: "FT-4482019".to_string(),
        pieces: 6.0,
        weight: 1180.0,
        freight_charge: "880.00".to_string(),
    }]
}
