use leptos::prelude::*;

use contracts::shared::date_utils::format_date_mmddyyyy;
use contracts::shared::money::format_currency_str;

use super::line_table::LineItemTable;
use super::payment_dialog::PaymentDialog;
use crate::domain::a101_order::session::{EditTab, LineTable};
use crate::domain::a101_order::ui::view_model::OrdersViewModel;

const MAIN_FIELDS: &[(&str, &str)] = &[
    ("customer_po", "Customer PO"),
    ("terms", "Terms"),
    ("sales_channel", "Sales Channel"),
    ("order_date", "Order Date"),
];

const OTHERS_FIELDS: &[(&str, &str)] = &[
    ("warehouse", "Warehouse"),
    ("order_method", "Order Method"),
    ("sales_person", "Sales Person"),
    ("exhibitor", "Exhibitor"),
];

const ADDRESS_FIELDS: &[(&str, &str)] = &[
    ("contact_name", "Contact Name"),
    ("phone", "Phone"),
    ("fax", "Fax"),
    ("email", "Email"),
];

#[component]
#[allow(non_snake_case)]
pub fn OrderDetails(vm: OrdersViewModel) -> impl IntoView {
    let session = vm.session;

    view! {
        <div class="order-details">
            {move || {
                let Some(order) = session.with(|s| s.selected_order().cloned()) else {
                    return view! { <div class="order-details__empty">"No order selected"</div> }
                        .into_any();
                };
                view! {
                    <div class="order-details__header">
                        <h2 class="order-details__title">
                            {format!("Order #{} / {}", order.order_id, order.customer)}
                        </h2>
                        <div class="order-details__summary">
                            <span class="form__label">"Project:"</span>
                            <span>{order.project.clone()}</span>
                            <span class="form__label">"Source:"</span>
                            <span>{order.source.clone()}</span>
                            <span class="form__label">"Order Date:"</span>
                            <span>{format_date_mmddyyyy(&order.order_date)}</span>
                            <span class="form__label">"Subtotal:"</span>
                            <span class="num">{format_currency_str(&order.subtotal)}</span>
                            <span class="form__label">"Tax:"</span>
                            <span class="num">{format_currency_str(&order.tax)}</span>
                            <span class="form__label">"Cancel Charge:"</span>
                            <span class="num">{format_currency_str(&order.cancel_charge)}</span>
                            <span class="form__label">"Total:"</span>
                            <strong class="num">{format_currency_str(&order.total)}</strong>
                        </div>
                    </div>
                }
                    .into_any()
            }}

            <div class="order-details__tabs">
                <TabButton vm=vm tab=EditTab::Main label="Main" />
                <TabButton vm=vm tab=EditTab::Others label="Others" />
                <TabButton vm=vm tab=EditTab::Address label="Address" />
            </div>

            <div class="order-details__form">
                {move || {
                    let tab = session.with(|s| s.active_tab());
                    let fields = match tab {
                        EditTab::Main => MAIN_FIELDS,
                        EditTab::Others => OTHERS_FIELDS,
                        EditTab::Address => ADDRESS_FIELDS,
                    };
                    fields
                        .iter()
                        .map(|&(key, label)| {
                            view! { <BufferField vm=vm tab=tab key=key label=label /> }
                        })
                        .collect_view()
                }}

                <div class="order-details__form-actions">
                    <button
                        class="primary"
                        prop:disabled=move || session.with(|s| !s.is_dirty())
                        on:click=move |_| vm.save()
                    >
                        "Save"
                    </button>
                    <button
                        prop:disabled=move || session.with(|s| !s.is_dirty())
                        on:click=move |_| vm.cancel()
                    >
                        "Cancel"
                    </button>
                </div>
            </div>

            <LineItemTable vm=vm table=LineTable::Items />
            <LineItemTable vm=vm table=LineTable::Pricing />
            <LineItemTable vm=vm table=LineTable::Shipping />

            <div class="order-details__payment">
                <button
                    class="primary"
                    prop:disabled=move || session.with(|s| !s.payment().enabled())
                    on:click=move |_| vm.open_payment_dialog()
                >
                    "Payment"
                </button>
            </div>

            <PaymentDialog vm=vm />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn TabButton(vm: OrdersViewModel, tab: EditTab, label: &'static str) -> impl IntoView {
    let session = vm.session;

    view! {
        <button
            class="order-details__tab"
            class:active=move || session.with(|s| s.active_tab() == tab)
            on:click=move |_| vm.set_active_tab(tab)
        >
            {label}
        </button>
    }
}

/// One editable buffer field, bound by `(tab, key)`. Writes are permissive;
/// the session recomputes the dirty flag on every keystroke.
#[component]
#[allow(non_snake_case)]
fn BufferField(
    vm: OrdersViewModel,
    tab: EditTab,
    key: &'static str,
    label: &'static str,
) -> impl IntoView {
    let session = vm.session;

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="text"
                prop:value=move || session.with(|s| s.buffers().field(tab, key))
                on:input=move |ev| vm.set_field(tab, key, event_target_value(&ev))
            />
        </div>
    }
}
