use leptos::prelude::*;

use crate::domain::a101_order::ui::view_model::OrdersViewModel;

/// Local confirmation dialog; no real payment processing happens here.
/// Confirm and Cancel both disarm the gate until the next committed row.
#[component]
#[allow(non_snake_case)]
pub fn PaymentDialog(vm: OrdersViewModel) -> impl IntoView {
    let session = vm.session;

    view! {
        <Show when=move || session.with(|s| s.payment().dialog_open())>
            <div class="dialog-overlay">
                <div class="dialog">
                    <h3 class="dialog__title">"Confirm Payment"</h3>
                    <p class="dialog__body">
                        "Apply payment for the newly added rows on this order?"
                    </p>
                    <div class="dialog__actions">
                        <button class="primary" on:click=move |_| vm.confirm_payment()>
                            "Confirm"
                        </button>
                        <button on:click=move |_| vm.cancel_payment()>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
