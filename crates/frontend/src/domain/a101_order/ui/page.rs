use leptos::prelude::*;

use super::details::OrderDetails;
use super::list::OrderList;
use super::view_model::OrdersViewModel;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let vm = OrdersViewModel::new();

    view! {
        <div class="orders-page">
            <OrderList vm=vm />
            <OrderDetails vm=vm />
        </div>
    }
}
