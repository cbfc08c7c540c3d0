use leptos::prelude::*;

use contracts::domain::a101_order::aggregate::Order;
use contracts::shared::date_utils::format_date_mmddyyyy;
use contracts::shared::money::format_currency_str;

use crate::domain::a101_order::ui::view_model::OrdersViewModel;

#[component]
#[allow(non_snake_case)]
pub fn OrderList(vm: OrdersViewModel) -> impl IntoView {
    let session = vm.session;

    view! {
        <div class="order-list">
            <div class="order-list__search">
                <input
                    type="text"
                    placeholder="Search by order #"
                    prop:value=move || session.with(|s| s.search_query().to_string())
                    on:input=move |ev| vm.set_search(event_target_value(&ev))
                />
            </div>

            <table class="order-list__table">
                <thead>
                    <tr>
                        <th>"Order #"</th>
                        <th>"Customer"</th>
                        <th>"Project"</th>
                        <th>"Order Date"</th>
                        <th class="num">"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || {
                            session.with(|s| {
                                s.filtered_orders().into_iter().cloned().collect::<Vec<Order>>()
                            })
                        }
                        key=|order| order.order_id.clone()
                        children=move |order| {
                            let id = order.order_id.clone();
                            let selected = {
                                let id = id.clone();
                                move || session.with(|s| s.selected_order_id() == Some(id.as_str()))
                            };
                            view! {
                                <tr class:selected=selected on:click=move |_| vm.select_order(&id)>
                                    <td>{order.order_id.clone()}</td>
                                    <td>{order.customer.clone()}</td>
                                    <td>{order.project.clone()}</td>
                                    <td>{format_date_mmddyyyy(&order.order_date)}</td>
                                    <td class="num">{format_currency_str(&order.total)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
