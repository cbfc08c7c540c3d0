use crate::domain::a101_order::ui::OrdersPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <header class="app__header">
                <h1 class="app__title">"Exhibition Orders"</h1>
            </header>
            <main class="app__main">
                <OrdersPage />
            </main>
        </div>
    }
}
