use leptos::prelude::*;

use contracts::shared::money::format_currency_str;
use contracts::shared::table::ColumnKind;

use crate::domain::a101_order::session::LineTable;
use crate::domain::a101_order::ui::view_model::OrdersViewModel;

/// One line-item table (order items, pricing or shipping), rendered
/// entirely off the table's static column schema: header cells, committed
/// rows and the draft-input row all walk the same `ColumnDef` list.
#[component]
#[allow(non_snake_case)]
pub fn LineItemTable(vm: OrdersViewModel, table: LineTable) -> impl IntoView {
    let session = vm.session;
    let columns = session.with_untracked(|s| s.columns(table));
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <section class="line-table">
            <div class="line-table__toolbar">
                <h3 class="line-table__title">
                    {table.title()}
                    <span class="line-table__count">
                        {move || session.with(|s| format!(" ({})", s.row_count(table)))}
                    </span>
                </h3>

                <div class="column-menu">
                    <button
                        class="column-menu__trigger"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "Columns"
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="column-menu__list">
                            <button on:click=move |_| vm.show_all_columns(table)>"Show all"</button>
                            <button on:click=move |_| vm.hide_all_columns(table)>"Hide all"</button>
                            {columns
                                .iter()
                                .map(|col| {
                                    let key = col.key;
                                    view! {
                                        <label class="column-menu__item">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    session.with(|s| s.is_column_visible(table, key))
                                                }
                                                on:change=move |_| vm.toggle_column(table, key)
                                            />
                                            {col.label}
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>

                <div class="line-table__actions">
                    <button
                        prop:disabled=move || session.with(|s| s.has_draft(table))
                        on:click=move |_| vm.begin_add(table)
                    >
                        "Add Row"
                    </button>
                    <Show when=move || session.with(|s| s.has_draft(table))>
                        <button class="primary" on:click=move |_| vm.commit_add(table)>
                            "Save Row"
                        </button>
                        <button on:click=move |_| vm.discard_draft(table)>"Discard"</button>
                    </Show>
                </div>
            </div>

            <table class="line-table__grid">
                <thead>
                    <tr>
                        {columns
                            .iter()
                            .map(|col| {
                                let key = col.key;
                                let label = col.label;
                                view! {
                                    <Show when=move || {
                                        session.with(|s| s.is_column_visible(table, key))
                                    }>
                                        <th>{label}</th>
                                    </Show>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        session.with(|s| {
                            s.committed_cells(table)
                                .into_iter()
                                .map(|cells| {
                                    let tds = columns
                                        .iter()
                                        .zip(cells)
                                        .filter(|(col, _)| s.is_column_visible(table, col.key))
                                        .map(|(col, raw)| {
                                            view! {
                                                <td class=cell_class(col.kind)>
                                                    {display_value(col.kind, &raw)}
                                                </td>
                                            }
                                        })
                                        .collect_view();
                                    view! { <tr>{tds}</tr> }
                                })
                                .collect_view()
                        })
                    }}
                    <Show when=move || session.with(|s| s.has_draft(table))>
                        <tr class="line-table__draft">
                            {columns
                                .iter()
                                .map(|col| {
                                    let key = col.key;
                                    let kind = col.kind;
                                    view! {
                                        <Show when=move || {
                                            session.with(|s| s.is_column_visible(table, key))
                                        }>
                                            <td>
                                                <input
                                                    type=input_type(kind)
                                                    prop:value=move || {
                                                        session.with(|s| s.draft_field(table, key))
                                                    }
                                                    on:input=move |ev| {
                                                        vm.set_draft_field(
                                                            table,
                                                            key,
                                                            &event_target_value(&ev),
                                                        )
                                                    }
                                                />
                                            </td>
                                        </Show>
                                    }
                                })
                                .collect_view()}
                        </tr>
                    </Show>
                </tbody>
            </table>
        </section>
    }
}

fn display_value(kind: ColumnKind, raw: &str) -> String {
    match kind {
        ColumnKind::Currency => format_currency_str(raw),
        ColumnKind::Number | ColumnKind::Text => raw.to_string(),
    }
}

fn cell_class(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Currency | ColumnKind::Number => "num",
        ColumnKind::Text => "",
    }
}

/// Currency fields are edited as raw digit strings (the keystroke
/// normalizer rewrites them), so they stay `text` inputs.
fn input_type(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Number => "number",
        ColumnKind::Currency | ColumnKind::Text => "text",
    }
}
