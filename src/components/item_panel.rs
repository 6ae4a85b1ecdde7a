//! Item panel: pick a wishlist, then manage its items.
//!
//! SYSTEM CONTEXT
//! ==============
//! Item forms only render while a wishlist is selected, and every handler
//! re-checks for an `ItemScope` before dispatching. Selection follows the
//! registry: a deleted wishlist is deselected, a renamed one is relabelled.

use leptos::prelude::*;

use crate::components::record_table::listing_view;
use crate::components::result_box::ResultBox;
use crate::net::ApiDispatcher;
use crate::net::types::Item;
use crate::state::items::{self, ItemPanelState, ItemScope};
use crate::state::outcome::Mutation;
use crate::state::registry::WishlistRegistry;
use crate::task;

fn refetch(dispatcher: ApiDispatcher, panel: RwSignal<ItemPanelState>, scope: ItemScope) {
    task::spawn(async move {
        let fetched = items::fetch_items(&dispatcher, scope).await;
        panel.update(|s| {
            s.apply_items(scope, fetched);
        });
    });
}

fn finish_mutation(
    dispatcher: ApiDispatcher,
    panel: RwSignal<ItemPanelState>,
    scope: ItemScope,
    mutation: &Mutation,
) {
    let applied = panel.try_update(|s| s.finish(scope, mutation)).unwrap_or(false);
    if applied && mutation.refresh {
        refetch(dispatcher, panel, scope);
    }
}

/// Which row action was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowAction {
    Update,
    Delete,
    Purchase,
}

#[component]
pub fn ItemPanel(registry: ReadSignal<WishlistRegistry>) -> impl IntoView {
    let dispatcher = StoredValue::new(expect_context::<ApiDispatcher>());
    let panel = RwSignal::new(ItemPanelState::default());
    let new_item_name = RwSignal::new(String::new());

    Effect::new(move || {
        let snapshot = registry.get();
        let current = panel.get_untracked();
        let mut next = current.clone();
        next.reconcile(&snapshot);
        if next != current {
            panel.set(next);
        }
    });

    let on_clear = Callback::new(move |()| panel.update(ItemPanelState::clear_result));

    let on_select = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let wishlist = value
            .parse::<i64>()
            .ok()
            .and_then(|id| registry.with_untracked(|r| r.find(id).cloned()));
        new_item_name.set(String::new());
        if let Some(scope) = panel.try_update(|s| s.select(wishlist)).flatten() {
            refetch(dispatcher.get_value(), panel, scope);
        }
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(scope) = panel.with_untracked(ItemPanelState::scope) else {
            return;
        };
        let d = dispatcher.get_value();
        let name_value = new_item_name.get_untracked();
        panel.update(ItemPanelState::begin);
        task::spawn(async move {
            let mutation = items::create(&d, scope, &name_value).await;
            finish_mutation(d, panel, scope, &mutation);
        });
    };

    let on_read = move |_| {
        let Some(scope) = panel.with_untracked(ItemPanelState::scope) else {
            return;
        };
        let d = dispatcher.get_value();
        panel.update(ItemPanelState::begin);
        task::spawn(async move {
            let query = items::list(&d, scope).await;
            panel.update(|s| {
                s.show_read(scope, query);
            });
        });
    };

    let on_row_action = Callback::new(move |(action, item_id, name): (RowAction, i64, String)| {
        let Some(scope) = panel.with_untracked(ItemPanelState::scope) else {
            return;
        };
        let d = dispatcher.get_value();
        panel.update(ItemPanelState::begin);
        task::spawn(async move {
            let mutation = match action {
                RowAction::Update => items::update(&d, scope, Some(item_id), &name).await,
                RowAction::Delete => items::delete(&d, scope, Some(item_id)).await,
                RowAction::Purchase => items::purchase(&d, scope, Some(item_id)).await,
            };
            if let Some(mutation) = mutation {
                finish_mutation(d, panel, scope, &mutation);
            }
        });
    });

    let selected_name = move || {
        panel
            .get()
            .selected()
            .map(|w| w.name.clone())
            .unwrap_or_default()
    };

    view! {
        <section class="form-container item-panel">
            <h2>"Items"</h2>
            <ResultBox result=Signal::derive(move || panel.get().result) id_prefix="item" on_clear=on_clear/>

            <Show
                when=move || !registry.get().is_empty()
                fallback=|| view! { <p class="instructions">"Create a wishlist before running CRUD operations on Items."</p> }
            >
                <div class="form-container">
                    <div class="instructions">"Select a Wishlist to perform Item CRUD operations."</div>
                    <label for="wishlist_selector">"Wishlist:"</label>
                    <select
                        id="wishlist_selector"
                        name="wishlist_id"
                        on:change=on_select
                        prop:value=move || panel.get().selected().map(|w| w.id.to_string()).unwrap_or_default()
                    >
                        <option value="">"-- select a Wishlist --"</option>
                        {move || {
                            registry
                                .get()
                                .wishlists()
                                .iter()
                                .map(|w| view! { <option value=w.id.to_string()>{w.name.clone()}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
            </Show>

            <Show when=move || panel.get().scope().is_some()>
                <div class="form-container">
                    <div class="instructions">
                        "Add an item to the " <strong>{selected_name}</strong> " wishlist below."
                    </div>
                    <form class="form" on:submit=on_create>
                        <label for="item_name">"Item Name:"</label>
                        <input
                            type="text"
                            id="item_name"
                            name="item_name"
                            prop:value=move || new_item_name.get()
                            on:input=move |ev| new_item_name.set(event_target_value(&ev))
                        />
                        <button id="item_create" type="submit">"Add Item"</button>
                    </form>
                </div>
                <div class="form-container">
                    <div class="instructions">
                        "Read items on the " <strong>{selected_name}</strong> " wishlist below."
                    </div>
                    <button id="item_read" on:click=on_read>"Read Items"</button>
                    <div class="readTable" id="item_read_table">
                        {move || listing_view(panel.get().read_listing)}
                    </div>
                </div>
                <Show
                    when=move || !panel.get().items.is_empty()
                    fallback=|| view! {
                        <div class="instructions">
                            "Add an item to this wishlist before running update, delete or purchase operations on items."
                        </div>
                    }
                >
                    <div class="instructions">"Update, delete or purchase an item on this wishlist below."</div>
                    <table class="wishlistTable">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Purchased"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                panel
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|item| view! { <ItemRow item=item on_action=on_row_action/> })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn ItemRow(item: Item, on_action: Callback<(RowAction, i64, String)>) -> impl IntoView {
    let id = item.id;
    let name = RwSignal::new(item.name.clone());
    let fire = move |action: RowAction| on_action.run((action, id, name.get_untracked()));

    view! {
        <tr class="dataRow">
            <td class="cellId">{id}</td>
            <td class="cellName">
                <input
                    type="text"
                    id=format!("item_name_{id}")
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </td>
            <td class="cellPurchased">{item.purchased.to_string()}</td>
            <td class="cellAction">
                <button id=format!("item_update_{id}") on:click=move |_| fire(RowAction::Update)>
                    "Update Item"
                </button>
                <button id=format!("item_delete_{id}") on:click=move |_| fire(RowAction::Delete)>
                    "Delete Item"
                </button>
                <button
                    id=format!("item_purchase_{id}")
                    disabled=item.purchased
                    on:click=move |_| fire(RowAction::Purchase)
                >
                    "Purchase Item"
                </button>
            </td>
        </tr>
    }
}
