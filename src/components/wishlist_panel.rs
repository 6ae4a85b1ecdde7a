//! Wishlist panel: create, read, search, update and delete wishlists.
//!
//! SYSTEM CONTEXT
//! ==============
//! The edit table is built from the root's registry snapshot. Read and search
//! results go to this panel's own tables. Successful mutations call
//! `on_mutated` so the root refreshes the registry.

#[cfg(test)]
#[path = "wishlist_panel_test.rs"]
mod wishlist_panel_test;

use leptos::prelude::*;

use crate::components::record_table::listing_view;
use crate::components::result_box::ResultBox;
use crate::net::ApiDispatcher;
use crate::net::types::Wishlist;
use crate::state::outcome::Mutation;
use crate::state::registry::WishlistRegistry;
use crate::state::wishlists::{self, WishlistPanelState};
use crate::task;

fn finish_mutation(
    panel: RwSignal<WishlistPanelState>,
    on_mutated: Callback<()>,
    mutation: &Mutation,
) {
    panel.update(|s| s.finish(mutation));
    if mutation.refresh {
        on_mutated.run(());
    }
}

#[component]
pub fn WishlistPanel(
    registry: ReadSignal<WishlistRegistry>,
    on_mutated: Callback<()>,
) -> impl IntoView {
    let dispatcher = StoredValue::new(expect_context::<ApiDispatcher>());
    let panel = RwSignal::new(WishlistPanelState::default());

    let name = RwSignal::new(String::new());
    let customer_id = RwSignal::new(String::new());
    let read_id = RwSignal::new(String::new());
    let search_customer_id = RwSignal::new(String::new());

    let on_clear = Callback::new(move |()| panel.update(WishlistPanelState::clear_result));

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let d = dispatcher.get_value();
        let (name_value, customer_value) = (name.get_untracked(), customer_id.get_untracked());
        panel.update(WishlistPanelState::begin);
        task::spawn(async move {
            let mutation = wishlists::create(&d, &name_value, &customer_value).await;
            finish_mutation(panel, on_mutated, &mutation);
        });
    };

    let on_read_all = move |_| {
        let d = dispatcher.get_value();
        panel.update(WishlistPanelState::begin);
        task::spawn(async move {
            let query = wishlists::list(&d).await;
            panel.update(|s| s.show_read(query));
        });
    };

    let on_read_one = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let d = dispatcher.get_value();
        let id_value = read_id.get_untracked();
        panel.update(WishlistPanelState::begin);
        task::spawn(async move {
            let query = wishlists::read_one(&d, &id_value).await;
            panel.update(|s| s.show_read(query));
        });
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let d = dispatcher.get_value();
        let customer_value = search_customer_id.get_untracked();
        panel.update(WishlistPanelState::begin);
        task::spawn(async move {
            let query = wishlists::search(&d, &customer_value).await;
            panel.update(|s| s.show_search(query));
        });
    };

    let on_update = Callback::new(move |(index, row_name, row_customer): (usize, String, String)| {
        let row_id = registry.with_untracked(|r| r.get(index).map(|w| w.id));
        if row_id.is_none() {
            return;
        }
        let d = dispatcher.get_value();
        panel.update(WishlistPanelState::begin);
        task::spawn(async move {
            let updated = wishlists::update(&d, row_id, &row_name, &row_customer).await;
            if let Some(mutation) = updated {
                finish_mutation(panel, on_mutated, &mutation);
            }
        });
    });

    let on_delete = Callback::new(move |index: usize| {
        let row_id = registry.with_untracked(|r| r.get(index).map(|w| w.id));
        if row_id.is_none() {
            return;
        }
        let d = dispatcher.get_value();
        panel.update(WishlistPanelState::begin);
        task::spawn(async move {
            if let Some(mutation) = wishlists::delete(&d, row_id).await {
                finish_mutation(panel, on_mutated, &mutation);
            }
        });
    });

    let modify_instructions = move || {
        if registry.get().is_empty() {
            "Add a wishlist to run update and delete operations."
        } else {
            "Update or delete an existing wishlist below."
        }
    };

    view! {
        <section class="form-container wishlist-panel">
            <h2>"Wishlists"</h2>
            <ResultBox result=Signal::derive(move || panel.get().result) id_prefix="wishlist" on_clear=on_clear/>

            <div class="instructions">"Create a new wishlist below."</div>
            <form class="form" on:submit=on_create>
                <div class="inputContainer">
                    <label for="wishlist_name">"Name:"</label>
                    <input
                        type="text"
                        id="wishlist_name"
                        name="wishlist_name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="inputContainer">
                    <label for="customer_id">"Customer ID:"</label>
                    <input
                        type="text"
                        id="customer_id"
                        name="customer_id"
                        prop:value=move || customer_id.get()
                        on:input=move |ev| customer_id.set(event_target_value(&ev))
                    />
                </div>
                <button id="wishlist_create" type="submit">"Create Wishlist"</button>
            </form>
        </section>

        <section class="form-container">
            <div class="instructions">"Read all wishlists, or one wishlist by ID."</div>
            <button id="wishlist_read" on:click=on_read_all>"Read Wishlists"</button>
            <form class="form" on:submit=on_read_one>
                <div class="inputContainer">
                    <label for="read_wishlist_id">"Wishlist ID:"</label>
                    <input
                        type="text"
                        id="read_wishlist_id"
                        name="read_wishlist_id"
                        prop:value=move || read_id.get()
                        on:input=move |ev| read_id.set(event_target_value(&ev))
                    />
                </div>
                <button id="wishlist_read_one" type="submit">"Read Wishlist"</button>
            </form>
            <div class="readTable" id="wishlist_read_table">
                {move || listing_view(panel.get().read_listing)}
            </div>
        </section>

        <section class="form-container">
            <div class="instructions">"Search for wishlists by Customer ID."</div>
            <form class="form" on:submit=on_search>
                <div class="inputContainer">
                    <label for="search_customer_id">"Customer ID:"</label>
                    <input
                        type="text"
                        id="search_customer_id"
                        name="search_customer_id"
                        prop:value=move || search_customer_id.get()
                        on:input=move |ev| search_customer_id.set(event_target_value(&ev))
                    />
                </div>
                <button id="wishlist_search" type="submit">"Search Wishlists"</button>
            </form>
            <div class="searchTable" id="wishlist_search_table">
                {move || listing_view(panel.get().search_listing)}
            </div>
        </section>

        <div class="instructions">{modify_instructions}</div>
        <Show when=move || !registry.get().is_empty()>
            <section class="form-container">
                <table class="wishlistTable">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Customer ID"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            registry
                                .get()
                                .wishlists()
                                .iter()
                                .enumerate()
                                .map(|(index, wishlist)| {
                                    view! {
                                        <WishlistRow
                                            index=index
                                            wishlist=wishlist.clone()
                                            on_update=on_update
                                            on_delete=on_delete
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>
        </Show>
    }
}

/// One editable registry row. Edits stay local until Update is pressed.
#[component]
fn WishlistRow(
    index: usize,
    wishlist: Wishlist,
    on_update: Callback<(usize, String, String)>,
    on_delete: Callback<usize>,
) -> impl IntoView {
    let name = RwSignal::new(wishlist.name.clone());
    let customer_id = RwSignal::new(wishlist.customer_id.to_string());

    view! {
        <tr class="dataRow">
            <td class="cellId">{wishlist.id}</td>
            <td class="cellName">
                <input
                    type="text"
                    id=format!("wishlist_name_{index}")
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </td>
            <td class="cellCustomerId">
                <input
                    type="text"
                    id=format!("wishlist_customer_id_{index}")
                    prop:value=move || customer_id.get()
                    on:input=move |ev| customer_id.set(event_target_value(&ev))
                />
            </td>
            <td class="cellAction">
                <button
                    id=format!("wishlist_update_{index}")
                    on:click=move |_| on_update.run((index, name.get_untracked(), customer_id.get_untracked()))
                >
                    "Update Wishlist"
                </button>
                <button id=format!("wishlist_delete_{index}") on:click=move |_| on_delete.run(index)>
                    "Delete Wishlist"
                </button>
            </td>
        </tr>
    }
}
