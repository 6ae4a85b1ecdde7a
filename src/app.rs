//! Root application component.
//!
//! Owns the wishlist registry and the dispatcher. The registry is loaded once
//! on mount and again whenever the wishlist panel reports a successful
//! mutation; both panels receive it read-only.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::item_panel::ItemPanel;
use crate::components::wishlist_panel::WishlistPanel;
use crate::config::AppConfig;
use crate::net::ApiDispatcher;
use crate::net::http::BrowserTransport;
use crate::state::registry::{WishlistRegistry, fetch_wishlists};
use crate::task;

/// Reload the registry. A failed load keeps the current snapshot.
fn refresh_registry(dispatcher: ApiDispatcher, registry: RwSignal<WishlistRegistry>) {
    task::spawn(async move {
        let fetched = fetch_wishlists(&dispatcher).await;
        registry.update(|r| r.apply(fetched));
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::detect();
    let dispatcher = ApiDispatcher::new(BrowserTransport, config.api);
    provide_context(dispatcher.clone());

    let registry = RwSignal::new(WishlistRegistry::default());
    let stored = StoredValue::new(dispatcher);
    let on_mutated = Callback::new(move |()| refresh_registry(stored.get_value(), registry));

    refresh_registry(stored.get_value(), registry);

    view! {
        <Title text="Wishlists"/>
        <main class="wishlist-admin">
            <WishlistPanel registry=registry.read_only() on_mutated=on_mutated/>
            <ItemPanel registry=registry.read_only()/>
        </main>
    }
}
