//! Transaction result box shared by both panels.

use leptos::prelude::*;

use crate::state::transaction::TransactionResult;

/// Shows status, response code and message of the panel's latest
/// operation, with a button that resets it to "awaiting".
#[component]
pub fn ResultBox(
    #[prop(into)] result: Signal<TransactionResult>,
    id_prefix: &'static str,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="resultInstructions">
            "The box below will display the result of the transaction (success or errors)."
        </div>
        <div class="resultBox">
            <div class="resultStatus" id=format!("{id_prefix}_result_status")>
                "Status: "
                {move || result.get().status.label()}
            </div>
            <div class="responseCode" id=format!("{id_prefix}_response_code")>
                "Response code: "
                {move || result.get().response_code_text()}
            </div>
            <div
                class=move || format!("result {}", result.get().message_class.css_class())
                id=format!("{id_prefix}_result")
            >
                {move || result.get().message}
            </div>
            <button id=format!("{id_prefix}_result_clear") on:click=move |_| on_clear.run(())>
                "Clear Result"
            </button>
        </div>
    }
}
