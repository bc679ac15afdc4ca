//! Delete Confirm Button Component
//!
//! Two-step destructive button with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows `label` initially. Clicking it only calls `on_request`; the
/// destructive `on_confirm` runs from the ✓ button that appears while
/// `pending` is true.
///
/// # Arguments
/// * `button_class` - CSS class for the initial button
/// * `confirm_text` - Question shown next to ✓/✗
/// * `pending` - Whether a confirmation is currently requested
/// * `on_request` / `on_confirm` / `on_cancel` - step callbacks
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] confirm_text: String,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_request: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || !pending.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_request.run(());
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || pending.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{confirm_text.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_cancel.run(());
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
