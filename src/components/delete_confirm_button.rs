//! Delete Confirm Button Component
//!
//! Inline delete button that asks for confirmation before running the
//! caller's delete action. Cancel is a pure UI state change.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a delete button initially. When clicked, swaps to a "Delete?"
/// prompt with confirm/cancel; the `on_confirm` callback runs only on an
/// explicit confirm click.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
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
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
