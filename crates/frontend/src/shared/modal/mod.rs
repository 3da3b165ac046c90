//! Overlay dialog used by the photo lightbox.
//!
//! Closed by the close button, a click on the backdrop or Escape. The
//! Escape listener lives only as long as the modal is mounted.

use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title of the modal (optional)
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Extra class for the modal panel
    #[prop(optional, into)]
    class: String,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    // Handle overlay click
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class=format!("modal {}", class) role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get().unwrap_or_default()}</h2>
                    <button class="button button--icon modal__close" aria-label="Close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
