//! Generic modal dialog
//!
//! Closing is triggered by the close control, a click on the backdrop, or
//! the Escape key. The opener owns the `open` signal; the form inside owns
//! its own submit handling.

use leptos::{ev::keydown, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::icons::CloseIcon;

#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    /// Runs on every close path, before the dialog hides (form reset etc.)
    #[prop(optional, into)]
    on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let close = move || {
        if let Some(cb) = on_close {
            cb.run(());
        }
        open.set(false);
    };

    let _cleanup = use_event_listener(use_document(), keydown, move |evt| {
        if evt.key() == "Escape" && open.get_untracked() {
            close();
        }
    });

    view! {
        <div
            data-modal=""
            class="fixed inset-0 z-40 flex items-center justify-center bg-black/50"
            class=("hidden", move || !open.get())
            on:click=move |_| close()
        >
            // clicks inside the dialog must not reach the backdrop
            <div
                class="w-full max-w-lg rounded-lg bg-white p-6 shadow-xl"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="mb-4 flex items-center justify-between">
                    <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
                    <button
                        type="button"
                        data-close-modal=""
                        class="rounded-full p-1 text-gray-400 hover:bg-gray-100 hover:text-gray-600"
                        on:click=move |_| close()
                    >
                        <CloseIcon inner_class="h-5 w-5" />
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
