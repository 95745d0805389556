use crate::icons::SpinIcon;
use leptos::prelude::*;
use web_sys::MouseEvent;

#[component]
pub fn ButtonIcon<F, IV>(
    #[prop(into)] busy_reader: Signal<bool>,
    on_click: impl Fn(MouseEvent) + 'static,
    inner_icon: F,
) -> impl IntoView
where
    F: Fn() -> IV,
    IV: IntoView,
{
    view! {
        <button
            disabled=move || busy_reader.get()
            class="inline-flex items-center rounded-full p-2 text-base font-semibold text-gray-500 hover:bg-sky-100 hover:text-sky-700"
            on:click=move |ev| {
                if !busy_reader.get() {
                    on_click(ev);
                }
            }
        >
            {inner_icon()}
        </button>
    }
}

/// The submit button of a form wired to an async action: disables itself
/// and shows a spinner while the action is pending. Submission itself is
/// the surrounding form's `on:submit`.
#[component]
pub fn BusyButton(
    #[prop(into)] busy_reader: Signal<bool>,
    #[prop(default = "")] label: &'static str,
    #[prop(default = "")] busy_label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="flex h-9 w-full items-center justify-center space-x-4 rounded-lg bg-sky-700 text-center text-sm font-medium text-white hover:bg-sky-600 disabled:opacity-60"
            disabled=move || busy_reader.get()
        >
            <Show when=move || busy_reader.get()>
                <SpinIcon inner_class="spinner animate-spin h-5 w-5 mr-2 text-white" />
            </Show>

            <span class="submit-text">
                {move || if busy_reader.get() { busy_label.to_string() } else { label.to_string() }}
            </span>
        </button>
    }
}
