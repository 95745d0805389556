//! Search box with a clear control

use leptos::prelude::*;

use crate::icons::{CloseIcon, SearchIcon};

#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    on_search: Callback<String>,
    #[prop(default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="relative flex w-full max-w-md items-center">
            <label for="search-field" class="absolute left-3 text-gray-400">
                <SearchIcon inner_class="h-5 w-5" />
            </label>
            <input
                id="search-field"
                type="search"
                class="w-full rounded-lg border border-gray-300 py-2 pl-10 pr-10 text-sm"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            <button
                id="clear-search"
                type="button"
                class="absolute right-3 text-gray-400 hover:text-gray-600"
                class=("hidden", move || value.read().is_empty())
                on:click=move |_| on_search.run(String::new())
            >
                <CloseIcon inner_class="h-4 w-4" />
            </button>
        </div>
    }
}
