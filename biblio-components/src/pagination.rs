//! Pagination controls for the browse listing

use biblio_shared::pager::Pager;
use leptos::prelude::*;

use crate::icons::{ChevronLeftIcon, ChevronRightIcon};

#[component]
pub fn Pagination(#[prop(into)] pager: Signal<Pager>, on_page: Callback<u32>) -> impl IntoView {
    let goto = move |page: Option<u32>| {
        if let Some(page) = page {
            on_page.run(page);
        }
    };

    view! {
        <nav
            id="pagination"
            class="flex items-center justify-center gap-2 py-4"
            class=("hidden", move || pager.get().single_page())
        >
            <button
                id="prev-btn"
                type="button"
                class="rounded p-2 text-gray-600 hover:bg-gray-100 disabled:opacity-40"
                disabled=move || !pager.get().has_prev()
                on:click=move |_| goto(pager.get().prev())
            >
                <ChevronLeftIcon inner_class="h-5 w-5" />
            </button>

            <div id="links-container" class="flex gap-1">
                <For
                    each=move || pager.get().pages()
                    key=|page| *page
                    let:page
                >
                    <button
                        type="button"
                        class="link rounded px-3 py-1 text-sm hover:bg-gray-100"
                        class=("active", move || pager.get().current == page)
                        class=("font-bold", move || pager.get().current == page)
                        on:click=move |_| goto(pager.get().goto(page))
                    >
                        {page}
                    </button>
                </For>
            </div>

            <button
                id="next-btn"
                type="button"
                class="rounded p-2 text-gray-600 hover:bg-gray-100 disabled:opacity-40"
                disabled=move || !pager.get().has_next()
                on:click=move |_| goto(pager.get().next())
            >
                <ChevronRightIcon inner_class="h-5 w-5" />
            </button>

            <span id="page-track" class="ml-3 text-sm text-gray-500">
                {move || pager.get().label()}
            </span>
        </nav>
    }
}
