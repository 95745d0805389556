//! The browse page: paginated book grid with search
//!
//! Search term and page number live in the URL (`?q=`, `?page=`) so
//! back/forward navigation and shared links restore the same listing.

use biblio_components::pagination::Pagination;
use biblio_components::search::SearchBar;
use biblio_components::table::EmptyState;
use biblio_shared::pager::Pager;
use biblio_shared::Book;
use leptos::prelude::*;
use leptos_router::hooks::query_signal;

use crate::api::books;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let (query, set_query) = query_signal::<String>("q");
    let (page, set_page) = query_signal::<u32>("page");

    let listing = LocalResource::new(move || {
        let q = query.get();
        let p = page.get().unwrap_or(1);
        books::load_page(q, p)
    });

    let on_search = Callback::new(move |term: String| {
        // a fresh search always starts over on page one
        set_page.set(None);
        set_query.set(Some(term).filter(|t| !t.is_empty()));
    });

    let on_page = Callback::new(move |p: u32| {
        set_page.set(Some(p));
    });

    let pager = Signal::derive(move || {
        let data = listing.get().unwrap_or_default();
        Pager::new(data.current_page, data.total_pages)
    });

    view! {
        <div class="mx-auto max-w-5xl px-6 py-8">
            <div class="mb-6 flex items-center justify-between gap-4">
                <SearchBar
                    value=Signal::derive(move || query.get().unwrap_or_default())
                    on_search=on_search
                    placeholder="Search by title or author..."
                />
                <span id="books-count" class="text-sm text-gray-500">
                    {move || format!("{} Books", listing.get().unwrap_or_default().total_items)}
                </span>
            </div>

            <Transition fallback=|| view! { <p>"Loading books..."</p> }>
                {move || {
                    listing
                        .get()
                        .map(|data| {
                            view! {
                                <Show
                                    when={
                                        let count = data.books.len();
                                        move || count > 0
                                    }
                                    fallback=|| {
                                        view! { <EmptyState message="No books found" /> }
                                    }
                                >
                                    <div
                                        id="all-books"
                                        class="grid grid-cols-2 gap-6 sm:grid-cols-3 lg:grid-cols-4"
                                    >
                                        {data
                                            .books
                                            .clone()
                                            .into_iter()
                                            .map(|book| view! { <BookCard book=book /> })
                                            .collect_view()}
                                    </div>
                                </Show>
                            }
                        })
                }}
            </Transition>

            <Pagination pager=pager on_page=on_page />
        </div>
    }
}

#[component]
fn BookCard(book: Book) -> impl IntoView {
    view! {
        <a href=format!("/books/{}", book.id)>
            <div class="book-container rounded-lg border border-gray-200 bg-white p-3 hover:shadow-md">
                <img
                    class="book-img mb-2 aspect-[2/3] w-full rounded object-cover"
                    src=book.cover_url()
                    alt=book.title.clone()
                />
                <h3 class="book-title truncate text-sm font-semibold">{book.title.clone()}</h3>
                <p class="book-author truncate text-xs text-gray-500">{book.author.clone()}</p>
            </div>
        </a>
    }
}
