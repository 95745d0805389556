//! The book details page, with the borrow and favorite actions

use biblio_components::toast::use_toaster;
use biblio_shared::{dates, Book};
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::api::{borrowings, favorites};
use crate::app::use_session;

#[derive(Params, Clone, PartialEq)]
struct BookParams {
    id: Option<i64>,
}

#[component]
pub fn BookDetailsPage() -> impl IntoView {
    let params = use_params::<BookParams>();
    let book_id = move || params.read().as_ref().ok().and_then(|p| p.id);

    let book = LocalResource::new(move || {
        let id = book_id();
        async move {
            match id {
                Some(id) => crate::api::books::load_by_id(id).await,
                None => None,
            }
        }
    });

    view! {
        <div class="mx-auto max-w-4xl px-6 py-8">
            <Transition fallback=|| view! { <p>"Loading book..."</p> }>
                {move || {
                    book.get()
                        .map(|found| match found {
                            Some(book) => leptos::either::Either::Left(
                                view! { <BookDetails book=book /> },
                            ),
                            None => leptos::either::Either::Right(
                                view! { <p>"This book does not exist."</p> },
                            ),
                        })
                }}
            </Transition>
        </div>
    }
}

#[component]
fn BookDetails(book: Book) -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let status = if book.available() {
        "available"
    } else {
        "unavailable"
    };

    let borrow = Action::new_local(|book_id: &i64| {
        let id = *book_id;
        async move { borrowings::borrow(id).await }
    });
    let favorite = Action::new_local(|book_id: &i64| {
        let id = *book_id;
        async move { favorites::create(id).await }
    });

    // toast whatever the last dispatched action resolved to
    Effect::new(move |_| {
        if let Some(result) = borrow.value().get() {
            borrow.value().set(None);
            match result {
                Ok(outcome) => toaster.show(outcome.message),
                Err(e) => {
                    leptos::logging::warn!("Borrow request failed: {e}");
                    toaster.error("Something went wrong. Try again.");
                }
            }
        }
    });
    Effect::new(move |_| {
        if let Some(result) = favorite.value().get() {
            favorite.value().set(None);
            match result {
                Ok(outcome) => toaster.show(outcome.message),
                Err(e) => {
                    leptos::logging::warn!("Favorite request failed: {e}");
                    toaster.error("Something went wrong. Try again.");
                }
            }
        }
    });

    let book_id = book.id;
    // without a session neither action reaches the network
    let on_borrow = move |_| {
        if session.token().is_none() {
            toaster.error("Account is required to borrow books");
            return;
        }
        borrow.dispatch_local(book_id);
    };
    let on_favorite = move |_| {
        if session.token().is_none() {
            toaster.error("Account is required to add favorites");
            return;
        }
        favorite.dispatch_local(book_id);
    };

    view! {
        <div class="flex flex-col gap-8 md:flex-row">
            <img
                id="book-img"
                class="w-56 self-start rounded-lg border border-gray-200 object-cover"
                src=book.cover_url()
                alt=book.title.clone()
            />

            <div class="grow">
                <span
                    id="book-status"
                    class="mb-2 inline-block rounded-full px-3 py-1 text-xs font-medium"
                    class=("available", book.available())
                    class=("unavailable", !book.available())
                >
                    {status}
                </span>

                <h1 id="book-title" class="text-3xl font-bold">
                    {book.title.clone()}
                </h1>
                <p id="book-subtitle" class="text-lg text-gray-600">
                    {book.subtitle.clone()}
                </p>
                <p class="mt-1 text-sm text-gray-500">
                    "by " <span id="by-author">{book.author.clone()}</span>
                </p>

                <dl class="mt-6 grid grid-cols-2 gap-x-8 gap-y-2 text-sm">
                    <dt class="text-gray-500">"ISBN"</dt>
                    <dd id="book-isbn">{book.isbn.clone()}</dd>
                    <dt class="text-gray-500">"Language"</dt>
                    <dd id="book-language">{book.language.clone()}</dd>
                    <dt class="text-gray-500">"Pages"</dt>
                    <dd id="book-pages">{book.page_count}</dd>
                    <dt class="text-gray-500">"Publisher"</dt>
                    <dd id="book-publisher">{book.publisher.clone()}</dd>
                    <dt class="text-gray-500">"Published"</dt>
                    <dd id="book-published">{dates::long(&book.published_at)}</dd>
                </dl>

                <p id="book-description" class="mt-6 text-sm leading-6 text-gray-700">
                    {book.description.clone()}
                </p>

                <div class="mt-8 flex gap-3">
                    <button
                        id="borrow-btn"
                        type="button"
                        class="rounded-lg bg-sky-700 px-4 py-2 text-sm font-medium text-white hover:bg-sky-600 disabled:opacity-60"
                        disabled=move || borrow.pending().get()
                        on:click=on_borrow
                    >
                        "Borrow"
                    </button>
                    <button
                        id="favorite-btn"
                        type="button"
                        class="rounded-lg border border-sky-700 px-4 py-2 text-sm font-medium text-sky-700 hover:bg-sky-50 disabled:opacity-60"
                        disabled=move || favorite.pending().get()
                        on:click=on_favorite
                    >
                        "Add to favorites"
                    </button>
                </div>
            </div>
        </div>
    }
}
