//! All the different admin pages

use biblio_components::activity::ActivityLine;
use leptos::prelude::*;
use leptos_router::components::A;

mod activities;
mod manage_books;
mod manage_borrowings;
mod manage_users;

pub use activities::AllActivityPage;
pub use manage_books::ManageBooksPage;
pub use manage_borrowings::ManageBorrowingsPage;
pub use manage_users::ManageUsersPage;

use crate::api::{activities as activity_api, books, borrowings, users};

#[component]
pub fn AdminOverview() -> impl IntoView {
    // four independent fetches, issued in parallel
    let borrowings = LocalResource::new(borrowings::load_all);
    let users = LocalResource::new(users::load_all);
    let books = LocalResource::new(books::load_for_admin);
    let activities = LocalResource::new(activity_api::load_recent);

    let borrowings_count = move || borrowings.get().unwrap_or_default().len();
    let users_count = move || users.get().unwrap_or_default().len();
    let books_count = move || books.get().unwrap_or_default().len();

    let overdue_count = move || {
        borrowings
            .get()
            .unwrap_or_default()
            .iter()
            .filter(|b| b.status == biblio_shared::BorrowingStatus::Overdue)
            .count()
    };
    let out_of_stock_count = move || {
        books
            .get()
            .unwrap_or_default()
            .iter()
            .filter(|b| !b.available())
            .count()
    };

    let now_ms = web_sys::js_sys::Date::now();

    view! {
        <div class="mx-auto max-w-5xl px-6 py-8">
            <h1 class="mb-6 text-2xl font-bold">"Overview"</h1>

            <div class="mb-8 grid grid-cols-3 gap-4">
                <div class="rounded-lg border border-gray-200 bg-white p-4">
                    <p class="text-xs uppercase text-gray-400">"Borrowings"</p>
                    <p id="borrowings-count" class="text-3xl font-bold">
                        {borrowings_count}
                    </p>
                </div>
                <div class="rounded-lg border border-gray-200 bg-white p-4">
                    <p class="text-xs uppercase text-gray-400">"Users"</p>
                    <p id="users-count" class="text-3xl font-bold">
                        {users_count}
                    </p>
                </div>
                <div class="rounded-lg border border-gray-200 bg-white p-4">
                    <p class="text-xs uppercase text-gray-400">"Books"</p>
                    <p id="books-count" class="text-3xl font-bold">
                        {books_count}
                    </p>
                </div>
            </div>

            // attention required, hidden while there is nothing to flag
            <div class="mb-8 flex flex-col gap-2">
                <div id="overdue-link" class=("hidden", move || overdue_count() == 0)>
                    <A
                        href="/admin/manage-borrowings"
                        attr:class="block rounded-lg border border-amber-200 bg-amber-50 px-4 py-2 text-sm text-amber-800"
                    >
                        <span id="overdue-attention-count" class="font-bold">
                            {overdue_count}
                        </span>
                        " overdue borrowings need attention"
                    </A>
                </div>

                <div id="stock-link" class=("hidden", move || out_of_stock_count() == 0)>
                    <A
                        href="/admin/manage-books"
                        attr:class="block rounded-lg border border-amber-200 bg-amber-50 px-4 py-2 text-sm text-amber-800"
                    >
                        <span id="stock-attention-count" class="font-bold">
                            {out_of_stock_count}
                        </span>
                        " books are out of stock"
                    </A>
                </div>
            </div>

            <h2 class="mb-3 text-lg font-semibold">"Recent activity"</h2>
            <Transition fallback=|| view! { <p>"Loading activity..."</p> }>
                {move || {
                    activities
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                leptos::either::Either::Left(
                                    view! { <p id="recent-activity">"No recent activities found."</p> },
                                )
                            } else {
                                leptos::either::Either::Right(
                                    view! {
                                        <ul id="recent-activity" class="rounded-lg border border-gray-200 bg-white p-4">
                                            {list
                                                .into_iter()
                                                .map(|activity| {
                                                    view! { <ActivityLine activity=activity now_ms=now_ms /> }
                                                })
                                                .collect_view()}
                                        </ul>
                                    },
                                )
                            }
                        })
                }}
            </Transition>
        </div>
    }
}
