//! The admin view over every borrowing, with force return

use biblio_components::search::SearchBar;
use biblio_components::table::EmptyRow;
use biblio_components::toast::use_toaster;
use biblio_shared::filter::{self, StatusFilter};
use biblio_shared::{dates, Borrowing};
use leptos::prelude::*;

use crate::api::borrowings;
use crate::app::{consume_outcome, use_session};

#[component]
pub fn ManageBorrowingsPage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let all_borrowings = LocalResource::new(borrowings::load_all);
    let query = RwSignal::new(String::new());
    let status = RwSignal::new(StatusFilter::All);

    let visible = Memo::new(move |_| {
        let snapshot = all_borrowings.get().unwrap_or_default();
        filter::filter_borrowings(&snapshot, &query.read(), status.get())
    });

    let force_return = Action::new_local(|id: &i64| {
        let id = *id;
        async move { borrowings::return_book(id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = force_return.value().get() {
            force_return.value().set(None);
            consume_outcome(result, &toaster, session, || all_borrowings.refetch());
        }
    });

    view! {
        <div class="mx-auto max-w-5xl px-6 py-8">
            <div class="mb-6 flex items-center justify-between gap-4">
                <h1 class="text-2xl font-bold">"Manage borrowings"</h1>
                <SearchBar
                    value=query
                    on_search=Callback::new(move |q| query.set(q))
                    placeholder="Search by user or book..."
                />
                <select
                    id="borrowings-filters"
                    class="rounded-lg border border-gray-300 px-3 py-2 text-sm"
                    on:change=move |ev| status.set(StatusFilter::from_value(&event_target_value(&ev)))
                >
                    <option value="all">"All statuses"</option>
                    <option value="active">"Active"</option>
                    <option value="overdue">"Overdue"</option>
                    <option value="returned">"Returned"</option>
                </select>
            </div>

            <table
                class="borrowings w-full text-left text-sm"
                class=("is-empty", move || visible.read().is_empty())
                class=("has-data", move || !visible.read().is_empty())
            >
                <thead>
                    <tr class="border-b border-gray-200 text-xs uppercase text-gray-500">
                        <th class="py-2">"User"</th>
                        <th>"Book"</th>
                        <th>"Borrowed"</th>
                        <th>"Due"</th>
                        <th>"Status"</th>
                        <th>"Returned"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="manage-borrowings-data">
                    <Show
                        when=move || !visible.read().is_empty()
                        fallback=|| view! { <EmptyRow colspan=7 message="No borrowings found" /> }
                    >
                        <For each=move || visible.get() key=|b| b.id let:b>
                            <BorrowingRow
                                borrowing=b
                                on_return=Callback::new(move |id| {
                                    force_return.dispatch_local(id);
                                })
                            />
                        </For>
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn BorrowingRow(borrowing: Borrowing, on_return: Callback<i64>) -> impl IntoView {
    let open = borrowing.is_open();
    let id = borrowing.id;

    view! {
        <tr class="border-b border-gray-100">
            <td class="user py-2">{borrowing.user.clone()}</td>
            <td class="book">{borrowing.book.clone()}</td>
            <td>{dates::short(&borrowing.borrowed_at)}</td>
            <td>{dates::short(&borrowing.due_at)}</td>
            <td class="status-cell">
                <span class=format!("status-badge status-{}", borrowing.status)>
                    {borrowing.status.to_string()}
                </span>
            </td>
            <td>
                <Show when=move || !open fallback=|| view! { <span>"-"</span> }>
                    {dates::short(&borrowing.returned_at)}
                </Show>
            </td>
            <td>
                <Show when=move || open fallback=|| view! { <span>"-"</span> }>
                    <button
                        type="button"
                        class="return-borrowing-btn btn btn-sm rounded bg-sky-700 px-2 py-1 text-xs text-white hover:bg-sky-600"
                        on:click=move |_| on_return.run(id)
                    >
                        "Return"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
