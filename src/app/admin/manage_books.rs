//! Adding, editing and deleting books
//!
//! The page keeps the unfiltered snapshot from the backend and recomputes
//! the visible subset on every keystroke; every successful mutation
//! re-fetches the snapshot before re-rendering.

use biblio_components::buttons::{BusyButton, ButtonIcon};
use biblio_components::icons::{PencilIcon, TrashIcon};
use biblio_components::modal::Modal;
use biblio_components::search::SearchBar;
use biblio_components::table::EmptyRow;
use biblio_components::toast::use_toaster;
use biblio_shared::{filter, Book};
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use web_sys::FormData;

use crate::api::books;
use crate::app::{consume_outcome, forms, use_session};

#[component]
pub fn ManageBooksPage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let all_books = LocalResource::new(books::load_for_admin);
    let query = RwSignal::new(String::new());
    let visible = Memo::new(move |_| {
        let snapshot = all_books.get().unwrap_or_default();
        filter::filter_by_query(&snapshot, &query.read())
    });

    let add_open = RwSignal::new(false);
    let edit_open = RwSignal::new(false);
    let edit_book = RwSignal::new(Option::<Book>::None);
    let add_file_name = RwSignal::new(Option::<String>::None);
    let edit_file_name = RwSignal::new(Option::<String>::None);

    let create = Action::new_local(|data: &SendWrapper<FormData>| {
        let data = data.clone().take();
        async move { books::create(data).await }
    });
    let update = Action::new_local(|input: &(i64, SendWrapper<FormData>)| {
        let (id, data) = input.clone();
        async move { books::update(id, data.take()).await }
    });
    let delete = Action::new_local(|id: &i64| {
        let id = *id;
        async move { books::delete(id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create.value().get() {
            create.value().set(None);
            consume_outcome(result, &toaster, session, || {
                all_books.refetch();
                add_open.set(false);
                add_file_name.set(None);
            });
        }
    });
    Effect::new(move |_| {
        if let Some(result) = update.value().get() {
            update.value().set(None);
            consume_outcome(result, &toaster, session, || {
                all_books.refetch();
                edit_open.set(false);
                edit_book.set(None);
                edit_file_name.set(None);
            });
        }
    });
    Effect::new(move |_| {
        if let Some(result) = delete.value().get() {
            delete.value().set(None);
            consume_outcome(result, &toaster, session, || all_books.refetch());
        }
    });

    let on_add_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (form, data) = forms::submitted_form(&ev);
        form.reset();
        create.dispatch_local(SendWrapper::new(data));
    };
    let on_edit_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(book) = edit_book.get_untracked() else {
            return;
        };
        let (form, data) = forms::submitted_form(&ev);
        form.reset();
        update.dispatch_local((book.id, SendWrapper::new(data)));
    };

    // the edit modal opens with a fresh copy of the record, not the row
    let open_edit = move |id: i64| {
        spawn_local(async move {
            if let Some(book) = books::load_by_id(id).await {
                edit_book.set(Some(book));
                edit_open.set(true);
            }
        });
    };

    view! {
        <div class="mx-auto max-w-5xl px-6 py-8">
            <div class="mb-6 flex items-center justify-between gap-4">
                <h1 class="text-2xl font-bold">"Manage books"</h1>
                <SearchBar
                    value=query
                    on_search=Callback::new(move |q| query.set(q))
                    placeholder="Search by title or author..."
                />
                <button
                    type="button"
                    class=biblio_components::DEFAULT_BUTTON_CLASSES
                    on:click=move |_| add_open.set(true)
                >
                    "Add book"
                </button>
            </div>

            <table
                class="books w-full text-left text-sm"
                class=("is-empty", move || visible.read().is_empty())
                class=("has-data", move || !visible.read().is_empty())
            >
                <thead>
                    <tr class="border-b border-gray-200 text-xs uppercase text-gray-500">
                        <th class="py-2">"ID"</th>
                        <th>"Title"</th>
                        <th>"Author"</th>
                        <th>"Copies"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="manage-books-data">
                    <Show
                        when=move || !visible.read().is_empty()
                        fallback=|| view! { <EmptyRow colspan=5 message="No books found" /> }
                    >
                        <For each=move || visible.get() key=|book| book.id let:book>
                            <tr class="border-b border-gray-100">
                                <td class="id py-2">{book.id}</td>
                                <td class="title">{book.title.clone()}</td>
                                <td class="author">{book.author.clone()}</td>
                                <td class="copies">{book.total_copies}</td>
                                <td>
                                    <div class="table-btns flex justify-end gap-1">
                                        <ButtonIcon
                                            busy_reader=update.pending()
                                            on_click=move |_| open_edit(book.id)
                                            inner_icon=|| view! { <PencilIcon inner_class="h-4 w-4" /> }
                                        />
                                        <ButtonIcon
                                            busy_reader=delete.pending()
                                            on_click=move |_| {
                                                delete.dispatch_local(book.id);
                                            }
                                            inner_icon=|| view! { <TrashIcon inner_class="h-4 w-4" /> }
                                        />
                                    </div>
                                </td>
                            </tr>
                        </For>
                    </Show>
                </tbody>
            </table>

            <Modal
                open=add_open
                title="Add book"
                on_close=Callback::new(move |_| add_file_name.set(None))
            >
                <form
                    data-form-type="add-book"
                    class="grid grid-cols-2 gap-3"
                    on:submit=on_add_submit
                >
                    <BookFields book=None />
                    <CoverPicker id="add-form-img-file" file_name=add_file_name />
                    <div class="col-span-2">
                        <BusyButton
                            busy_reader=create.pending()
                            label="Add book"
                            busy_label="Adding..."
                        />
                    </div>
                </form>
            </Modal>

            <Modal
                open=edit_open
                title="Edit book"
                on_close=Callback::new(move |_| {
                    edit_book.set(None);
                    edit_file_name.set(None);
                })
            >
                <form
                    data-form-type="edit-book"
                    class="grid grid-cols-2 gap-3"
                    on:submit=on_edit_submit
                >
                    {move || view! { <BookFields book=edit_book.get() /> }}
                    <CoverPicker id="edit-form-img-file" file_name=edit_file_name />
                    <div class="col-span-2">
                        <BusyButton
                            busy_reader=update.pending()
                            label="Save changes"
                            busy_label="Saving..."
                        />
                    </div>
                </form>
            </Modal>
        </div>
    }
}

/// The shared field set of the add and edit forms, prefilled when editing
#[component]
fn BookFields(book: Option<Book>) -> impl IntoView {
    let book = book.unwrap_or_default();

    let text_field = |name: &'static str, label: &'static str, value: String| {
        view! {
            <label class="flex flex-col gap-1 text-sm font-medium">
                {label}
                <input
                    name=name
                    type="text"
                    class="rounded-lg border border-gray-300 px-3 py-2 text-sm font-normal"
                    prop:value=value
                />
            </label>
        }
    };
    let number_field = |name: &'static str, label: &'static str, value: u32| {
        view! {
            <label class="flex flex-col gap-1 text-sm font-medium">
                {label}
                <input
                    name=name
                    type="number"
                    min="0"
                    class="rounded-lg border border-gray-300 px-3 py-2 text-sm font-normal"
                    prop:value=value.to_string()
                />
            </label>
        }
    };

    view! {
        {text_field("title", "Title", book.title)}
        {text_field("subtitle", "Subtitle", book.subtitle)}
        {text_field("author", "Author", book.author)}
        {text_field("isbn", "ISBN", book.isbn)}
        {text_field("language", "Language", book.language)}
        {text_field("publisher", "Publisher", book.publisher)}
        {text_field("published_at", "Published", book.published_at)}
        {number_field("page_count", "Pages", book.page_count)}
        {number_field("total_copies", "Copies", book.total_copies)}
        <label class="col-span-2 flex flex-col gap-1 text-sm font-medium">
            "Description"
            <textarea
                name="description"
                rows="3"
                class="rounded-lg border border-gray-300 px-3 py-2 text-sm font-normal"
                prop:value=book.description
            ></textarea>
        </label>
    }
}

/// Cover upload input that echoes the picked file name
#[component]
fn CoverPicker(id: &'static str, file_name: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <label class="col-span-2 flex flex-col gap-1 text-sm font-medium">
            "Cover image"
            <input
                id=id
                name="book_img"
                type="file"
                accept="image/*"
                class="text-sm font-normal"
                on:change=move |ev| file_name.set(forms::picked_file_name(&ev))
            />
            <span class="text-xs font-normal text-gray-400">
                {move || file_name.get().unwrap_or_else(|| "No file selected".to_string())}
            </span>
        </label>
    }
}
