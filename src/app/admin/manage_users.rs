//! Adding, editing and deleting user accounts

use biblio_components::buttons::{BusyButton, ButtonIcon};
use biblio_components::icons::{PencilIcon, TrashIcon};
use biblio_components::modal::Modal;
use biblio_components::search::SearchBar;
use biblio_components::table::EmptyRow;
use biblio_components::toast::use_toaster;
use biblio_shared::{dates, filter, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use web_sys::FormData;

use crate::api::{admin, users};
use crate::app::{consume_outcome, forms, use_session};

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let all_users = LocalResource::new(users::load_all);
    let query = RwSignal::new(String::new());
    let visible = Memo::new(move |_| {
        let snapshot = all_users.get().unwrap_or_default();
        filter::filter_by_query(&snapshot, &query.read())
    });

    let add_open = RwSignal::new(false);
    let edit_open = RwSignal::new(false);
    let edit_user = RwSignal::new(Option::<User>::None);

    let create = Action::new_local(|data: &SendWrapper<FormData>| {
        let data = data.clone().take();
        async move { admin::create_user(data).await }
    });
    let update = Action::new_local(|input: &(i64, SendWrapper<FormData>)| {
        let (id, data) = input.clone();
        async move { admin::update_user(id, data.take()).await }
    });
    let delete = Action::new_local(|id: &i64| {
        let id = *id;
        async move { users::delete(id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create.value().get() {
            create.value().set(None);
            consume_outcome(result, &toaster, session, || {
                all_users.refetch();
                add_open.set(false);
            });
        }
    });
    Effect::new(move |_| {
        if let Some(result) = update.value().get() {
            update.value().set(None);
            consume_outcome(result, &toaster, session, || {
                all_users.refetch();
                edit_open.set(false);
                edit_user.set(None);
            });
        }
    });
    Effect::new(move |_| {
        if let Some(result) = delete.value().get() {
            delete.value().set(None);
            consume_outcome(result, &toaster, session, || all_users.refetch());
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
        let Some(user) = edit_user.get_untracked() else {
            return;
        };
        let (form, data) = forms::submitted_form(&ev);
        form.reset();
        update.dispatch_local((user.id, SendWrapper::new(data)));
    };

    let open_edit = move |id: i64| {
        spawn_local(async move {
            if let Some(user) = users::load_by_id(id).await {
                edit_user.set(Some(user));
                edit_open.set(true);
            }
        });
    };

    view! {
        <div class="mx-auto max-w-5xl px-6 py-8">
            <div class="mb-6 flex items-center justify-between gap-4">
                <h1 class="text-2xl font-bold">"Manage users"</h1>
                <SearchBar
                    value=query
                    on_search=Callback::new(move |q| query.set(q))
                    placeholder="Search by username or email..."
                />
                <button
                    type="button"
                    class=biblio_components::DEFAULT_BUTTON_CLASSES
                    on:click=move |_| add_open.set(true)
                >
                    "Add user"
                </button>
            </div>

            <table
                class="users w-full text-left text-sm"
                class=("is-empty", move || visible.read().is_empty())
                class=("has-data", move || !visible.read().is_empty())
            >
                <thead>
                    <tr class="border-b border-gray-200 text-xs uppercase text-gray-500">
                        <th class="py-2">"ID"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Joined"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="manage-users-data">
                    <Show
                        when=move || !visible.read().is_empty()
                        fallback=|| view! { <EmptyRow colspan=5 message="No users found" /> }
                    >
                        <For each=move || visible.get() key=|user| user.id let:user>
                            <tr class="border-b border-gray-100">
                                <td class="py-2">{user.id}</td>
                                <td>{user.username.clone()}</td>
                                <td>{user.email.clone()}</td>
                                <td>{dates::long(&user.date_joined)}</td>
                                <td>
                                    <div class="table-btns flex justify-end gap-1">
                                        <ButtonIcon
                                            busy_reader=update.pending()
                                            on_click=move |_| open_edit(user.id)
                                            inner_icon=|| view! { <PencilIcon inner_class="h-4 w-4" /> }
                                        />
                                        <ButtonIcon
                                            busy_reader=delete.pending()
                                            on_click=move |_| {
                                                delete.dispatch_local(user.id);
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

            <Modal open=add_open title="Add user">
                <form
                    data-form-type="add-user"
                    class="flex flex-col gap-3"
                    on:submit=on_add_submit
                >
                    <UserFields user=None />
                    <label class="flex flex-col gap-1 text-sm font-medium">
                        "Password"
                        <input
                            name="password"
                            type="password"
                            required
                            class="rounded-lg border border-gray-300 px-3 py-2 text-sm font-normal"
                        />
                    </label>
                    <BusyButton busy_reader=create.pending() label="Add user" busy_label="Adding..." />
                </form>
            </Modal>

            <Modal
                open=edit_open
                title="Edit user"
                on_close=Callback::new(move |_| edit_user.set(None))
            >
                <form
                    data-form-type="edit-user"
                    class="flex flex-col gap-3"
                    on:submit=on_edit_submit
                >
                    {move || view! { <UserFields user=edit_user.get() /> }}
                    <BusyButton
                        busy_reader=update.pending()
                        label="Save changes"
                        busy_label="Saving..."
                    />
                </form>
            </Modal>
        </div>
    }
}

/// The shared field set of the add and edit forms, prefilled when editing
#[component]
fn UserFields(user: Option<User>) -> impl IntoView {
    let user = user.unwrap_or_default();

    view! {
        <label class="flex flex-col gap-1 text-sm font-medium">
            "Username"
            <input
                name="username"
                type="text"
                required
                class="rounded-lg border border-gray-300 px-3 py-2 text-sm font-normal"
                prop:value=user.username
            />
        </label>
        <label class="flex flex-col gap-1 text-sm font-medium">
            "Email"
            <input
                name="email"
                type="email"
                required
                class="rounded-lg border border-gray-300 px-3 py-2 text-sm font-normal"
                prop:value=user.email
            />
        </label>
    }
}
