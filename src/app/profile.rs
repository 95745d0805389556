//! The profile page: active borrowings, history, favorites and settings
//!
//! The active subpage is selected by the location hash so it survives
//! reloads and back/forward navigation.

use biblio_components::buttons::BusyButton;
use biblio_components::modal::Modal;
use biblio_components::table::EmptyRow;
use biblio_components::toast::use_toaster;
use biblio_shared::{dates, Borrowing, Favorite, Profile};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use send_wrapper::SendWrapper;
use web_sys::FormData;

use crate::api::{borrowings, favorites, users};
use crate::app::{consume_outcome, forms, use_session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Subpage {
    #[default]
    Borrowings,
    History,
    Favorites,
    Settings,
}

impl Subpage {
    fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#') {
            "history" => Self::History,
            "favorites" => Self::Favorites,
            "settings" => Self::Settings,
            _ => Self::Borrowings,
        }
    }
}

/// Which of the settings forms was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsForm {
    Username,
    Email,
    Password,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let profile = LocalResource::new(users::load_profile);

    let location = use_location();
    let subpage = Memo::new(move |_| Subpage::from_hash(&location.hash.get()));

    let return_action = Action::new_local(|id: &i64| {
        let id = *id;
        async move { borrowings::return_book(id).await }
    });
    let remove_favorite = Action::new_local(|id: &i64| {
        let id = *id;
        async move { favorites::delete(id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = return_action.value().get() {
            return_action.value().set(None);
            consume_outcome(result, &toaster, session, || profile.refetch());
        }
    });
    Effect::new(move |_| {
        if let Some(result) = remove_favorite.value().get() {
            remove_favorite.value().set(None);
            consume_outcome(result, &toaster, session, || profile.refetch());
        }
    });

    // settings modals; the open signals travel through context so the
    // settings section can reach them from inside the Transition
    let username_open = RwSignal::new(false);
    let email_open = RwSignal::new(false);
    let password_open = RwSignal::new(false);
    let form_error = RwSignal::new(Option::<String>::None);
    provide_context(SettingsModals {
        username_open,
        email_open,
        password_open,
    });

    let update_action = Action::new_local(|input: &(SettingsForm, SendWrapper<FormData>)| {
        let (kind, data) = input.clone();
        async move {
            let data = data.take();
            match kind {
                SettingsForm::Password => users::update_password(data).await,
                SettingsForm::Username | SettingsForm::Email => users::update(data).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            update_action.value().set(None);
            match &result {
                Ok(outcome) if !outcome.succeeded() => {
                    form_error.set(Some(outcome.message.msg.clone()));
                }
                _ => form_error.set(None),
            }
            consume_outcome(result, &toaster, session, || {
                profile.refetch();
                session.refresh();
            });
        }
    });

    // submitting any settings form closes its modal and resets the fields
    let on_settings_submit = move |kind: SettingsForm, ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (form, data) = forms::submitted_form(&ev);
        form.reset();
        username_open.set(false);
        email_open.set(false);
        password_open.set(false);
        update_action.dispatch_local((kind, SendWrapper::new(data)));
    };

    let on_return = Callback::new(move |id: i64| {
        return_action.dispatch_local(id);
    });
    let on_remove_favorite = Callback::new(move |id: i64| {
        remove_favorite.dispatch_local(id);
    });

    let tab_classes = move |tab: Subpage| {
        let mut classes =
            "border-b-2 px-4 py-2 text-sm font-medium hover:text-sky-700".to_string();
        if subpage.get() == tab {
            classes.push_str(" active border-sky-700 text-sky-700");
        } else {
            classes.push_str(" border-transparent text-gray-500");
        }
        classes
    };

    view! {
        <div id="profile-content" class="mx-auto max-w-4xl px-6 py-8">
            <Transition fallback=|| view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|found| match found {
                            Some(profile) => leptos::either::Either::Left({
                                let active = profile.active_borrowings();
                                let history = profile.borrowing_history();
                                let favorites = profile.favorites.clone();
                                view! {
                                    <ProfileHero profile=profile.clone() />

                                    <div class="mb-6 flex border-b border-gray-200">
                                        <a id="borrowings-subpage" href="#borrowings" class=move || tab_classes(Subpage::Borrowings)>
                                            "Borrowings"
                                        </a>
                                        <a id="history-subpage" href="#history" class=move || tab_classes(Subpage::History)>
                                            "History"
                                        </a>
                                        <a id="favorites-subpage" href="#favorites" class=move || tab_classes(Subpage::Favorites)>
                                            "Favorites"
                                        </a>
                                        <a id="settings-subpage" href="#settings" class=move || tab_classes(Subpage::Settings)>
                                            "Settings"
                                        </a>
                                    </div>

                                    <div
                                        id="profile-borrowings-table"
                                        class=("hidden", move || subpage.get() != Subpage::Borrowings)
                                    >
                                        <ActiveBorrowingsTable rows=active on_return=on_return />
                                    </div>
                                    <div
                                        id="profile-history-table"
                                        class=("hidden", move || subpage.get() != Subpage::History)
                                    >
                                        <HistoryTable rows=history />
                                    </div>
                                    <div
                                        id="favorites-table"
                                        class=("hidden", move || subpage.get() != Subpage::Favorites)
                                    >
                                        <FavoritesTable rows=favorites on_remove=on_remove_favorite />
                                    </div>
                                    <div
                                        id="profile-settings"
                                        class=("hidden", move || subpage.get() != Subpage::Settings)
                                    >
                                        <SettingsSection profile=profile.clone() form_error=form_error />
                                    </div>
                                }
                            }),
                            None => leptos::either::Either::Right(view! {
                                <p>
                                    "Sign in to see your profile."
                                    <a href="/signin" class="ml-2 text-sky-700 hover:underline">
                                        "Sign in"
                                    </a>
                                </p>
                            }),
                        })
                }}
            </Transition>

            <Modal open=username_open title="Update username">
                <form
                    data-form-type="username"
                    class="flex flex-col gap-3"
                    on:submit=move |ev| on_settings_submit(SettingsForm::Username, ev)
                >
                    <label class="text-sm font-medium" for="new-username">
                        "New username"
                    </label>
                    <input
                        id="new-username"
                        name="username"
                        type="text"
                        required
                        class="rounded-lg border border-gray-300 px-3 py-2 text-sm"
                    />
                    <BusyButton
                        busy_reader=update_action.pending()
                        label="Save"
                        busy_label="Saving..."
                    />
                </form>
            </Modal>

            <Modal open=email_open title="Update email">
                <form
                    data-form-type="email"
                    class="flex flex-col gap-3"
                    on:submit=move |ev| on_settings_submit(SettingsForm::Email, ev)
                >
                    <label class="text-sm font-medium" for="new-email">
                        "New email"
                    </label>
                    <input
                        id="new-email"
                        name="email"
                        type="email"
                        required
                        class="rounded-lg border border-gray-300 px-3 py-2 text-sm"
                    />
                    <BusyButton
                        busy_reader=update_action.pending()
                        label="Save"
                        busy_label="Saving..."
                    />
                </form>
            </Modal>

            <Modal open=password_open title="Update password">
                <form
                    data-form-type="password"
                    class="flex flex-col gap-3"
                    on:submit=move |ev| on_settings_submit(SettingsForm::Password, ev)
                >
                    <label class="text-sm font-medium" for="current-password">
                        "Current password"
                    </label>
                    <input
                        id="current-password"
                        name="current_password"
                        type="password"
                        required
                        class="rounded-lg border border-gray-300 px-3 py-2 text-sm"
                    />
                    <label class="text-sm font-medium" for="new-password">
                        "New password"
                    </label>
                    <input
                        id="new-password"
                        name="new_password"
                        type="password"
                        required
                        class="rounded-lg border border-gray-300 px-3 py-2 text-sm"
                    />
                    <BusyButton
                        busy_reader=update_action.pending()
                        label="Save"
                        busy_label="Saving..."
                    />
                </form>
            </Modal>
        </div>
    }
}

#[derive(Clone, Copy)]
struct SettingsModals {
    username_open: RwSignal<bool>,
    email_open: RwSignal<bool>,
    password_open: RwSignal<bool>,
}

#[component]
fn ProfileHero(profile: Profile) -> impl IntoView {
    let letter = profile
        .username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    view! {
        <div class="mb-8 flex items-center gap-4">
            <div
                id="profile-avatar"
                class="flex h-16 w-16 items-center justify-center rounded-full bg-sky-700 text-2xl font-bold text-white"
            >
                {letter}
            </div>
            <div>
                <h1 id="profile-username" class="text-2xl font-bold">
                    {profile.username.clone()}
                </h1>
                <p id="profile-email" class="text-sm text-gray-500">
                    {profile.email.clone()}
                </p>
                <p class="text-xs text-gray-400">
                    "Member since " {dates::long(&profile.joined_date)}
                </p>
            </div>
        </div>
    }
}

#[component]
fn ActiveBorrowingsTable(rows: Vec<Borrowing>, on_return: Callback<i64>) -> impl IntoView {
    let is_empty = rows.is_empty();

    view! {
        <table
            class="active-borrowings w-full text-left text-sm"
            class=("is-empty", is_empty)
            class=("has-data", !is_empty)
        >
            <thead>
                <tr class="border-b border-gray-200 text-xs uppercase text-gray-500">
                    <th class="py-2">"Book ID"</th>
                    <th>"Title"</th>
                    <th>"Borrowed"</th>
                    <th>"Due"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody id="active-borrowings">
                <Show when=move || !is_empty fallback=|| view! { <EmptyRow colspan=6 message="No active borrowings yet" /> }>
                    {rows
                        .clone()
                        .into_iter()
                        .map(|b| {
                            view! {
                                <tr class="border-b border-gray-100">
                                    <td class="id py-2">{b.book_id}</td>
                                    <td class="title" title=b.title.clone()>{b.title.clone()}</td>
                                    <td>{dates::short(&b.borrowed_at)}</td>
                                    <td>{dates::short(&b.due_at)}</td>
                                    <td class="status-cell">
                                        <span class=format!("status-badge status-{}", b.status)>
                                            {b.status.to_string()}
                                        </span>
                                    </td>
                                    <td>
                                        <button
                                            type="button"
                                            class="return-btn btn btn-sm rounded bg-sky-700 px-2 py-1 text-xs text-white hover:bg-sky-600"
                                            on:click=move |_| on_return.run(b.id)
                                        >
                                            "Return"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </Show>
            </tbody>
        </table>
    }
}

#[component]
fn HistoryTable(rows: Vec<Borrowing>) -> impl IntoView {
    let is_empty = rows.is_empty();

    view! {
        <table
            class="history w-full text-left text-sm"
            class=("is-empty", is_empty)
            class=("has-data", !is_empty)
        >
            <thead>
                <tr class="border-b border-gray-200 text-xs uppercase text-gray-500">
                    <th class="py-2">"Book ID"</th>
                    <th>"Title"</th>
                    <th>"Borrowed"</th>
                    <th>"Returned"</th>
                </tr>
            </thead>
            <tbody id="borrowings-history">
                <Show when=move || !is_empty fallback=|| view! { <EmptyRow colspan=4 message="No borrowed books yet" /> }>
                    {rows
                        .clone()
                        .into_iter()
                        .map(|b| {
                            view! {
                                <tr class="border-b border-gray-100">
                                    <td class="py-2">{b.book_id}</td>
                                    <td title=b.title.clone()>{b.title.clone()}</td>
                                    <td>{dates::short(&b.borrowed_at)}</td>
                                    <td>{dates::short(&b.returned_at)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </Show>
            </tbody>
        </table>
    }
}

#[component]
fn FavoritesTable(rows: Vec<Favorite>, on_remove: Callback<i64>) -> impl IntoView {
    let is_empty = rows.is_empty();

    view! {
        <table
            class="favorites w-full text-left text-sm"
            class=("is-empty", is_empty)
            class=("has-data", !is_empty)
        >
            <thead>
                <tr class="border-b border-gray-200 text-xs uppercase text-gray-500">
                    <th class="py-2">"Title"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody id="favorite-books">
                <Show when=move || !is_empty fallback=|| view! { <EmptyRow colspan=2 message="No favorite books yet" /> }>
                    {rows
                        .clone()
                        .into_iter()
                        .map(|f| {
                            view! {
                                <tr class="border-b border-gray-100">
                                    <td class="title py-2">{f.title.clone()}</td>
                                    <td class="action text-right">
                                        <button
                                            type="button"
                                            class="remove-favorite-btn btn btn-sm rounded bg-rose-500 px-2 py-1 text-xs text-white hover:bg-rose-400"
                                            on:click=move |_| on_remove.run(f.id)
                                        >
                                            "Remove"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </Show>
            </tbody>
        </table>
    }
}

#[component]
fn SettingsSection(profile: Profile, form_error: RwSignal<Option<String>>) -> impl IntoView {
    let modals = use_context::<SettingsModals>().expect("profile page provides settings modals");

    view! {
        <div class="flex max-w-md flex-col gap-4">
            <div
                id="form-error"
                class="rounded-lg bg-rose-50 px-3 py-2 text-sm text-rose-600"
                class=("hidden", move || form_error.read().is_none())
            >
                <span id="error">{move || form_error.get()}</span>
            </div>

            <div class="flex items-center justify-between">
                <div>
                    <p class="text-xs uppercase text-gray-400">"Username"</p>
                    <p id="info-username" class="text-sm">
                        {profile.username.clone()}
                    </p>
                </div>
                <button
                    type="button"
                    class="text-sm text-sky-700 hover:underline"
                    on:click=move |_| modals.username_open.set(true)
                >
                    "Change"
                </button>
            </div>

            <div class="flex items-center justify-between">
                <div>
                    <p class="text-xs uppercase text-gray-400">"Email"</p>
                    <p id="info-email" class="text-sm">
                        {profile.email.clone()}
                    </p>
                </div>
                <button
                    type="button"
                    class="text-sm text-sky-700 hover:underline"
                    on:click=move |_| modals.email_open.set(true)
                >
                    "Change"
                </button>
            </div>

            <div class="flex items-center justify-between">
                <div>
                    <p class="text-xs uppercase text-gray-400">"Password"</p>
                    <p class="text-sm">"********"</p>
                </div>
                <button
                    type="button"
                    class="text-sm text-sky-700 hover:underline"
                    on:click=move |_| modals.password_open.set(true)
                >
                    "Change"
                </button>
            </div>
        </div>
    }
}
