//! The top navigation bar
//!
//! Mounted once above the route outlet; resolves auth state on its own and
//! switches between the guest, user and admin affordances.

use leptos::{ev::click, prelude::*};
use leptos_router::components::A;
use leptos_use::{use_document, use_event_listener};

use crate::api::{auth, users};
use crate::app::use_session;

const NAV_LINK_CLASSES: &str =
    "rounded-lg px-3 py-2 text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900";

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();

    // the avatar letter needs the username behind the session token
    let current_user = LocalResource::new(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => users::load_by_id(token.user_id).await,
                None => None,
            }
        }
    });

    let avatar_letter = move || {
        current_user
            .get()
            .flatten()
            .and_then(|user| user.username.chars().next())
            .map(|letter| letter.to_uppercase().to_string())
            .unwrap_or_default()
    };

    let menu_open = RwSignal::new(false);
    // any click outside the avatar button closes the menu
    let _cleanup = use_event_listener(use_document(), click, move |_| {
        menu_open.set(false);
    });

    let sign_out = Action::new_local(|_: &()| async {
        auth::sign_out().await;
        let _ = window().location().set_href("/signin");
    });

    view! {
        <nav class="flex items-center justify-between border-b border-gray-200 bg-white px-6 py-3">
            <a href="/" class="text-xl font-semibold text-sky-700">
                "biblio"
            </a>

            <div class="flex items-center gap-2">
                // admin links
                <Show when=move || session.is_admin()>
                    <A href="/admin" attr:id="overview-link" attr:class=NAV_LINK_CLASSES>
                        "Overview"
                    </A>
                    <A
                        href="/admin/manage-books"
                        attr:id="manage-books-link"
                        attr:class=NAV_LINK_CLASSES
                    >
                        "Books"
                    </A>
                    <A
                        href="/admin/manage-users"
                        attr:id="manage-users-link"
                        attr:class=NAV_LINK_CLASSES
                    >
                        "Users"
                    </A>
                    <A
                        href="/admin/manage-borrowings"
                        attr:id="manage-borrowings-link"
                        attr:class=NAV_LINK_CLASSES
                    >
                        "Borrowings"
                    </A>
                </Show>

                // guest affordances
                <Show when=move || !session.is_authenticated()>
                    <A href="/signin" attr:id="signin-btn" attr:class=NAV_LINK_CLASSES>
                        "Sign in"
                    </A>
                    <A
                        href="/signup"
                        attr:id="signup-btn"
                        attr:class="rounded-lg bg-sky-700 px-3 py-2 text-sm font-medium text-white hover:bg-sky-600"
                    >
                        "Sign up"
                    </A>
                </Show>

                // signed-in affordances
                <Show when=move || session.is_authenticated()>
                    <div id="avatar-dropdown" class="relative">
                        <button
                            id="avatar-nav-btn"
                            type="button"
                            aria-expanded=move || menu_open.get().to_string()
                            class="flex h-9 w-9 items-center justify-center rounded-full bg-sky-700 font-semibold text-white"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                menu_open.update(|open| *open = !*open);
                            }
                        >
                            <span id="avatar-letter">{avatar_letter}</span>
                        </button>
                        <div
                            id="avatar-menu"
                            class="absolute right-0 z-30 mt-2 w-44 rounded-lg border border-gray-200 bg-white py-1 shadow-lg"
                            class=("hidden", move || !menu_open.get())
                        >
                            <A
                                href="/user/profile"
                                attr:id="profile-link"
                                attr:class="block px-4 py-2 text-sm text-gray-700 hover:bg-gray-50"
                            >
                                "Profile"
                            </A>
                            <button
                                id="signout-btn"
                                type="button"
                                class="block w-full px-4 py-2 text-left text-sm text-gray-700 hover:bg-gray-50"
                                on:click=move |_| {
                                    sign_out.dispatch_local(());
                                }
                            >
                                "Sign out"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
