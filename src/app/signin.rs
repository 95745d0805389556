//! The sign-in page

use biblio_components::buttons::BusyButton;
use biblio_components::icons::{EyeIcon, EyeSlashIcon};
use biblio_shared::urls;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::auth;
use crate::app::forms;

#[component]
pub fn SignInPage() -> impl IntoView {
    let signing_in = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let show_password = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if signing_in.get_untracked() {
            return;
        }

        let (_, data) = forms::submitted_form(&ev);
        error.set(None);
        signing_in.set(true);

        spawn_local(async move {
            let reply = auth::sign_in(data).await;
            // the busy state is cleared on every exit path
            signing_in.set(false);
            match reply {
                Ok(reply) if reply.succeeded() => {
                    // admins land on their dashboard
                    let target = if reply.user.map(|u| u.is_admin).unwrap_or(false) {
                        "/admin"
                    } else {
                        "/"
                    };
                    let _ = window().location().set_href(target);
                }
                Ok(reply) => {
                    error.set(Some(reply.error.unwrap_or_else(|| {
                        "Wrong email or password".to_string()
                    })));
                }
                Err(e) => {
                    leptos::logging::warn!("Sign-in failed: {e}");
                    error.set(Some("Something went wrong. Try again.".to_string()));
                }
            }
        });
    };

    view! {
        <div class="mx-auto flex max-w-sm flex-col px-6 py-16">
            <h1 class="mb-6 text-2xl font-bold">"Sign in"</h1>

            <form id="signin-form" class="flex flex-col gap-4" on:submit=on_submit>
                <div
                    class="error rounded-lg bg-rose-50 px-3 py-2 text-sm text-rose-600"
                    class=("hidden", move || error.read().is_none())
                >
                    {move || error.get()}
                </div>

                <label class="text-sm font-medium" for="signin-email">
                    "Email"
                </label>
                <input
                    id="signin-email"
                    name="email"
                    type="email"
                    required
                    class="rounded-lg border border-gray-300 px-3 py-2 text-sm"
                />

                <label class="text-sm font-medium" for="signin-password">
                    "Password"
                </label>
                <div class="relative">
                    <input
                        id="signin-password"
                        name="password"
                        required
                        class="w-full rounded-lg border border-gray-300 px-3 py-2 pr-10 text-sm"
                        type=move || if show_password.get() { "text" } else { "password" }
                    />
                    <button
                        type="button"
                        class="password absolute right-3 top-2.5 text-gray-400 hover:text-gray-600"
                        on:click=move |_| show_password.update(|shown| *shown = !*shown)
                    >
                        <Show
                            when=move || show_password.get()
                            fallback=|| view! { <EyeIcon inner_class="h-5 w-5" /> }
                        >
                            <EyeSlashIcon inner_class="h-5 w-5" />
                        </Show>
                    </button>
                </div>

                <BusyButton busy_reader=signing_in label="Sign In" busy_label="Signing in..." />
            </form>

            <div class="my-4 text-center text-xs text-gray-400">"or"</div>

            <button
                id="oauth-google"
                type="button"
                class="rounded-lg border border-gray-300 px-3 py-2 text-sm font-medium hover:bg-gray-50"
                on:click=move |_| {
                    let _ = window().location().set_href(urls::GOOGLE_OAUTH_URL);
                }
            >
                "Continue with Google"
            </button>

            <p class="mt-6 text-center text-sm text-gray-500">
                "No account yet? " <a href="/signup" class="text-sky-700 hover:underline">
                    "Sign up"
                </a>
            </p>
        </div>
    }
}
