//! The sign-up page

use biblio_components::buttons::BusyButton;
use biblio_shared::urls;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::auth;
use crate::app::forms;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let signing_up = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if signing_up.get_untracked() {
            return;
        }

        let (_, data) = forms::submitted_form(&ev);
        error.set(None);
        signing_up.set(true);

        spawn_local(async move {
            let reply = auth::sign_up(data).await;
            signing_up.set(false);
            match reply {
                Ok(reply) if reply.succeeded() => {
                    let _ = window().location().set_href("/");
                }
                Ok(reply) => {
                    error.set(Some(reply.error.unwrap_or_else(|| {
                        "Unable to create the account".to_string()
                    })));
                }
                Err(e) => {
                    leptos::logging::warn!("Sign-up failed: {e}");
                    error.set(Some("Something went wrong. Try again.".to_string()));
                }
            }
        });
    };

    view! {
        <div class="mx-auto flex max-w-sm flex-col px-6 py-16">
            <h1 class="mb-6 text-2xl font-bold">"Create your account"</h1>

            <form id="signup-form" class="flex flex-col gap-4" on:submit=on_submit>
                <div
                    class="error rounded-lg bg-rose-50 px-3 py-2 text-sm text-rose-600"
                    class=("hidden", move || error.read().is_none())
                >
                    {move || error.get()}
                </div>

                <label class="text-sm font-medium" for="signup-username">
                    "Username"
                </label>
                <input
                    id="signup-username"
                    name="username"
                    type="text"
                    required
                    class="rounded-lg border border-gray-300 px-3 py-2 text-sm"
                />

                <label class="text-sm font-medium" for="signup-email">
                    "Email"
                </label>
                <input
                    id="signup-email"
                    name="email"
                    type="email"
                    required
                    class="rounded-lg border border-gray-300 px-3 py-2 text-sm"
                />

                <label class="text-sm font-medium" for="signup-password">
                    "Password"
                </label>
                <input
                    id="signup-password"
                    name="password"
                    type="password"
                    required
                    class="rounded-lg border border-gray-300 px-3 py-2 text-sm"
                />

                <BusyButton busy_reader=signing_up label="Sign Up" busy_label="Signing up..." />
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
                "Already registered? " <a href="/signin" class="text-sky-700 hover:underline">
                    "Sign in"
                </a>
            </p>
        </div>
    }
}
