//! The application shell: router, chrome and the per-page components

use biblio_components::toast::{provide_toaster, ToastHost};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::{path, StaticSegment};

mod admin;
mod book_details;
mod forms;
mod home;
mod navbar;
mod profile;
mod session;
mod signin;
mod signup;

pub use session::{provide_session, use_session, Session};

use biblio_components::toast::Toaster;
use biblio_shared::MutationOutcome;
use navbar::NavBar;

use crate::api::ApiError;

/// The shared tail of every mutating flow: toast the server's message, then
/// re-fetch the canonical collection on success. A 401 under a live session
/// is the expiry middleware's cue.
pub(crate) fn consume_outcome(
    result: Result<MutationOutcome, ApiError>,
    toaster: &Toaster,
    session: Session,
    on_success: impl Fn(),
) {
    match result {
        Ok(outcome) => {
            let unauthorized = outcome.unauthorized();
            let succeeded = outcome.succeeded();
            toaster.show(outcome.message);
            if succeeded {
                on_success();
            } else if unauthorized {
                session.expire();
            }
        }
        Err(e) => {
            leptos::logging::warn!("Request failed: {e}");
            toaster.error("Something went wrong. Try again.");
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();
    provide_session();

    view! {
        <Title text="biblio - library management" />

        <div class="flex min-h-screen flex-col bg-gray-50 text-gray-900">
            <Router>
                <NavBar />
                <main class="w-full grow">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=home::BrowsePage />
                        <Route path=path!("books/:id") view=book_details::BookDetailsPage />
                        <Route path=path!("signin") view=signin::SignInPage />
                        <Route path=path!("signup") view=signup::SignUpPage />
                        <Route path=path!("user/profile") view=profile::ProfilePage />
                        <ParentRoute
                            path=path!("admin")
                            view=|| {
                                view! { <Outlet /> }
                            }
                        >
                            <Route path=path!("") view=admin::AdminOverview />
                            <Route path=path!("manage-books") view=admin::ManageBooksPage />
                            <Route path=path!("manage-users") view=admin::ManageUsersPage />
                            <Route
                                path=path!("manage-borrowings")
                                view=admin::ManageBorrowingsPage
                            />
                            <Route path=path!("activities") view=admin::AllActivityPage />
                        </ParentRoute>
                    </Routes>
                </main>
                <ToastHost />
            </Router>
        </div>
    }
}
