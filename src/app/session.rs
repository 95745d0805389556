//! The session context injected into every page
//!
//! Replaces mutable global auth state: the app constructs one [`Session`]
//! and provides it through context, so each page resolves auth the same way
//! and stays testable in isolation.

use biblio_shared::AuthToken;
use leptos::prelude::*;

use crate::api::auth;

#[derive(Clone, Copy)]
pub struct Session {
    token: LocalResource<Option<AuthToken>>,
}

impl Session {
    fn new() -> Self {
        Self {
            token: LocalResource::new(auth::state),
        }
    }

    pub fn token(&self) -> Option<AuthToken> {
        self.token.get().flatten()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.token().map(|t| t.is_admin).unwrap_or(false)
    }

    /// Re-probe the backend, e.g. after sign-out
    pub fn refresh(&self) {
        self.token.refetch();
    }

    /// Session-expiry middleware for mutation call sites: a 401 while a
    /// session was live means it expired server-side. The chrome falls back
    /// to guest state and the user lands on the sign-in page.
    pub fn expire(&self) {
        self.token.refetch();
        let _ = window().location().set_href("/signin");
    }
}

pub fn provide_session() -> Session {
    let session = Session::new();
    provide_context(session);
    session
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("App provides the session context")
}
